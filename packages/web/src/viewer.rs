use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use models::users;
use sea_orm::DatabaseConnection;
use services::authentication::{get_user, Token};
use uuid::Uuid;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// The acting user for one request, resolved from the access-token cookie.
/// Handlers receive it as an argument and pass it down; nothing reads the
/// session out of ambient state. A missing, expired, or malformed token
/// degrades to an anonymous viewer rather than failing the request.
pub struct Viewer {
    pub user: Option<users::Model>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Viewer { user: None }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|u| u.id)
    }
}

impl FromRequest for Viewer {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let db = req.app_data::<Data<DatabaseConnection>>().cloned();
        let raw = req
            .cookie(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string());

        Box::pin(async move {
            let (Some(db), Some(raw)) = (db, raw) else {
                return Ok(Viewer::anonymous());
            };

            match get_user(db.get_ref(), &Token::new(raw)).await {
                Ok(user) => Ok(Viewer { user: Some(user) }),
                Err(_) => Ok(Viewer::anonymous()),
            }
        })
    }
}
