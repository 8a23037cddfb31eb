use actix_web::web::{Data, Form};
use actix_web::HttpResponse;
use repositories::UserRepository;
use sea_orm::DatabaseConnection;
use services::validation::input_validator::InputValidator;

use super::super::{redirect_to_login, see_other_with_flash};
use crate::errors::{field_error, WebError};
use crate::forms::AccountInput;
use crate::viewer::Viewer;
use crate::views::account_view;

pub async fn account(
    db: Data<DatabaseConnection>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let Some(user) = viewer.user else {
        return Ok(redirect_to_login());
    };

    let profile = UserRepository::profile_for(db.get_ref(), user.id)
        .await
        .map_err(WebError::Db)?;

    Ok(HttpResponse::Ok().json(account_view(&user, profile.as_ref())))
}

pub async fn account_edit_form(
    db: Data<DatabaseConnection>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    account(db, viewer).await
}

pub async fn account_edit(
    db: Data<DatabaseConnection>,
    form: Form<AccountInput>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let Some(user) = viewer.user else {
        return Ok(redirect_to_login());
    };

    let input = form.into_inner();
    if let Err(errors) = input.validate() {
        return Err(WebError::Validation(errors));
    }

    // validated above, so the parse cannot fail here
    let date_of_birth = input
        .date_of_birth()
        .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
    let photo = input.photo();
    let user_id = user.id;

    if input.email != user.email {
        match UserRepository::update_email(db.get_ref(), user, input.email).await {
            Ok(_) => {}
            Err(message) if message.contains("already registered") => {
                return Err(field_error("email", message));
            }
            Err(message) => return Err(WebError::Db(message)),
        }
    }

    UserRepository::update_profile(db.get_ref(), user_id, date_of_birth, photo)
        .await
        .map_err(WebError::Db)?;

    tracing::info!(%user_id, "account updated");
    Ok(see_other_with_flash("/account/", "Account updated successfully!"))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use actix_web::test;
    use repositories::UserRepository;

    #[actix_web::test]
    async fn test_account_requires_authentication() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;

        let req = test::TestRequest::get().uri("/account/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 303);
        assert_eq!(res.headers().get("Location").unwrap(), "/login/");
    }

    #[actix_web::test]
    async fn test_account_shows_user_and_profile() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;
        let email = generate_unique_email("account_show");
        let user = create_test_user_with_password(&db, &email, &valid_password()).await;
        UserRepository::ensure_profile(&db, user.id).await.unwrap();

        let req = test::TestRequest::get()
            .uri("/account/")
            .cookie(auth_cookie(&user))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["email"], email.as_str());
        assert!(body["profile"]["date_of_birth"].is_null());

        cleanup_user_by_email(&db, &email).await;
    }

    #[actix_web::test]
    async fn test_account_edit_updates_profile_fields() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;
        let email = generate_unique_email("account_edit");
        let user = create_test_user_with_password(&db, &email, &valid_password()).await;

        let req = test::TestRequest::post()
            .uri("/account/edit/")
            .cookie(auth_cookie(&user))
            .set_form([
                ("email", email.as_str()),
                ("date_of_birth", "1990-07-14"),
                ("photo", "avatars/me.png"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 303);
        assert_eq!(res.headers().get("Location").unwrap(), "/account/");

        let profile = UserRepository::profile_for(&db, user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            profile.date_of_birth,
            chrono::NaiveDate::from_ymd_opt(1990, 7, 14)
        );
        assert_eq!(profile.photo.as_deref(), Some("avatars/me.png"));

        cleanup_user_by_email(&db, &email).await;
    }

    #[actix_web::test]
    async fn test_account_edit_rejects_bad_date() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;
        let email = generate_unique_email("account_bad_date");
        let user = create_test_user_with_password(&db, &email, &valid_password()).await;

        let req = test::TestRequest::post()
            .uri("/account/edit/")
            .cookie(auth_cookie(&user))
            .set_form([
                ("email", email.as_str()),
                ("date_of_birth", "14/07/1990"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["errors"]["date_of_birth"].is_array());

        cleanup_user_by_email(&db, &email).await;
    }
}
