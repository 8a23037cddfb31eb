use actix_web::cookie::{Cookie, SameSite};
use actix_web::web::{Data, Form};
use actix_web::HttpResponse;
use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use repositories::UserRepository;
use sea_orm::DatabaseConnection;
use services::authentication::token::generate_token;
use services::validation::input_validator::InputValidator;

use crate::errors::{field_error, WebError};
use crate::forms::LoginInput;
use crate::viewer::ACCESS_TOKEN_COOKIE;

fn bad_credentials() -> WebError {
    // one undifferentiated message, whichever half was wrong
    field_error("form", "Email or password incorrect".to_string())
}

pub async fn login(
    db: Data<DatabaseConnection>,
    form: Form<LoginInput>,
) -> Result<HttpResponse, WebError> {
    let input = form.into_inner();
    if let Err(errors) = input.validate() {
        return Err(WebError::Validation(errors));
    }

    let user = match UserRepository::find_by_email(db.get_ref(), &input.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!("login failed: email not found");
            return Err(bad_credentials());
        }
        Err(e) => return Err(WebError::Db(e.to_string())),
    };

    let parsed_hash = match PasswordHash::new(&user.password) {
        Ok(hash) => hash,
        Err(_) => {
            return Err(WebError::Db("Invalid password hash in database".to_string()))
        }
    };

    if Argon2::default()
        .verify_password(input.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        tracing::warn!("login failed: wrong password");
        return Err(bad_credentials());
    }

    let access_token = generate_token(&user);

    let access_cookie = Cookie::build(ACCESS_TOKEN_COOKIE, &access_token)
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(actix_web::cookie::time::Duration::hours(1))
        .finish();

    tracing::info!(user_id = %user.id, "login success");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .cookie(access_cookie)
        .finish())
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_login_sets_access_cookie_and_redirects() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;
        let email = generate_unique_email("login_ok");
        let password = valid_password();

        create_test_user_with_password(&db, &email, &password).await;

        let req = test::TestRequest::post()
            .uri("/login/")
            .set_form([("email", email.as_str()), ("password", password.as_str())])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 303);
        assert_eq!(res.headers().get("Location").unwrap(), "/");

        let set_cookie = res
            .headers()
            .get("Set-Cookie")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("access_token="));

        cleanup_user_by_email(&db, &email).await;
    }

    #[actix_web::test]
    async fn test_login_wrong_password_rejected() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;
        let email = generate_unique_email("login_wrong");

        create_test_user_with_password(&db, &email, &valid_password()).await;

        let req = test::TestRequest::post()
            .uri("/login/")
            .set_form([("email", email.as_str()), ("password", "WrongP@ss123!")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["errors"]["form"][0], "Email or password incorrect");

        cleanup_user_by_email(&db, &email).await;
    }

    #[actix_web::test]
    async fn test_login_unknown_email_gets_same_message() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;

        let req = test::TestRequest::post()
            .uri("/login/")
            .set_form([
                ("email", "nobody@example.com"),
                ("password", "SomeP@ssword123!"),
            ])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["errors"]["form"][0], "Email or password incorrect");
    }
}
