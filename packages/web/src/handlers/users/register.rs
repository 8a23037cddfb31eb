use actix_web::web::{Data, Form};
use actix_web::HttpResponse;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use repositories::UserRepository;
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;
use services::validation::input_validator::InputValidator;

use crate::errors::{field_error, WebError};
use crate::forms::RegisterInput;
use crate::views::user_view;

/// Create the account and its empty profile. Registration does not sign the
/// new user in; logging in is its own step.
pub async fn register(
    db: Data<DatabaseConnection>,
    form: Form<RegisterInput>,
) -> Result<HttpResponse, WebError> {
    let input = form.into_inner();
    if let Err(errors) = input.validate() {
        return Err(WebError::Validation(errors));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = match argon2.hash_password(input.password.as_bytes(), &salt) {
        Ok(hash) => hash.to_string(),
        Err(_) => return Err(WebError::Db("Failed to hash password".to_string())),
    };

    match UserRepository::create(db.get_ref(), Uuid::new_v4(), input.email, password_hash).await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "registration success");
            Ok(HttpResponse::Created().json(user_view(&user)))
        }
        Err(message) if message.contains("already registered") => {
            Err(field_error("email", message))
        }
        Err(message) => {
            tracing::warn!("registration DB error");
            Err(WebError::Db(message))
        }
    }
}
