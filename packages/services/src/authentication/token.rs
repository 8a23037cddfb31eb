use crate::authentication::claims::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::Error, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use models::users;
use std::env;
use std::fmt;
use uuid::Uuid;

const DEFAULT_SECRET: &str = "marginalia-dev-secret";
const DEFAULT_EXPIRATION_SECONDS: i64 = 3600;

#[derive(Debug)]
pub struct AuthError {
    pub message: String,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// A raw access token as carried by the session cookie.
pub struct Token(pub String);

impl Token {
    pub fn new(raw: String) -> Self {
        Token(raw)
    }

    pub fn verify(&self) -> Result<TokenData<Claims>, Error> {
        let mut validation = Validation::default();
        // aud carries the user id, not a fixed audience list
        validation.validate_aud = false;
        decode::<Claims>(
            &self.0,
            &DecodingKey::from_secret(secret().as_ref()),
            &validation,
        )
    }

    pub fn get_user_id(&self) -> Result<Uuid, AuthError> {
        let data = self.verify().map_err(|e| AuthError {
            message: e.to_string(),
        })?;
        Uuid::parse_str(&data.claims.aud).map_err(|_| AuthError {
            message: "Malformed token audience".to_string(),
        })
    }
}

pub fn generate_token(user: &users::Model) -> String {
    let expiration = Utc::now() + Duration::seconds(expiration_seconds());
    let claims = Claims {
        iss: env::var("HOST_NAME").unwrap_or_else(|_| "localhost".to_string()),
        sub: "AccessToken".to_string(),
        aud: user.id.to_string(),
        exp: expiration.timestamp(),
        iat: Utc::now().timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret().as_ref()),
    )
    .unwrap()
}

fn secret() -> String {
    env::var("TOKEN_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string())
}

fn expiration_seconds() -> i64 {
    env::var("TOKEN_EXPIRATION_SECONDS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_EXPIRATION_SECONDS)
}
