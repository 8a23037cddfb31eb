use serde::{Deserialize, Serialize};

/// Registered JWT claims carried by the access token. `aud` holds the user id.
#[derive(Deserialize, Serialize, Debug)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}
