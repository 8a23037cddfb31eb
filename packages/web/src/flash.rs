use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

pub const FLASH_COOKIE: &str = "flash";

/// Queue a one-shot success notification for the next page view. The value
/// is base64-encoded so arbitrary message text stays cookie-safe.
pub fn queue(message: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(message.as_bytes()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .finish()
}

/// Read the queued message, if any. Callers pair this with `clear` on the
/// response so the message shows exactly once.
pub fn take(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
    String::from_utf8(bytes).ok()
}

pub fn clear() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
