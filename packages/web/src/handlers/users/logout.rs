use actix_web::cookie::Cookie;
use actix_web::HttpResponse;

use crate::viewer::ACCESS_TOKEN_COOKIE;

pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(ACCESS_TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .cookie(cookie)
        .finish()
}
