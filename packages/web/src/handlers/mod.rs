pub mod comments;
pub mod posts;
pub mod users;

use actix_web::HttpResponse;

use crate::flash;

pub(crate) fn post_url(slug: &str) -> String {
    format!("/{}/", slug)
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub(crate) fn see_other_with_flash(location: &str, message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .cookie(flash::queue(message))
        .finish()
}

pub(crate) fn redirect_to_login() -> HttpResponse {
    see_other("/login/")
}
