use actix_web::web;

use crate::handlers::{comments, posts, users};

/// The route table. Fixed segments are registered before the catch-all
/// `/{slug}/` so they always win the match.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::list))
        .route("/", web::post().to(posts::list))
        .route("/create/", web::get().to(posts::create_form))
        .route("/create/", web::post().to(posts::create))
        .route("/search/", web::get().to(posts::search))
        .route("/tag/{tag}/", web::get().to(posts::list_by_tag))
        .route("/register/", web::post().to(users::register))
        .route("/login/", web::post().to(users::login))
        .route("/logout/", web::post().to(users::logout))
        .route("/account/", web::get().to(users::account))
        .route("/account/edit/", web::get().to(users::account_edit_form))
        .route("/account/edit/", web::post().to(users::account_edit))
        .route("/edit/{slug}/", web::get().to(posts::edit_form))
        .route("/edit/{slug}/", web::post().to(posts::edit))
        .route("/delete/{slug}/", web::get().to(posts::delete_form))
        .route("/delete/{slug}/", web::post().to(posts::delete))
        .route("/{slug}/", web::get().to(posts::detail))
        .route("/{slug}/", web::post().to(comments::submit));
}
