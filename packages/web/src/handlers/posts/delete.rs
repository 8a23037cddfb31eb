use actix_web::web::{Data, Path};
use actix_web::HttpResponse;
use repositories::{PostRepository, TagRepository};
use sea_orm::DatabaseConnection;

use super::super::{redirect_to_login, see_other, see_other_with_flash};
use crate::errors::WebError;
use crate::utilities::MarkdownCache;
use crate::viewer::Viewer;
use crate::views::{post_view, DeleteConfirmView};

pub async fn delete_form(
    db: Data<DatabaseConnection>,
    path: Path<String>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let Some(user) = viewer.user else {
        return Ok(redirect_to_login());
    };

    let slug = path.into_inner();
    let post = PostRepository::get_by_slug(db.get_ref(), &slug)
        .await
        .map_err(WebError::Db)?
        .ok_or(WebError::NotFound)?;

    if post.user_id != user.id {
        return Ok(see_other("/"));
    }

    let tags = TagRepository::for_post(db.get_ref(), &post)
        .await
        .map_err(WebError::Db)?;

    Ok(HttpResponse::Ok().json(DeleteConfirmView {
        post: post_view(&post, &tags),
    }))
}

pub async fn delete(
    db: Data<DatabaseConnection>,
    cache: Data<MarkdownCache>,
    path: Path<String>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let Some(user) = viewer.user else {
        return Ok(redirect_to_login());
    };

    let slug = path.into_inner();
    let post = PostRepository::get_by_slug(db.get_ref(), &slug)
        .await
        .map_err(WebError::Db)?
        .ok_or(WebError::NotFound)?;

    if post.user_id != user.id {
        return Ok(see_other("/"));
    }

    PostRepository::delete_post(db.get_ref(), user.id, post.id)
        .await
        .map_err(WebError::Db)?;
    cache.invalidate(&post.id);

    tracing::info!(post_id = %post.id, user_id = %user.id, "post deleted");
    let message = format!("Post \"{}\" deleted successfully!", post.title);
    Ok(see_other_with_flash("/", &message))
}
