use actix_web::web::{Data, Form, Path};
use actix_web::HttpResponse;
use models::posts::PostStatus;
use repositories::{PostRepository, TagRepository};
use sea_orm::DatabaseConnection;
use services::validation::input_validator::InputValidator;

use super::super::{post_url, redirect_to_login, see_other, see_other_with_flash};
use crate::errors::{field_error, WebError};
use crate::forms::PostInput;
use crate::utilities::MarkdownCache;
use crate::viewer::Viewer;
use crate::views::PostFormView;

pub async fn edit_form(
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

    // not yours: back to the read-only view, no error
    if post.user_id != user.id {
        return Ok(see_other(&post_url(&post.slug)));
    }

    let tags = TagRepository::for_post(db.get_ref(), &post)
        .await
        .map_err(WebError::Db)?;

    Ok(HttpResponse::Ok().json(PostFormView::from_post(&post, &tags)))
}

pub async fn edit(
    db: Data<DatabaseConnection>,
    cache: Data<MarkdownCache>,
    path: Path<String>,
    form: Form<PostInput>,
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
        return Ok(see_other(&post_url(&post.slug)));
    }

    let input = form.into_inner();
    if let Err(errors) = input.validate() {
        return Err(WebError::Validation(errors));
    }

    let status = input.status();
    let labels = input.tag_labels();

    match PostRepository::update_post(
        db.get_ref(),
        user.id,
        post.id,
        input.title,
        input.content,
        status,
        &labels,
    )
    .await
    {
        Ok(updated) => {
            cache.invalidate(&updated.id);
            let message = match updated.status {
                PostStatus::Published => {
                    format!("Post \"{}\" published successfully!", updated.title)
                }
                PostStatus::Draft => {
                    format!("Draft \"{}\" updated successfully!", updated.title)
                }
            };
            tracing::info!(post_id = %updated.id, user_id = %user.id, "post updated");
            Ok(see_other_with_flash(&post_url(&updated.slug), &message))
        }
        Err(message) if message.contains("already exists") => {
            Err(field_error("slug", message))
        }
        Err(message) => Err(WebError::Db(message)),
    }
}
