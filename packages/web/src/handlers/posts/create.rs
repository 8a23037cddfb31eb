use actix_web::web::{Data, Form};
use actix_web::HttpResponse;
use models::posts::PostStatus;
use repositories::PostRepository;
use sea_orm::DatabaseConnection;
use services::validation::input_validator::InputValidator;

use super::super::{post_url, redirect_to_login, see_other_with_flash};
use crate::errors::{field_error, WebError};
use crate::forms::PostInput;
use crate::viewer::Viewer;
use crate::views::PostFormView;

pub async fn create_form(viewer: Viewer) -> HttpResponse {
    if viewer.user.is_none() {
        return redirect_to_login();
    }
    HttpResponse::Ok().json(PostFormView::blank())
}

pub async fn create(
    db: Data<DatabaseConnection>,
    form: Form<PostInput>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let Some(user) = viewer.user else {
        return Ok(redirect_to_login());
    };

    let input = form.into_inner();
    if let Err(errors) = input.validate() {
        return Err(WebError::Validation(errors));
    }

    let status = input.status();
    let labels = input.tag_labels();

    match PostRepository::create_post(
        db.get_ref(),
        user.id,
        input.title,
        input.content,
        status,
        &labels,
    )
    .await
    {
        Ok(post) => {
            let message = match post.status {
                PostStatus::Published => {
                    format!("Post \"{}\" published successfully!", post.title)
                }
                PostStatus::Draft => {
                    format!("Draft \"{}\" saved successfully!", post.title)
                }
            };
            tracing::info!(post_id = %post.id, user_id = %user.id, "post created");
            Ok(see_other_with_flash(&post_url(&post.slug), &message))
        }
        Err(message) if message.contains("already exists") => {
            Err(field_error("slug", message))
        }
        Err(message) => {
            tracing::error!("failed to insert post");
            Err(WebError::Db(message))
        }
    }
}
