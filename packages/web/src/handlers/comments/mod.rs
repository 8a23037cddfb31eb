use actix_web::web::{Data, Form, Path};
use actix_web::HttpResponse;
use repositories::{CommentRepository, PostRepository};
use sea_orm::DatabaseConnection;
use services::validation::input_validator::InputValidator;

use super::{post_url, redirect_to_login, see_other_with_flash};
use crate::config::ModerationPolicy;
use crate::errors::WebError;
use crate::forms::CommentInput;
use crate::viewer::Viewer;

/// POST on a post's detail URL: leave a comment. Whether it is immediately
/// public follows the moderation policy; pending review is the default.
pub async fn submit(
    db: Data<DatabaseConnection>,
    policy: Data<ModerationPolicy>,
    path: Path<String>,
    form: Form<CommentInput>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let Some(user) = viewer.user else {
        return Ok(redirect_to_login());
    };

    let slug = path.into_inner();
    let post = PostRepository::get_visible(db.get_ref(), &slug, Some(user.id))
        .await
        .map_err(WebError::Db)?
        .ok_or(WebError::NotFound)?;

    let input = form.into_inner();
    if let Err(errors) = input.validate() {
        return Err(WebError::Validation(errors));
    }

    let approved = policy.auto_approve;
    let comment =
        CommentRepository::create_comment(db.get_ref(), post.id, user.id, input.content, approved)
            .await
            .map_err(WebError::Db)?;

    tracing::info!(comment_id = %comment.id, post_id = %post.id, "comment submitted");
    let message = if approved {
        "Your comment has been posted."
    } else {
        "Your comment is awaiting moderation."
    };
    Ok(see_other_with_flash(&post_url(&post.slug), message))
}
