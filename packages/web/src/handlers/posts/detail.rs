use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse};
use repositories::{CommentRepository, PostRepository, TagRepository, UserRepository};
use sea_orm::DatabaseConnection;

use crate::errors::WebError;
use crate::flash;
use crate::utilities::{render_markdown_cached, MarkdownCache};
use crate::viewer::Viewer;
use crate::views::{comment_view, post_view, PostDetailView};

pub async fn detail(
    req: HttpRequest,
    db: Data<DatabaseConnection>,
    cache: Data<MarkdownCache>,
    path: Path<String>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let slug = path.into_inner();

    let post = PostRepository::get_visible(db.get_ref(), &slug, viewer.id())
        .await
        .map_err(WebError::Db)?
        .ok_or(WebError::NotFound)?;

    let content_html = render_markdown_cached(post.id, &post.content, cache.get_ref());

    let comments = CommentRepository::approved_for_post(db.get_ref(), post.id)
        .await
        .map_err(WebError::Db)?;

    let author = UserRepository::find_by_id(db.get_ref(), post.user_id)
        .await
        .map_err(|e| WebError::Db(e.to_string()))?
        .map(|u| u.email)
        .unwrap_or_default();

    let tags = TagRepository::for_post(db.get_ref(), &post)
        .await
        .map_err(WebError::Db)?;

    let message = flash::take(&req);
    let view = PostDetailView {
        post: post_view(&post, &tags),
        author,
        content: post.content.clone(),
        content_html,
        comments: comments.iter().map(comment_view).collect(),
        flash: message.clone(),
    };

    let mut builder = HttpResponse::Ok();
    if message.is_some() {
        builder.cookie(flash::clear());
    }
    Ok(builder.json(view))
}
