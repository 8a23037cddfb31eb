mod create;
mod delete;
mod detail;
mod edit;
mod list;
mod search;

pub use create::{create, create_form};
pub use delete::{delete, delete_form};
pub use detail::detail;
pub use edit::{edit, edit_form};
pub use list::{list, list_by_tag};
pub use search::search;

use models::posts;
use repositories::TagRepository;
use sea_orm::DatabaseConnection;

use crate::errors::WebError;
use crate::views::{post_view, PostView};

pub(crate) async fn post_views(
    db: &DatabaseConnection,
    posts: &[posts::Model],
) -> Result<Vec<PostView>, WebError> {
    let mut views = Vec::with_capacity(posts.len());
    for post in posts {
        let tags = TagRepository::for_post(db, post)
            .await
            .map_err(WebError::Db)?;
        views.push(post_view(post, &tags));
    }
    Ok(views)
}
