use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use repositories::PostRepository;
use sea_orm::DatabaseConnection;

use super::post_views;
use crate::errors::WebError;
use crate::forms::SearchQuery;
use crate::views::SearchView;

pub async fn search(
    db: Data<DatabaseConnection>,
    query: Query<SearchQuery>,
) -> Result<HttpResponse, WebError> {
    let query = query.into_inner();

    let results = match query.term() {
        Some(term) => {
            let posts = PostRepository::search_published(db.get_ref(), term)
                .await
                .map_err(WebError::Db)?;
            post_views(db.get_ref(), &posts).await?
        }
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(SearchView {
        query: query.query,
        results,
    }))
}
