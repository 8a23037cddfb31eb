use actix_web::web::{Data, Path, Query};
use actix_web::{HttpRequest, HttpResponse};
use repositories::{PostRepository, TagRepository};
use sea_orm::DatabaseConnection;

use super::post_views;
use crate::errors::WebError;
use crate::flash;
use crate::forms::ListQuery;
use crate::viewer::Viewer;
use crate::views::PostListView;

pub async fn list(
    req: HttpRequest,
    db: Data<DatabaseConnection>,
    query: Query<ListQuery>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let query = query.into_inner();
    render_list(&req, &db, &viewer, query.page_number(), query.tag).await
}

pub async fn list_by_tag(
    req: HttpRequest,
    db: Data<DatabaseConnection>,
    path: Path<String>,
    query: Query<ListQuery>,
    viewer: Viewer,
) -> Result<HttpResponse, WebError> {
    let tag = path.into_inner();
    render_list(&req, &db, &viewer, query.page_number(), Some(tag)).await
}

async fn render_list(
    req: &HttpRequest,
    db: &DatabaseConnection,
    viewer: &Viewer,
    page: u64,
    tag_name: Option<String>,
) -> Result<HttpResponse, WebError> {
    let tag = match tag_name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => Some(
            TagRepository::find_by_name(db, name)
                .await
                .map_err(WebError::Db)?
                .ok_or(WebError::NotFound)?,
        ),
        None => None,
    };

    let published = PostRepository::list_published(db, tag.as_ref(), page)
        .await
        .map_err(WebError::Db)?;

    let posts = post_views(db, &published.posts).await?;

    let drafts = match viewer.id() {
        Some(user_id) => {
            let drafts = PostRepository::drafts_for(db, user_id)
                .await
                .map_err(WebError::Db)?;
            post_views(db, &drafts).await?
        }
        None => Vec::new(),
    };

    let message = flash::take(req);
    let view = PostListView {
        posts,
        drafts,
        tag: tag.map(|t| t.name),
        page: published.page,
        total_pages: published.total_pages,
        total_items: published.total_items,
        flash: message.clone(),
    };

    let mut builder = HttpResponse::Ok();
    if message.is_some() {
        builder.cookie(flash::clear());
    }
    Ok(builder.json(view))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use actix_web::test;
    use models::posts::PostStatus;
    use repositories::TagRepository;

    #[actix_web::test]
    async fn test_list_shows_drafts_only_to_their_author() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;

        let email = generate_unique_email("list_drafts");
        let author = create_test_user_with_password(&db, &email, &valid_password()).await;
        let draft = create_test_post(&db, author.id, "Hidden Draft", "c", PostStatus::Draft).await;

        // anonymous: no drafts section content, and the draft is not listed
        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["drafts"].as_array().unwrap().is_empty());
        assert!(body["posts"]
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["slug"] != draft.slug.as_str()));

        // the author sees it under drafts
        let req = test::TestRequest::get()
            .uri("/")
            .cookie(auth_cookie(&author))
            .to_request();
        let res = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["drafts"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p["slug"] == draft.slug.as_str()));

        cleanup_user_by_email(&db, &email).await;
    }

    #[actix_web::test]
    async fn test_tag_listing_filters_and_unknown_tag_404s() {
        let db = setup_test_db().await;
        let app = test::init_service(test_app(db.clone())).await;

        let email = generate_unique_email("list_tag");
        let author = create_test_user_with_password(&db, &email, &valid_password()).await;
        let label = unique_tag_label();
        let post =
            create_test_post(&db, author.id, "Tagged Post", "c", PostStatus::Published).await;
        TagRepository::set_post_tags(&db, post.id, &[label.clone()]).await.unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/tag/{}/", label))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        let posts = body["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["slug"], post.slug.as_str());
        assert_eq!(body["tag"], label.as_str());

        let req = test::TestRequest::get()
            .uri("/tag/no-such-tag-anywhere/")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 404);

        cleanup_user_by_email(&db, &email).await;
        cleanup_tag(&db, &label).await;
    }
}
