use data_access_objects::PostDao;
use models::posts::{self, Model, PostStatus};
use models::prelude::Posts;
use models::tags;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{PostPage, PostRepository, PAGE_SIZE};

impl PostRepository {
    /// The published listing: newest first, optionally scoped to one tag.
    /// `page` is 1-based and clamped into the range the data has, so an
    /// out-of-range request lands on the last page rather than failing.
    pub async fn list_published(
        db: &DatabaseConnection,
        tag: Option<&tags::Model>,
        page: u64,
    ) -> Result<PostPage, String> {
        let base = match tag {
            Some(tag) => tag.find_related(Posts),
            None => Posts::find(),
        };
        let select = base
            .filter(posts::Column::Status.eq(PostStatus::Published))
            .filter(posts::Column::Slug.ne(""))
            .order_by_desc(posts::Column::CreatedAt);

        let info = PostDao::count_pages(db, select.clone(), PAGE_SIZE)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        let page = if info.number_of_pages == 0 {
            1
        } else {
            page.clamp(1, info.number_of_pages)
        };

        let rows = PostDao::fetch_page(db, select, page - 1, PAGE_SIZE)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(PostPage {
            posts: rows,
            page,
            total_pages: info.number_of_pages,
            total_items: info.number_of_items,
        })
    }

    /// The viewer's own unpublished posts, shown alongside the public list.
    pub async fn drafts_for(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<Model>, String> {
        PostDao::find_drafts_for_user(db, user_id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Readability rule: published posts are public, drafts exist only for
    /// their author.
    pub async fn get_visible(
        db: &DatabaseConnection,
        slug: &str,
        viewer: Option<Uuid>,
    ) -> Result<Option<Model>, String> {
        let mut visible = Condition::any().add(posts::Column::Status.eq(PostStatus::Published));
        if let Some(user_id) = viewer {
            visible = visible.add(posts::Column::UserId.eq(user_id));
        }

        PostDao::find_by_slug_filtered(db, slug, visible)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Unscoped lookup, for flows that do their own ownership handling.
    pub async fn get_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, String> {
        PostDao::find_by_slug(db, slug)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::tag::TagRepository;
    use crate::test_helpers::*;
    use models::posts::PostStatus;

    #[tokio::test]
    async fn test_list_published_excludes_drafts() {
        let db = setup_test_db().await;
        let (user, email) = create_test_user(&db, "repo_list").await;
        let label = unique_tag_label();

        let published =
            create_test_post(&db, user.id, "Public", "c", PostStatus::Published).await;
        let draft = create_test_post(&db, user.id, "Hidden", "c", PostStatus::Draft).await;
        TagRepository::set_post_tags(&db, published.id, &[label.clone()]).await.unwrap();
        TagRepository::set_post_tags(&db, draft.id, &[label.clone()]).await.unwrap();

        let tag = TagRepository::find_by_name(&db, &label).await.unwrap().unwrap();
        let result = PostRepository::list_published(&db, Some(&tag), 1).await.unwrap();

        assert_eq!(result.posts.len(), 1);
        assert_eq!(result.posts[0].id, published.id);

        let drafts = PostRepository::drafts_for(&db, user.id).await.unwrap();
        assert!(drafts.iter().any(|p| p.id == draft.id));

        cleanup_user_by_email(&db, &email).await;
        cleanup_tag(&db, &label).await;
    }

    #[tokio::test]
    async fn test_list_published_paginates_and_clamps() {
        let db = setup_test_db().await;
        let (user, email) = create_test_user(&db, "repo_page").await;
        let label = unique_tag_label();

        for i in 0..4 {
            let post = create_test_post(
                &db, user.id, &format!("Post {}", i), "c", PostStatus::Published,
            ).await;
            TagRepository::set_post_tags(&db, post.id, &[label.clone()]).await.unwrap();
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }

        let tag = TagRepository::find_by_name(&db, &label).await.unwrap().unwrap();

        let page1 = PostRepository::list_published(&db, Some(&tag), 1).await.unwrap();
        assert_eq!(page1.posts.len(), 3);
        assert_eq!(page1.total_pages, 2);
        assert_eq!(page1.total_items, 4);
        // newest first
        assert_eq!(page1.posts[0].title, "Post 3");

        let page2 = PostRepository::list_published(&db, Some(&tag), 2).await.unwrap();
        assert_eq!(page2.posts.len(), 1);

        // past-the-end clamps to the last page
        let clamped = PostRepository::list_published(&db, Some(&tag), 99).await.unwrap();
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.posts.len(), 1);

        cleanup_user_by_email(&db, &email).await;
        cleanup_tag(&db, &label).await;
    }

    #[tokio::test]
    async fn test_tag_filter_excludes_other_tags() {
        let db = setup_test_db().await;
        let (user, email) = create_test_user(&db, "repo_tagf").await;
        let label_a = unique_tag_label();
        let label_b = unique_tag_label();

        let tagged = create_test_post(&db, user.id, "In", "c", PostStatus::Published).await;
        let other = create_test_post(&db, user.id, "Out", "c", PostStatus::Published).await;
        TagRepository::set_post_tags(&db, tagged.id, &[label_a.clone()]).await.unwrap();
        TagRepository::set_post_tags(&db, other.id, &[label_b.clone()]).await.unwrap();

        let tag = TagRepository::find_by_name(&db, &label_a).await.unwrap().unwrap();
        let result = PostRepository::list_published(&db, Some(&tag), 1).await.unwrap();

        assert_eq!(result.posts.len(), 1);
        assert_eq!(result.posts[0].id, tagged.id);

        cleanup_user_by_email(&db, &email).await;
        cleanup_tag(&db, &label_a).await;
        cleanup_tag(&db, &label_b).await;
    }

    #[tokio::test]
    async fn test_get_visible_draft_only_for_author() {
        let db = setup_test_db().await;
        let (author, email_a) = create_test_user(&db, "repo_vis_a").await;
        let (other, email_b) = create_test_user(&db, "repo_vis_b").await;
        let draft = create_test_post(&db, author.id, "Secret", "c", PostStatus::Draft).await;

        // anonymous viewer
        let anon = PostRepository::get_visible(&db, &draft.slug, None).await.unwrap();
        assert!(anon.is_none());

        // another authenticated viewer
        let stranger =
            PostRepository::get_visible(&db, &draft.slug, Some(other.id)).await.unwrap();
        assert!(stranger.is_none());

        // the author
        let own = PostRepository::get_visible(&db, &draft.slug, Some(author.id)).await.unwrap();
        assert_eq!(own.unwrap().id, draft.id);

        cleanup_user_by_email(&db, &email_a).await;
        cleanup_user_by_email(&db, &email_b).await;
    }

    #[tokio::test]
    async fn test_get_visible_published_for_everyone() {
        let db = setup_test_db().await;
        let (author, email) = create_test_user(&db, "repo_vis_pub").await;
        let post = create_test_post(&db, author.id, "Open", "c", PostStatus::Published).await;

        let anon = PostRepository::get_visible(&db, &post.slug, None).await.unwrap();
        assert_eq!(anon.unwrap().id, post.id);

        cleanup_user_by_email(&db, &email).await;
    }
}
