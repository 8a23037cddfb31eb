use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;

use super::PostRepository;

impl PostRepository {
    /// Free-text search over published posts. Matching and ranking belong to
    /// Postgres full-text search; nothing is scored here.
    pub async fn search_published(
        db: &DatabaseConnection,
        query: &str,
    ) -> Result<Vec<Model>, String> {
        PostDao::search_published(db, query)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::test_helpers::*;
    use models::posts::PostStatus;

    #[tokio::test]
    async fn test_search_finds_published_match() {
        let db = setup_test_db().await;
        let (user, email) = create_test_user(&db, "repo_search").await;
        let marker = unique_word();

        let hit = create_test_post(
            &db, user.id, &format!("About {}", marker), "body", PostStatus::Published,
        ).await;
        create_test_post(&db, user.id, "Unrelated", "body", PostStatus::Published).await;

        let results = PostRepository::search_published(&db, &marker).await.unwrap();

        assert!(results.iter().any(|p| p.id == hit.id));
        assert!(results.iter().all(|p| p.title.contains(&marker)));

        cleanup_user_by_email(&db, &email).await;
    }

    #[tokio::test]
    async fn test_search_matches_content_too() {
        let db = setup_test_db().await;
        let (user, email) = create_test_user(&db, "repo_search_body").await;
        let marker = unique_word();

        let hit = create_test_post(
            &db, user.id, "Plain Title", &format!("text mentioning {}", marker),
            PostStatus::Published,
        ).await;

        let results = PostRepository::search_published(&db, &marker).await.unwrap();
        assert!(results.iter().any(|p| p.id == hit.id));

        cleanup_user_by_email(&db, &email).await;
    }

    #[tokio::test]
    async fn test_search_excludes_drafts() {
        let db = setup_test_db().await;
        let (user, email) = create_test_user(&db, "repo_search_draft").await;
        let marker = unique_word();

        create_test_post(
            &db, user.id, &format!("Draft {}", marker), "body", PostStatus::Draft,
        ).await;

        let results = PostRepository::search_published(&db, &marker).await.unwrap();
        assert!(results.is_empty());

        cleanup_user_by_email(&db, &email).await;
    }
}
