use data_access_objects::PostDao;
use models::posts::{Model, PostStatus};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::{assign_unique_slug, map_save_error, PostRepository};
use crate::tag::TagRepository;

impl PostRepository {
    /// Apply an author's edit. The lookup is scoped to the owning user, so a
    /// non-owner gets "not found" here; callers decide how softly to fail.
    /// An existing slug survives edits untouched; only a post that somehow
    /// lacks one is re-slugged.
    pub async fn update_post(
        db: &DatabaseConnection,
        user_id: Uuid,
        id: Uuid,
        title: String,
        content: String,
        status: PostStatus,
        tags: &[String],
    ) -> Result<Model, String> {
        let existing = PostDao::find_by_id_for_user(db, id, user_id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Post not found".to_string())?;

        let needs_slug = existing.slug.is_empty();

        let mut am = existing.into_active_model();
        if needs_slug {
            am.slug = ActiveValue::set(assign_unique_slug(db, &title, Some(id)).await?);
        }
        am.title = ActiveValue::set(title);
        am.content = ActiveValue::set(content);
        am.status = ActiveValue::set(status);
        am.updated_at = ActiveValue::set(chrono::Utc::now().naive_utc());

        if let Err(e) = am.validate() {
            return Err(e.to_string());
        }

        let updated = PostDao::update(db, am).await.map_err(map_save_error)?;

        TagRepository::set_post_tags(db, id, tags).await?;

        Ok(updated)
    }
}
