use data_access_objects::PostDao;
use models::posts::{self, PostStatus};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::{assign_unique_slug, map_save_error, PostRepository};
use crate::tag::TagRepository;

impl PostRepository {
    pub async fn create_post(
        db: &DatabaseConnection,
        user_id: Uuid,
        title: String,
        content: String,
        status: PostStatus,
        tags: &[String],
    ) -> Result<posts::Model, String> {
        let slug = assign_unique_slug(db, &title, None).await?;
        let now = chrono::Utc::now().naive_utc();

        let model = posts::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            title: ActiveValue::set(title),
            slug: ActiveValue::set(slug),
            user_id: ActiveValue::set(user_id),
            content: ActiveValue::set(content),
            status: ActiveValue::set(status),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        if let Err(e) = model.validate() {
            return Err(e.to_string());
        }

        let post = PostDao::insert(db, model).await.map_err(map_save_error)?;

        TagRepository::set_post_tags(db, post.id, tags).await?;

        Ok(post)
    }
}
