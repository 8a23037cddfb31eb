use data_access_objects::CommentDao;
use models::comments::{self, Model};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::ActiveModelValidator;

pub struct CommentRepository;

impl CommentRepository {
    /// Store a visitor's comment on a post. Whether it starts out approved is
    /// the caller's moderation policy, not decided here.
    pub async fn create_comment(
        db: &DatabaseConnection,
        post_id: Uuid,
        user_id: Uuid,
        content: String,
        approved: bool,
    ) -> Result<Model, String> {
        let model = comments::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            post_id: ActiveValue::set(post_id),
            user_id: ActiveValue::set(user_id),
            content: ActiveValue::set(content),
            approved: ActiveValue::set(approved),
            created_at: ActiveValue::set(chrono::Utc::now().naive_utc()),
            updated_at: ActiveValue::set(None),
        };

        if let Err(e) = model.validate() {
            return Err(e.to_string());
        }

        CommentDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Comments readers may see: approved only, in creation order.
    pub async fn approved_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, String> {
        CommentDao::find_approved_for_post(db, post_id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Batch approval, the moderation surface's only verb. Returns how many
    /// rows flipped.
    pub async fn approve_comments(
        db: &DatabaseConnection,
        ids: &[Uuid],
    ) -> Result<u64, String> {
        if ids.is_empty() {
            return Ok(0);
        }
        CommentDao::approve_many(db, ids)
            .await
            .map(|res| res.rows_affected)
            .map_err(|e| format!("Database error: {}", e))
    }
}
