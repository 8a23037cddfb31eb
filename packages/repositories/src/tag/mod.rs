use data_access_objects::TagDao;
use models::{posts, tags};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct TagRepository;

impl TagRepository {
    /// Trim labels, drop empties, dedupe while keeping the submitted order.
    pub fn normalize_labels(raw: &[String]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for label in raw {
            let label = label.trim();
            if label.is_empty() {
                continue;
            }
            if !seen.iter().any(|s| s == label) {
                seen.push(label.to_string());
            }
        }
        seen
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<tags::Model>, String> {
        TagDao::find_by_name(db, name)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn find_or_create(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<tags::Model, String> {
        if let Some(existing) = Self::find_by_name(db, name).await? {
            return Ok(existing);
        }

        let model = tags::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            name: ActiveValue::set(name.to_string()),
        };
        TagDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Replace a post's tag set with the given labels.
    pub async fn set_post_tags(
        db: &DatabaseConnection,
        post_id: Uuid,
        labels: &[String],
    ) -> Result<Vec<tags::Model>, String> {
        let labels = Self::normalize_labels(labels);

        TagDao::unlink_all(db, post_id)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        let mut attached = Vec::with_capacity(labels.len());
        for label in &labels {
            let tag = Self::find_or_create(db, label).await?;
            TagDao::link(db, post_id, tag.id)
                .await
                .map_err(|e| format!("Database error: {}", e))?;
            attached.push(tag);
        }

        Ok(attached)
    }

    pub async fn for_post(
        db: &DatabaseConnection,
        post: &posts::Model,
    ) -> Result<Vec<tags::Model>, String> {
        TagDao::find_for_post(db, post)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
