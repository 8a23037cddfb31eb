use crate::validation::active_model_validator::{ActiveModelValidator, ValidationError};
use models::posts;
use sea_orm::ActiveValue;

const TITLE_MAX_CHARS: usize = 200;

impl ActiveModelValidator for posts::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();

        if let ActiveValue::Set(ref title) = self.title {
            if title.trim().is_empty() {
                error.add("title", "Title cannot be empty");
            } else if title.chars().count() > TITLE_MAX_CHARS {
                error.add("title", "Title must be at most 200 characters");
            }
        }

        if let ActiveValue::Set(ref content) = self.content {
            if content.trim().is_empty() {
                error.add("content", "Content cannot be empty");
            }
        }

        // Slug is assigned before insert and must never be stored empty
        if let ActiveValue::Set(ref slug) = self.slug {
            if slug.is_empty() {
                error.add("slug", "Slug cannot be empty");
            }
        }

        error.into_result()
    }
}
