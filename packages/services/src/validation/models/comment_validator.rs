use crate::validation::active_model_validator::{ActiveModelValidator, ValidationError};
use models::comments;
use sea_orm::ActiveValue;

impl ActiveModelValidator for comments::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();

        if let ActiveValue::Set(ref content) = self.content {
            if content.trim().is_empty() {
                error.add("content", "Comment cannot be empty");
            }
        }

        error.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Set;
    use uuid::Uuid;

    #[test]
    fn test_blank_comment_fails() {
        let model = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(Uuid::new_v4()),
            user_id: Set(Uuid::new_v4()),
            content: Set("  ".to_string()),
            approved: Set(false),
            created_at: Set(chrono::Utc::now().naive_utc()),
            updated_at: Set(None),
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_comment_with_content_passes() {
        let model = comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(Uuid::new_v4()),
            user_id: Set(Uuid::new_v4()),
            content: Set("Nice post!".to_string()),
            approved: Set(false),
            created_at: Set(chrono::Utc::now().naive_utc()),
            updated_at: Set(None),
        };
        assert!(model.validate().is_ok());
    }
}
