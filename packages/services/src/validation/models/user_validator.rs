use crate::validation::{
    active_model_validator::{ActiveModelValidator, ValidationError},
    password::validate_password,
};
use models::users;
use sea_orm::ActiveValue;

impl ActiveModelValidator for users::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();

        if let ActiveValue::Set(ref email) = self.email {
            if email.trim().is_empty() {
                error.add("email", "Email cannot be empty");
            } else if !email.contains('@') || !email.contains('.') {
                error.add("email", "Email format is invalid");
            }
        }

        if let ActiveValue::Set(ref password) = self.password {
            if password.trim().is_empty() {
                error.add("password", "Password cannot be empty");
            } else if !password.starts_with("$argon2") {
                // Raw passwords get the strength rules; stored hashes pass through
                if let Err(password_err) = validate_password(password) {
                    error.add("password", &password_err.to_string());
                }
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

    fn base_model() -> users::ActiveModel {
        users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set("test@example.com".to_string()),
            password: Set("ValidP@ssw0rd123".to_string()),
            created_at: Set(None),
            updated_at: Set(None),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(base_model().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut model = base_model();
        model.email = Set("not-an-email".to_string());
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_weak_password_fails() {
        let mut model = base_model();
        model.password = Set("short".to_string());
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_hashed_password_passes() {
        let mut model = base_model();
        model.password =
            Set("$argon2id$v=19$m=4096,t=3,p=1$somesalt$hashedpasswordvalue".to_string());
        assert!(model.validate().is_ok());
    }
}
