use models::posts::PostStatus;
use serde::Deserialize;
use services::validation::field_validators::FieldValidator;
use services::validation::input_validator::{InputValidator, ValidationErrors};

const TITLE_MAX_CHARS: usize = 200;

#[derive(Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub status: Option<PostStatus>,
    /// Comma-separated labels, as submitted by the form field
    pub tags: Option<String>,
}

impl PostInput {
    pub fn status(&self) -> PostStatus {
        self.status.unwrap_or(PostStatus::Draft)
    }

    pub fn tag_labels(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl InputValidator for PostInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.title, "title", &mut errors);
        FieldValidator::validate_max_length(&self.title, "title", TITLE_MAX_CHARS, &mut errors);
        FieldValidator::validate_required_string(&self.content, "content", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Deserialize)]
pub struct CommentInput {
    pub content: String,
}

impl InputValidator for CommentInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.content, "content", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl InputValidator for RegisterInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_email(&self.email, &mut errors);
        FieldValidator::validate_password_field(&self.password, "password", &mut errors);
        FieldValidator::validate_passwords_match(&self.password, &self.password2, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl InputValidator for LoginInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.email, "email", &mut errors);
        FieldValidator::validate_required_string(&self.password, "password", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Deserialize)]
pub struct AccountInput {
    pub email: String,
    pub date_of_birth: Option<String>,
    pub photo: Option<String>,
}

impl AccountInput {
    pub fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn photo(&self) -> Option<String> {
        self.photo
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl InputValidator for AccountInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_email(&self.email, &mut errors);
        if let Some(dob) = self.date_of_birth() {
            FieldValidator::validate_date(dob, "date_of_birth", &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub tag: Option<String>,
}

impl ListQuery {
    /// Non-numeric page values fall back to the first page; past-the-end
    /// values are clamped later, against the actual page count.
    pub fn page_number(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<u64>().ok())
            .unwrap_or(1)
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

impl SearchQuery {
    pub fn term(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
