use chrono::Utc;
use data_access_objects::{ProfileDao, UserDao};
use models::profiles;
use models::users::{ActiveModel, Model};
use sea_orm::entity::prelude::{Date, Uuid};
use sea_orm::*;
use services::validation::ActiveModelValidator;

pub struct UserRepository;

impl UserRepository {
    /// Register a user. The email pre-check mirrors the validation layer;
    /// the unique index still decides under concurrency. Every user gets an
    /// empty profile row alongside.
    pub async fn create(
        db: &DatabaseConnection,
        id: Uuid,
        email: String,
        password_hash: String,
    ) -> Result<Model, String> {
        let model = ActiveModel {
            id: ActiveValue::set(id),
            email: ActiveValue::set(email),
            password: ActiveValue::set(password_hash),
            created_at: ActiveValue::set(Some(Utc::now().naive_utc())),
            updated_at: ActiveValue::set(None),
        };
        if let Err(e) = model.validate() {
            return Err(e.to_string());
        }

        if let ActiveValue::Set(ref email) = model.email {
            let taken = UserDao::find_by_email(db, email)
                .await
                .map_err(|e| e.to_string())?
                .is_some();
            if taken {
                return Err("Email is already registered".to_string());
            }
        }

        let user = UserDao::insert(db, model).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                "Email is already registered".to_string()
            }
            _ => e.to_string(),
        })?;

        Self::ensure_profile(db, user.id).await?;

        Ok(user)
    }

    pub async fn ensure_profile(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<profiles::Model, String> {
        if let Some(existing) = ProfileDao::find_by_user(db, user_id)
            .await
            .map_err(|e| e.to_string())?
        {
            return Ok(existing);
        }

        let model = profiles::ActiveModel {
            user_id: ActiveValue::set(user_id),
            date_of_birth: ActiveValue::set(None),
            photo: ActiveValue::set(None),
            created_at: ActiveValue::set(Some(Utc::now().naive_utc())),
        };
        ProfileDao::insert(db, model).await.map_err(|e| e.to_string())
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        UserDao::find_by_email(db, email).await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        UserDao::find_by_id(db, id).await
    }

    pub async fn update_email(
        db: &DatabaseConnection,
        user: Model,
        new_email: String,
    ) -> Result<Model, String> {
        let mut model = user.into_active_model();
        model.email = ActiveValue::set(new_email);
        model.updated_at = ActiveValue::set(Some(Utc::now().naive_utc()));
        if let Err(e) = model.validate() {
            return Err(e.to_string());
        }
        UserDao::update(db, model).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                "Email is already registered".to_string()
            }
            _ => e.to_string(),
        })
    }

    pub async fn profile_for(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Option<profiles::Model>, String> {
        ProfileDao::find_by_user(db, user_id)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn update_profile(
        db: &DatabaseConnection,
        user_id: Uuid,
        date_of_birth: Option<Date>,
        photo: Option<String>,
    ) -> Result<profiles::Model, String> {
        let existing = Self::ensure_profile(db, user_id).await?;

        let mut model = existing.into_active_model();
        model.date_of_birth = ActiveValue::set(date_of_birth);
        model.photo = ActiveValue::set(photo);

        ProfileDao::update(db, model).await.map_err(|e| e.to_string())
    }
}
