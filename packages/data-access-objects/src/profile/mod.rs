use models::prelude::Profiles;
use models::profiles::{ActiveModel, Entity, Model};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct ProfileDao;

impl ProfileDao {
    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Profiles::insert(model).exec(db).await?;
        Profiles::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted profile not found".to_string()))
    }

    pub async fn find_by_user(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Profiles::find_by_id(user_id).one(db).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }
}
