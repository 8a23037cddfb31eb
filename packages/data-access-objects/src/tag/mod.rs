use models::prelude::{PostTags, Tags};
use models::tags::{ActiveModel, Column, Model};
use models::{post_tags, posts};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct TagDao;

impl TagDao {
    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<Model>, DbErr> {
        Tags::find().filter(Column::Name.eq(name)).one(db).await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Tags::insert(model).exec(db).await?;
        Tags::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted tag not found".to_string()))
    }

    pub async fn find_for_post(
        db: &DatabaseConnection,
        post: &posts::Model,
    ) -> Result<Vec<Model>, DbErr> {
        post.find_related(Tags).order_by_asc(Column::Name).all(db).await
    }

    pub async fn link(
        db: &DatabaseConnection,
        post_id: Uuid,
        tag_id: Uuid,
    ) -> Result<(), DbErr> {
        let model = post_tags::ActiveModel {
            post_id: ActiveValue::set(post_id),
            tag_id: ActiveValue::set(tag_id),
        };
        PostTags::insert(model).exec_without_returning(db).await?;
        Ok(())
    }

    pub async fn unlink_all(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        PostTags::delete_many()
            .filter(post_tags::Column::PostId.eq(post_id))
            .exec(db)
            .await
    }
}
