use models::comments::{ActiveModel, Column, Model};
use models::prelude::Comments;
use sea_orm::entity::prelude::Uuid;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct CommentDao;

impl CommentDao {
    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Comments::insert(model).exec(db).await?;
        Comments::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted comment not found".to_string()))
    }

    pub async fn find_approved_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Comments::find()
            .filter(Column::PostId.eq(post_id))
            .filter(Column::Approved.eq(true))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn approve_many(
        db: &DatabaseConnection,
        ids: &[Uuid],
    ) -> Result<UpdateResult, DbErr> {
        Comments::update_many()
            .col_expr(Column::Approved, Expr::value(true))
            .col_expr(
                Column::UpdatedAt,
                Expr::value(chrono::Utc::now().naive_utc()),
            )
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(db)
            .await
    }

    pub async fn count_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<u64, DbErr> {
        Comments::find()
            .filter(Column::PostId.eq(post_id))
            .count(db)
            .await
    }
}
