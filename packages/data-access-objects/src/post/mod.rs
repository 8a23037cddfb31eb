use models::posts::{ActiveModel, Column, Entity, Model, PostStatus};
use models::prelude::Posts;
use sea_orm::entity::prelude::Uuid;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    pub async fn find_by_id_for_user(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id)
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn find_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find().filter(Column::Slug.eq(slug)).one(db).await
    }

    pub async fn find_by_slug_filtered(
        db: &DatabaseConnection,
        slug: &str,
        filter: Condition,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find()
            .filter(Column::Slug.eq(slug))
            .filter(filter)
            .one(db)
            .await
    }

    pub async fn slug_in_use(
        db: &DatabaseConnection,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut q = Posts::find().filter(Column::Slug.eq(slug));
        if let Some(id) = exclude {
            q = q.filter(Column::Id.ne(id));
        }
        Ok(q.count(db).await? > 0)
    }

    pub async fn count_pages(
        db: &DatabaseConnection,
        select: Select<Entity>,
        per_page: u64,
    ) -> Result<ItemsAndPagesNumber, DbErr> {
        select.paginate(db, per_page).num_items_and_pages().await
    }

    pub async fn fetch_page(
        db: &DatabaseConnection,
        select: Select<Entity>,
        page_index: u64,
        per_page: u64,
    ) -> Result<Vec<Model>, DbErr> {
        select.paginate(db, per_page).fetch_page(page_index).await
    }

    pub async fn find_drafts_for_user(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.eq(PostStatus::Draft))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn search_published(
        db: &DatabaseConnection,
        query: &str,
    ) -> Result<Vec<Model>, DbErr> {
        let matches = Expr::cust_with_values(
            "to_tsvector('english', title || ' ' || content) @@ plainto_tsquery('english', $1)",
            [query],
        );
        let rank = Expr::cust_with_values(
            "ts_rank(to_tsvector('english', title || ' ' || content), plainto_tsquery('english', $1))",
            [query],
        );

        Posts::find()
            .filter(Column::Status.eq(PostStatus::Published))
            .filter(matches)
            .order_by(rank, Order::Desc)
            .all(db)
            .await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Posts::insert(model).exec(db).await?;
        Posts::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted post not found".to_string()))
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
