use models::prelude::*;
use models::{comments, posts};
use sea_orm::sea_query::{Index, PostgresQueryBuilder};
use sea_orm::{DbBackend, Schema};

/// Prints the Postgres DDL for every entity, in dependency order. The unique
/// index on posts.slug and the cascading post -> comment foreign key are part
/// of this output, so the constraints the code leans on are visible artifacts.
fn main() -> std::io::Result<()> {
    let schema = Schema::new(DbBackend::Postgres);

    let tables = [
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Profiles),
        schema.create_table_from_entity(Posts),
        schema.create_table_from_entity(Tags),
        schema.create_table_from_entity(PostTags),
        schema.create_table_from_entity(Comments),
    ];
    for table in &tables {
        println!("{};", table.to_string(PostgresQueryBuilder));
    }

    let indexes = [
        Index::create()
            .name("idx_posts_created_at")
            .table(posts::Entity)
            .col(posts::Column::CreatedAt)
            .to_owned(),
        Index::create()
            .name("idx_posts_status")
            .table(posts::Entity)
            .col(posts::Column::Status)
            .to_owned(),
        Index::create()
            .name("idx_comments_created_at")
            .table(comments::Entity)
            .col(comments::Column::CreatedAt)
            .to_owned(),
        Index::create()
            .name("idx_comments_approved")
            .table(comments::Entity)
            .col(comments::Column::Approved)
            .to_owned(),
    ];
    for index in &indexes {
        println!("{};", index.to_string(PostgresQueryBuilder));
    }

    Ok(())
}
