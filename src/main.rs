mod setup;

use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use setup::set_up_db;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use web::config::ModerationPolicy;
use web::routes;
use web::utilities::MarkdownCache;

fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let db = match set_up_db().await {
        Ok(db) => db,
        Err(err) => panic!("{}", err),
    };

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let moderation = ModerationPolicy::from_env();
    let markdown_cache = Data::new(MarkdownCache::new());

    tracing::info!(%bind_addr, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors_policy())
            .app_data(Data::new(db.clone()))
            .app_data(markdown_cache.clone())
            .app_data(Data::new(moderation.clone()))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
