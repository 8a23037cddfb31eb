mod create;
mod delete;
mod read;
mod search;
mod update;

use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub(crate) const PAGE_SIZE: u64 = 3;

/// One page of the published listing, 1-based and clamped to the range the
/// data actually has.
#[derive(Debug)]
pub struct PostPage {
    pub posts: Vec<Model>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

pub struct PostRepository;

pub(crate) fn slugify(title: &str) -> String {
    let s: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    // collapse consecutive hyphens, trim leading/trailing hyphens
    let mut out = String::new();
    let mut prev_hyphen = true; // start true to trim leading
    for c in s.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push('-');
                prev_hyphen = true;
            }
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("post");
    }
    out
}

/// Derive a slug from the title, appending -1, -2, ... until no other post
/// holds it. The unique index remains the final arbiter under concurrent
/// creations; a losing racer surfaces as a save failure.
pub(crate) async fn assign_unique_slug(
    db: &DatabaseConnection,
    title: &str,
    exclude: Option<Uuid>,
) -> Result<String, String> {
    let base = slugify(title);
    let mut candidate = base.clone();
    let mut counter = 1u32;

    while PostDao::slug_in_use(db, &candidate, exclude)
        .await
        .map_err(|e| format!("Database error: {}", e))?
    {
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }

    Ok(candidate)
}

pub(crate) fn map_save_error(e: DbErr) -> String {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            "A post with this slug already exists".to_string()
        }
        _ => format!("Database error: {}", e),
    }
}
