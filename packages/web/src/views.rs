use chrono::{NaiveDate, NaiveDateTime};
use models::posts::{self, PostStatus};
use models::{comments, profiles, tags, users};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author_id: Uuid,
    pub status: PostStatus,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub fn post_view(post: &posts::Model, tags: &[tags::Model]) -> PostView {
    PostView {
        id: post.id,
        title: post.title.clone(),
        slug: post.slug.clone(),
        author_id: post.user_id,
        status: post.status,
        tags: tags.iter().map(|t| t.name.clone()).collect(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

#[derive(Serialize)]
pub struct PostListView {
    pub posts: Vec<PostView>,
    pub drafts: Vec<PostView>,
    pub tag: Option<String>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub flash: Option<String>,
}

#[derive(Serialize)]
pub struct CommentView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: NaiveDateTime,
}

pub fn comment_view(comment: &comments::Model) -> CommentView {
    CommentView {
        id: comment.id,
        author_id: comment.user_id,
        content: comment.content.clone(),
        created_at: comment.created_at,
    }
}

#[derive(Serialize)]
pub struct PostDetailView {
    pub post: PostView,
    pub author: String,
    pub content: String,
    pub content_html: String,
    pub comments: Vec<CommentView>,
    pub flash: Option<String>,
}

/// What an edit form starts from; also doubles as the blank create form.
#[derive(Serialize)]
pub struct PostFormView {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub tags: String,
}

impl PostFormView {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            status: PostStatus::Draft,
            tags: String::new(),
        }
    }

    pub fn from_post(post: &posts::Model, tags: &[tags::Model]) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            status: post.status,
            tags: tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Serialize)]
pub struct DeleteConfirmView {
    pub post: PostView,
}

#[derive(Serialize)]
pub struct SearchView {
    pub query: Option<String>,
    pub results: Vec<PostView>,
}

#[derive(Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

pub fn user_view(user: &users::Model) -> UserView {
    UserView {
        id: user.id,
        email: user.email.clone(),
        created_at: user.created_at,
    }
}

#[derive(Serialize)]
pub struct ProfileView {
    pub date_of_birth: Option<NaiveDate>,
    pub photo: Option<String>,
}

#[derive(Serialize)]
pub struct AccountView {
    pub user: UserView,
    pub profile: ProfileView,
}

pub fn account_view(user: &users::Model, profile: Option<&profiles::Model>) -> AccountView {
    AccountView {
        user: user_view(user),
        profile: ProfileView {
            date_of_birth: profile.and_then(|p| p.date_of_birth),
            photo: profile.and_then(|p| p.photo.clone()),
        },
    }
}
