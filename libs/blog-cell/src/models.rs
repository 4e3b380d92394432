use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::models::Doctor;
use shared_database::RestQuery;
use shared_models::error::AppError;

pub const POSTS_TABLE: &str = "posts";
pub const COMMENTS_TABLE: &str = "comments";

/// Embeds the author through `posts.author_id` and all comments through
/// `comments.post_id`.
pub const POST_WITH_RELATIONS: &str = "*,author:doctors!author_id(*),comments(*)";

/// A blog post as read back from the store, with its relations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: Option<String>,
    pub author_id: String,
    pub category: String,
    pub image: Option<String>,
    pub published: bool,
    pub views: i64,
    #[serde(default)]
    pub author: Option<Doctor>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values for inserting a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: Option<String>,
    pub author_id: String,
    pub category: String,
    pub image: Option<String>,
    pub published: bool,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub name: String,
    pub email: String,
    pub content: String,
}

/// Columns touched when a post is viewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewCount {
    pub views: i64,
    pub updated_at: DateTime<Utc>,
}

// Query parameters of GET /posts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostSearchQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilters {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl From<PostSearchQuery> for PostFilters {
    fn from(query: PostSearchQuery) -> Self {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            category: non_blank(query.category),
            search: non_blank(query.search),
        }
    }
}

impl PostFilters {
    /// Category is an exact match; search hits title or content. Newest first.
    pub fn to_query(&self) -> RestQuery {
        let mut query = RestQuery::new()
            .select(POST_WITH_RELATIONS)
            .param("comments.order", "created_at.asc");
        if let Some(category) = &self.category {
            query = query.eq("category", category);
        }
        if let Some(term) = &self.search {
            query = query.any_ilike(&["title", "content"], term);
        }
        query.order_desc("created_at")
    }

    /// In-process check of the same predicates the store applies.
    pub fn matches(&self, post: &Post) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .map(|category| &post.category == category)
            .unwrap_or(true);
        let search_ok = self
            .search
            .as_ref()
            .map(|term| {
                let term = term.to_lowercase();
                post.title.to_lowercase().contains(&term) || post.content.to_lowercase().contains(&term)
            })
            .unwrap_or(true);
        category_ok && search_ok
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::PostNotFound => AppError::NotFound(err.to_string()),
            BlogError::Database(e) => AppError::from_store(e),
        }
    }
}
