use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a post, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostData {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

impl PostData {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        markdown: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            markdown: markdown.into(),
        }
    }
}

/// Body of the create and edit form submissions. Every field is optional so
/// a missing field becomes a validation message instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(rename = "startSlug")]
    pub start_slug: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub markdown: Option<String>,
}
