use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::PostStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Post, PostData};

/// A process-local store with the same uniqueness rules as the SQLite one.
/// Posts enumerate in insertion order.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_many(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_unique(&self, slug: &str) -> StoreResult<Option<Post>> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|post| post.slug == slug)
            .cloned())
    }

    async fn create(&self, data: PostData) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|post| post.slug == data.slug) {
            return Err(StoreError::SlugTaken(data.slug));
        }

        let now = Utc::now();
        let post = Post {
            slug: data.slug,
            title: data.title,
            markdown: data.markdown,
            created_at: now,
            updated_at: now,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, slug: &str, data: PostData) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|post| post.slug == slug) else {
            return Err(StoreError::NotFound(slug.to_string()));
        };
        if posts
            .iter()
            .enumerate()
            .any(|(i, post)| i != index && post.slug == data.slug)
        {
            return Err(StoreError::SlugTaken(data.slug));
        }

        let post = &mut posts[index];
        post.slug = data.slug;
        post.title = data.title;
        post.markdown = data.markdown;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }
}
