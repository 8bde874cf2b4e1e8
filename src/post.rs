use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::{Post, PostData};
use crate::store::PostStore;

/// Data access for posts. Each operation hands straight through to the
/// injected store.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn PostStore>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> StoreResult<Vec<Post>> {
        self.store.find_many().await
    }

    pub async fn create(&self, post: PostData) -> StoreResult<Post> {
        self.store.create(post).await
    }

    /// `Ok(None)` when no post has this slug.
    pub async fn get_by_slug(&self, slug: &str) -> StoreResult<Option<Post>> {
        self.store.find_unique(slug).await
    }

    /// Looks the post up by `original_slug` and overwrites all three fields,
    /// renaming it when `post.slug` differs.
    pub async fn update(&self, original_slug: &str, post: PostData) -> StoreResult<Post> {
        self.store.update(original_slug, post).await
    }
}
