//! The relational record boundary the post repository is built on.
//!
//! Implementations own all durable state. Slugs are unique: `create` and a
//! renaming `update` fail with `StoreError::SlugTaken` on collision, and
//! `update` fails with `StoreError::NotFound` when the lookup slug has no
//! record.

mod memory;
mod sqlite;

pub use memory::InMemoryPostStore;
pub use sqlite::SqlitePostStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Post, PostData};

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every post, in the store's natural enumeration order.
    async fn find_many(&self) -> StoreResult<Vec<Post>>;

    async fn find_unique(&self, slug: &str) -> StoreResult<Option<Post>>;

    async fn create(&self, data: PostData) -> StoreResult<Post>;

    /// Overwrites slug, title and markdown of the post currently stored
    /// under `slug`.
    async fn update(&self, slug: &str, data: PostData) -> StoreResult<Post>;
}
