//! Repository behavior against both store implementations.

use std::sync::Arc;

use postdesk::database::setup_in_memory_database;
use postdesk::{InMemoryPostStore, PostData, PostRepository, SqlitePostStore, StoreError};

async fn sqlite_repo() -> PostRepository {
    let pool = setup_in_memory_database().await.unwrap();
    PostRepository::new(Arc::new(SqlitePostStore::new(pool)))
}

fn memory_repo() -> PostRepository {
    PostRepository::new(Arc::new(InMemoryPostStore::new()))
}

async fn repos() -> Vec<(&'static str, PostRepository)> {
    vec![("sqlite", sqlite_repo().await), ("memory", memory_repo())]
}

fn fields(post: &postdesk::Post) -> PostData {
    PostData::new(post.slug.clone(), post.title.clone(), post.markdown.clone())
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    for (name, repo) in repos().await {
        let created = repo.create(PostData::new("a", "T", "M")).await.unwrap();
        assert_eq!(fields(&created), PostData::new("a", "T", "M"), "{name}");

        let loaded = repo.get_by_slug("a").await.unwrap().unwrap();
        assert_eq!(fields(&loaded), PostData::new("a", "T", "M"), "{name}");
        assert_eq!(loaded.created_at, created.created_at, "{name}");
    }
}

#[tokio::test]
async fn get_missing_slug_is_none() {
    for (name, repo) in repos().await {
        assert!(repo.get_by_slug("nope").await.unwrap().is_none(), "{name}");
    }
}

#[tokio::test]
async fn list_returns_every_post() {
    for (name, repo) in repos().await {
        assert!(repo.list().await.unwrap().is_empty(), "{name}");

        repo.create(PostData::new("first", "One", "1")).await.unwrap();
        repo.create(PostData::new("second", "Two", "2")).await.unwrap();

        let mut slugs: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|post| post.slug)
            .collect();
        slugs.sort();
        assert_eq!(slugs, vec!["first", "second"], "{name}");
    }
}

#[tokio::test]
async fn rename_moves_the_post() {
    for (name, repo) in repos().await {
        repo.create(PostData::new("a", "T", "M")).await.unwrap();
        let updated = repo.update("a", PostData::new("b", "T", "M")).await.unwrap();
        assert_eq!(fields(&updated), PostData::new("b", "T", "M"), "{name}");

        assert!(repo.get_by_slug("a").await.unwrap().is_none(), "{name}");
        let loaded = repo.get_by_slug("b").await.unwrap().unwrap();
        assert_eq!(fields(&loaded), PostData::new("b", "T", "M"), "{name}");
    }
}

#[tokio::test]
async fn update_overwrites_every_field() {
    for (name, repo) in repos().await {
        let created = repo.create(PostData::new("a", "Old", "old body")).await.unwrap();
        repo.update("a", PostData::new("a", "New", "new body"))
            .await
            .unwrap();

        let loaded = repo.get_by_slug("a").await.unwrap().unwrap();
        assert_eq!(fields(&loaded), PostData::new("a", "New", "new body"), "{name}");
        assert_eq!(loaded.created_at, created.created_at, "{name}");
        assert!(loaded.updated_at >= created.updated_at, "{name}");
    }
}

#[tokio::test]
async fn repeated_update_is_idempotent() {
    for (name, repo) in repos().await {
        repo.create(PostData::new("a", "T", "M")).await.unwrap();
        let update = PostData::new("a", "T2", "M2");

        repo.update("a", update.clone()).await.unwrap();
        let once = repo.list().await.unwrap();
        repo.update("a", update).await.unwrap();
        let twice = repo.list().await.unwrap();

        assert_eq!(once.len(), 1, "{name}");
        assert_eq!(twice.len(), 1, "{name}");
        assert_eq!(fields(&once[0]), fields(&twice[0]), "{name}");
    }
}

#[tokio::test]
async fn duplicate_create_fails_and_keeps_first() {
    for (name, repo) in repos().await {
        repo.create(PostData::new("a", "First", "1")).await.unwrap();
        let err = repo
            .create(PostData::new("a", "Second", "2"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::SlugTaken(ref slug) if slug == "a"), "{name}: {err}");

        let loaded = repo.get_by_slug("a").await.unwrap().unwrap();
        assert_eq!(loaded.title, "First", "{name}");
        assert_eq!(repo.list().await.unwrap().len(), 1, "{name}");
    }
}

#[tokio::test]
async fn update_missing_slug_is_not_found() {
    for (name, repo) in repos().await {
        let err = repo
            .update("ghost", PostData::new("ghost", "T", "M"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref slug) if slug == "ghost"), "{name}: {err}");
        assert!(repo.list().await.unwrap().is_empty(), "{name}");
    }
}

#[tokio::test]
async fn rename_onto_existing_slug_fails() {
    for (name, repo) in repos().await {
        repo.create(PostData::new("a", "A", "1")).await.unwrap();
        repo.create(PostData::new("b", "B", "2")).await.unwrap();

        let err = repo
            .update("a", PostData::new("b", "A2", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::SlugTaken(_)), "{name}: {err}");

        assert_eq!(repo.get_by_slug("a").await.unwrap().unwrap().title, "A", "{name}");
        assert_eq!(repo.get_by_slug("b").await.unwrap().unwrap().title, "B", "{name}");
    }
}
