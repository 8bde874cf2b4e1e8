//! A small blog admin panel: list, create, read and edit markdown posts
//! stored in SQLite, served as server-rendered HTML forms.

use std::sync::Arc;

use axum::{routing::get, Router};

pub mod config;
pub mod database;
pub mod error;
pub mod form;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod post;
pub mod store;
pub mod utils;
pub mod views;

pub use error::{AppError, StoreError};
pub use models::{Post, PostData, PostForm};
pub use post::PostRepository;
pub use store::{InMemoryPostStore, PostStore, SqlitePostStore};

#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: PostRepository::new(store),
        }
    }
}

pub fn setup_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root_request))
        .route("/posts", get(handlers::handle_posts_request))
        .route("/posts/:slug", get(handlers::handle_post_request))
        .route("/posts/admin", get(handlers::handle_admin_request))
        .route(
            "/posts/admin/new",
            get(handlers::handle_new_post_page).post(handlers::handle_new_post_submit),
        )
        .route(
            "/posts/admin/:slug",
            get(handlers::handle_edit_page).post(handlers::handle_edit_submit),
        )
        .fallback(handlers::handle_404)
        .with_state(state)
}
