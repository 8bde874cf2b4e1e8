use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::{error, warn};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post not found: {0}")]
    NotFound(String),

    #[error("a post with slug `{0}` already exists")]
    SlugTaken(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures that end a request with an error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PostNotFound(_) | Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            warn!("event=request_failed status=not_found reason=\"{}\"", self);
            return (status, Html(views::create_404_page().into_string())).into_response();
        }

        error!("event=request_failed status=error reason=\"{}\"", self);
        (status, Html(views::create_error_page().into_string())).into_response()
    }
}
