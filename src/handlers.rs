use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use log::info;

use crate::error::{AppError, StoreError};
use crate::form::{validate_edit, validate_new, PostFormErrors};
use crate::models::{Post, PostForm};
use crate::utils::{ADMIN_PATH, POSTS_PATH};
use crate::views::{
    create_404_page, create_admin_page, create_edit_post_page, create_new_post_page,
    create_post_page, create_posts_page,
};
use crate::AppState;

type HandlerResult = Result<Response, AppError>;

pub async fn handle_root_request() -> Redirect {
    Redirect::to(POSTS_PATH)
}

pub async fn handle_posts_request(State(state): State<AppState>) -> HandlerResult {
    let posts = state.posts.list().await?;
    Ok(Html(create_posts_page(&posts).into_string()).into_response())
}

pub async fn handle_post_request(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> HandlerResult {
    let post = load_post(&state, &slug).await?;
    Ok(Html(create_post_page(&post).into_string()).into_response())
}

pub async fn handle_admin_request(State(state): State<AppState>) -> HandlerResult {
    let posts = state.posts.list().await?;
    Ok(Html(create_admin_page(&posts).into_string()).into_response())
}

pub async fn handle_new_post_page() -> Html<String> {
    Html(create_new_post_page(&PostForm::default(), &PostFormErrors::default()).into_string())
}

pub async fn handle_new_post_submit(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> HandlerResult {
    let post = match validate_new(form.clone()) {
        Ok(post) => post,
        Err(errors) => {
            info!("event=post_create status=invalid errors={errors:?}");
            return Ok(Html(create_new_post_page(&form, &errors).into_string()).into_response());
        }
    };

    match state.posts.create(post).await {
        Ok(post) => {
            info!("event=post_create status=ok slug={}", post.slug);
            Ok(Redirect::to(ADMIN_PATH).into_response())
        }
        Err(StoreError::SlugTaken(slug)) => {
            info!("event=post_create status=conflict slug={slug}");
            let errors = PostFormErrors::slug_taken();
            Ok(Html(create_new_post_page(&form, &errors).into_string()).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Load phase of the edit view.
pub async fn handle_edit_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> HandlerResult {
    let post = load_post(&state, &slug).await?;
    let errors = PostFormErrors::default();
    Ok(Html(create_edit_post_page(&post, None, &errors).into_string()).into_response())
}

/// Action phase of the edit view: validate, update by the original slug, then
/// redirect to the admin list. Failed validation re-renders the form with
/// every field error and leaves the store untouched.
pub async fn handle_edit_submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<PostForm>,
) -> HandlerResult {
    let edit = match validate_edit(form.clone()) {
        Ok(edit) => edit,
        Err(errors) => {
            info!("event=post_update status=invalid slug={slug} errors={errors:?}");
            return render_edit_with_errors(&state, &slug, &form, &errors).await;
        }
    };

    match state.posts.update(&edit.start_slug, edit.post).await {
        Ok(post) => {
            info!(
                "event=post_update status=ok from={} to={}",
                edit.start_slug, post.slug
            );
            Ok(Redirect::to(ADMIN_PATH).into_response())
        }
        Err(StoreError::SlugTaken(taken)) => {
            info!("event=post_update status=conflict slug={taken}");
            render_edit_with_errors(&state, &slug, &form, &PostFormErrors::slug_taken()).await
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn handle_404() -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        Html(create_404_page().into_string()),
    )
}

async fn load_post(state: &AppState, slug: &str) -> Result<Post, AppError> {
    state
        .posts
        .get_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::PostNotFound(slug.to_string()))
}

async fn render_edit_with_errors(
    state: &AppState,
    slug: &str,
    form: &PostForm,
    errors: &PostFormErrors,
) -> HandlerResult {
    let post = load_post(state, slug).await?;
    Ok(Html(create_edit_post_page(&post, Some(form), errors).into_string()).into_response())
}
