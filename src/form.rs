use crate::models::{PostData, PostForm};

pub const START_SLUG_REQUIRED: &str = "no initial slug";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const SLUG_REQUIRED: &str = "Slug is required";
pub const MARKDOWN_REQUIRED: &str = "Markdown is required";
pub const SLUG_TAKEN: &str = "A post with this slug already exists";
pub const SLUG_RESERVED: &str = "This slug is reserved";

/// Slugs that collide with fixed route segments under `/posts` and
/// `/posts/admin`.
pub const RESERVED_SLUGS: [&str; 2] = ["admin", "new"];

/// One message slot per form field; `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormErrors {
    pub start_slug: Option<&'static str>,
    pub title: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

impl PostFormErrors {
    pub fn has_errors(&self) -> bool {
        self.start_slug.is_some()
            || self.title.is_some()
            || self.slug.is_some()
            || self.markdown.is_some()
    }

    pub fn slug_taken() -> Self {
        Self {
            slug: Some(SLUG_TAKEN),
            ..Self::default()
        }
    }
}

/// A validated edit submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEdit {
    pub start_slug: String,
    pub post: PostData,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn check(value: &Option<String>, message: &'static str) -> Option<&'static str> {
    if present(value) {
        None
    } else {
        Some(message)
    }
}

fn check_slug(value: &Option<String>) -> Option<&'static str> {
    match value.as_deref() {
        None | Some("") => Some(SLUG_REQUIRED),
        Some(slug) if RESERVED_SLUGS.contains(&slug) => Some(SLUG_RESERVED),
        Some(_) => None,
    }
}

fn field_errors(form: &PostForm) -> PostFormErrors {
    PostFormErrors {
        start_slug: None,
        title: check(&form.title, TITLE_REQUIRED),
        slug: check_slug(&form.slug),
        markdown: check(&form.markdown, MARKDOWN_REQUIRED),
    }
}

fn into_post_data(form: PostForm) -> PostData {
    PostData {
        slug: form.slug.unwrap_or_default(),
        title: form.title.unwrap_or_default(),
        markdown: form.markdown.unwrap_or_default(),
    }
}

/// Validates a create submission. `startSlug` is ignored.
pub fn validate_new(form: PostForm) -> Result<PostData, PostFormErrors> {
    let errors = field_errors(&form);
    if errors.has_errors() {
        return Err(errors);
    }
    Ok(into_post_data(form))
}

/// Validates an edit submission. Every missing field is reported at once.
pub fn validate_edit(mut form: PostForm) -> Result<ValidEdit, PostFormErrors> {
    let errors = PostFormErrors {
        start_slug: check(&form.start_slug, START_SLUG_REQUIRED),
        ..field_errors(&form)
    };
    if errors.has_errors() {
        return Err(errors);
    }

    let start_slug = form.start_slug.take().unwrap_or_default();
    Ok(ValidEdit {
        start_slug,
        post: into_post_data(form),
    })
}
