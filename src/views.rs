use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::form::PostFormErrors;
use crate::models::{Post, PostForm};
use crate::utils::{
    convert_markdown_to_html, edit_post_path, post_path, ADMIN_PATH, NEW_POST_PATH, POSTS_PATH,
};

const STYLES: &str = r#"
main { max-width: 56rem; margin: 0 auto; font-family: sans-serif; }
h1 { text-align: center; border-bottom: 2px solid #ddd; padding-bottom: 0.5rem; }
.field { width: 100%; border: 1px solid #888; border-radius: 4px; padding: 0.25rem 0.5rem; font-size: 1.1rem; box-sizing: border-box; }
.mono { font-family: monospace; }
.error { color: #dc2626; }
.actions { text-align: right; }
button { background: #3b82f6; color: white; border: 0; border-radius: 4px; padding: 0.5rem 1rem; }
"#;

fn create_html_head(page_title: Option<&str>) -> Markup {
    html! {
        head {
            title { (page_title.unwrap_or("postdesk")) }
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            style { (PreEscaped(STYLES)) }
        }
    }
}

fn create_page_footer() -> Markup {
    html! {
        footer {
            p { a href=(POSTS_PATH) { "Posts" } " · " a href=(ADMIN_PATH) { "Admin" } }
        }
    }
}

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            (create_html_head(Some(title)))
            body {
                main { (content) }
                (create_page_footer())
            }
        }
    }
}

fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            em class="error" { (message) }
        }
    }
}

pub fn create_posts_page(posts: &[Post]) -> Markup {
    page(
        "Posts",
        html! {
            h1 { "Posts" }
            ul {
                @for post in posts {
                    li { a href=(post_path(&post.slug)) { (post.title) } }
                }
            }
        },
    )
}

pub fn create_post_page(post: &Post) -> Markup {
    let html_output = convert_markdown_to_html(&post.markdown);
    page(
        &post.title,
        html! {
            h1 { (post.title) }
            article { (PreEscaped(html_output)) }
        },
    )
}

pub fn create_admin_page(posts: &[Post]) -> Markup {
    page(
        "Admin",
        html! {
            h1 { "Blog Admin" }
            p { a href=(NEW_POST_PATH) { "Create a New Post" } }
            ul {
                @for post in posts {
                    li {
                        a href=(edit_post_path(&post.slug)) { (post.title) }
                        " (" code { (post.slug) } ")"
                    }
                }
            }
        },
    )
}

struct FieldValues<'a> {
    title: &'a str,
    slug: &'a str,
    markdown: &'a str,
}

fn post_fields(values: &FieldValues, hints: Option<&Post>, errors: &PostFormErrors) -> Markup {
    html! {
        p {
            label {
                "Post Title: " (field_error(errors.title))
                input type="text" name="title" class="field" value=(values.title)
                    placeholder=[hints.map(|post| post.title.as_str())];
            }
        }
        p {
            label {
                "Post Slug: " (field_error(errors.slug))
                input type="text" name="slug" class="field" value=(values.slug)
                    placeholder=[hints.map(|post| post.slug.as_str())];
            }
        }
        p {
            label for="markdown" { "Markdown: " (field_error(errors.markdown)) }
            br;
            textarea id="markdown" rows="20" name="markdown" class="field mono"
                placeholder=[hints.map(|post| post.markdown.as_str())] {
                (values.markdown)
            }
        }
    }
}

pub fn create_new_post_page(submitted: &PostForm, errors: &PostFormErrors) -> Markup {
    let values = FieldValues {
        title: submitted.title.as_deref().unwrap_or_default(),
        slug: submitted.slug.as_deref().unwrap_or_default(),
        markdown: submitted.markdown.as_deref().unwrap_or_default(),
    };
    page(
        "New Post",
        html! {
            h1 { "New Post" }
            form method="post" action=(NEW_POST_PATH) {
                (post_fields(&values, None, errors))
                p class="actions" { button type="submit" { "Create Post" } }
            }
        },
    )
}

/// The edit form for `post`. Fields hold `submitted` values when a failed
/// submission is re-rendered, otherwise the post's current values.
pub fn create_edit_post_page(
    post: &Post,
    submitted: Option<&PostForm>,
    errors: &PostFormErrors,
) -> Markup {
    let values = match submitted {
        Some(form) => FieldValues {
            title: form.title.as_deref().unwrap_or_default(),
            slug: form.slug.as_deref().unwrap_or_default(),
            markdown: form.markdown.as_deref().unwrap_or_default(),
        },
        None => FieldValues {
            title: &post.title,
            slug: &post.slug,
            markdown: &post.markdown,
        },
    };
    page(
        &format!("Editing: {}", post.slug),
        html! {
            h1 { "Editing: " (post.slug) }
            form method="post" action=(edit_post_path(&post.slug)) {
                (field_error(errors.start_slug))
                input type="hidden" name="startSlug" value=(post.slug);
                (post_fields(&values, Some(post), errors))
                p class="actions" { button type="submit" { "Update Post" } }
            }
        },
    )
}

pub fn create_404_page() -> Markup {
    page(
        "404",
        html! {
            h1 { "404 - Page Not Found" }
            p { "The page you're looking for doesn't exist." }
            p { a href=(POSTS_PATH) { "Return to posts" } }
        },
    )
}

pub fn create_error_page() -> Markup {
    page(
        "Error",
        html! {
            h1 { "Something went wrong" }
            p { "The request could not be completed. Please try again later." }
            p { a href=(ADMIN_PATH) { "Return to admin" } }
        },
    )
}
