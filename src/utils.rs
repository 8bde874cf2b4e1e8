use pulldown_cmark::{html::push_html, Options, Parser};

pub const POSTS_PATH: &str = "/posts";
pub const ADMIN_PATH: &str = "/posts/admin";
pub const NEW_POST_PATH: &str = "/posts/admin/new";

/// Renders post markdown to HTML safe to embed in a page. Raw HTML in the
/// source is sanitized; scripts, event handlers and unknown tags are dropped.
pub fn convert_markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut rendered = String::new();
    push_html(&mut rendered, parser);

    wrap_code_blocks(&ammonia::clean(&rendered))
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

// Runs after sanitizing, which would strip the class attribute.
fn wrap_code_blocks(html: &str) -> String {
    html.replace("<pre>", "<div class=\"highlighter-rouge\"><pre>")
        .replace("</pre>", "</pre></div>")
}

pub fn post_path(slug: &str) -> String {
    format!("{}/{}", POSTS_PATH, urlencoding::encode(slug))
}

pub fn edit_post_path(slug: &str) -> String {
    format!("{}/{}", ADMIN_PATH, urlencoding::encode(slug))
}
