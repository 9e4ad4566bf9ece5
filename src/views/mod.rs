//! HTML views.
//!
//! Field values coming from the store were escaped when they were submitted
//! and are written as-is. Text produced by the server itself goes through
//! [`escape_html`].

pub mod authors;
pub mod books;

use axum::http::StatusCode;

use crate::{services::catalog::CatalogCounts, validation::escape_html, validation::FieldError};

/// Wrap page content in the site layout
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>
<ul class="sidebar-nav">
<li><a href="/catalog">Home</a></li>
<li><a href="/catalog/books">All books</a></li>
<li><a href="/catalog/authors">All authors</a></li>
<li><hr></li>
<li><a href="/catalog/author/create">Create new author</a></li>
<li><a href="/catalog/book/create">Create new book</a></li>
</ul>
</nav>
<main>
<h1>{title}</h1>
{content}
</main>
</body>
</html>
"#
    )
}

/// Home page with entity counts
pub fn index(counts: &CatalogCounts) -> String {
    let content = format!(
        r#"<p>Welcome to <em>Local Library</em>.</p>
<h2>Dynamic content</h2>
<p>The library has the following record counts:</p>
<ul>
<li><strong>Books:</strong> {}</li>
<li><strong>Authors:</strong> {}</li>
</ul>"#,
        counts.book_count, counts.author_count
    );
    layout("Local Library Home", &content)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let content = format!(
        "<p class=\"error\">{}</p>",
        escape_html(message)
    );
    layout(&status.to_string(), &content)
}

/// Field errors above a form
fn errors_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>\n", escape_html(&e.msg)))
        .collect();
    format!("<ul class=\"errors\">\n{}</ul>\n", items)
}

fn text_input(name: &str, label: &str, value: &str, input_type: &str) -> String {
    format!(
        r#"<div class="form-group">
<label for="{name}">{label}:</label>
<input id="{name}" type="{input_type}" name="{name}" value="{value}">
</div>
"#
    )
}
