//! Author pages

use super::{errors_list, layout, text_input};
use crate::{
    models::{Author, AuthorDetail, AuthorDraft},
    validation::FieldError,
};

pub fn list(authors: &[Author]) -> String {
    let content = if authors.is_empty() {
        "<p>There are no authors.</p>".to_string()
    } else {
        let items: String = authors
            .iter()
            .map(|a| {
                format!(
                    "<li><a href=\"{}\">{}</a> ({})</li>\n",
                    a.url(),
                    a.name(),
                    a.lifespan()
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };
    layout("Author List", &content)
}

fn books_section(detail: &AuthorDetail, empty: &str) -> String {
    if detail.books.is_empty() {
        return format!("<p>{}</p>", empty);
    }
    let items: String = detail
        .books
        .iter()
        .map(|b| {
            format!(
                "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>\n",
                b.url(),
                b.title,
                b.summary
            )
        })
        .collect();
    format!("<dl>\n{}</dl>", items)
}

pub fn detail(detail: &AuthorDetail) -> String {
    let content = format!(
        "<h2>Author: {}</h2>\n<p>{}</p>\n<h4>Books</h4>\n{}",
        detail.author.name(),
        detail.author.lifespan(),
        books_section(detail, "This author has no books.")
    );
    layout("Author Detail", &content)
}

/// Create/update form. `title` is "Create Author" or "Update Author".
pub fn form(title: &str, draft: &AuthorDraft, errors: &[FieldError]) -> String {
    let content = format!(
        r#"<form method="POST" action="">
{}{}{}{}<button type="submit">Submit</button>
</form>
{}"#,
        text_input("first_name", "First Name", &draft.first_name, "text"),
        text_input("family_name", "Family Name", &draft.family_name, "text"),
        text_input("date_of_birth", "Date of birth", &draft.date_of_birth, "date"),
        text_input("date_of_death", "Date of death", &draft.date_of_death, "date"),
        errors_list(errors)
    );
    layout(title, &content)
}

/// Confirmation page; refuses while the author still has books
pub fn delete(detail: &AuthorDetail) -> String {
    let body = if detail.books.is_empty() {
        format!(
            r#"<p>Do you really want to delete this Author?</p>
<form method="POST" action="">
<input type="hidden" name="authorid" value="{}">
<button type="submit">Delete</button>
</form>"#,
            detail.author.id
        )
    } else {
        format!(
            "<p><strong>Delete the following books before attempting to delete this author.\
             </strong></p>\n<h4>Books</h4>\n{}",
            books_section(detail, "")
        )
    };
    let content = format!(
        "<h2>{}</h2>\n<p>{}</p>\n{}",
        detail.author.name(),
        detail.author.lifespan(),
        body
    );
    layout("Delete Author", &content)
}
