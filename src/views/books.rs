//! Book pages

use super::{errors_list, layout, text_input};
use crate::{
    models::{Author, BookDraft, BookWithAuthor},
    validation::FieldError,
};

fn author_link(entry: &BookWithAuthor) -> String {
    match &entry.author {
        Some(author) => format!("<a href=\"{}\">{}</a>", author.url(), author.name()),
        None => "Unknown author".to_string(),
    }
}

pub fn list(books: &[BookWithAuthor]) -> String {
    let content = if books.is_empty() {
        "<p>There are no books.</p>".to_string()
    } else {
        let items: String = books
            .iter()
            .map(|b| {
                format!(
                    "<li><a href=\"{}\">{}</a> ({})</li>\n",
                    b.book.url(),
                    b.book.title,
                    author_link(b)
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };
    layout("Book List", &content)
}

fn summary_block(entry: &BookWithAuthor) -> String {
    format!(
        "<p><strong>Author:</strong> {}</p>
<p><strong>Summary:</strong> {}</p>
<p><strong>ISBN:</strong> {}</p>",
        author_link(entry),
        entry.book.summary,
        entry.book.isbn
    )
}

pub fn detail(entry: &BookWithAuthor) -> String {
    let content = format!(
        r#"<h2>Title: {}</h2>
{}
<p><a href="{}/update">Update book</a> | <a href="{}/delete">Delete book</a></p>"#,
        entry.book.title,
        summary_block(entry),
        entry.book.url(),
        entry.book.url()
    );
    layout(&entry.book.title, &content)
}

/// Create/update form with an author selector
pub fn form(title: &str, authors: &[Author], draft: &BookDraft, errors: &[FieldError]) -> String {
    let options: String = authors
        .iter()
        .map(|a| {
            let selected = if a.id == draft.author { " selected" } else { "" };
            format!("<option value=\"{}\"{}>{}</option>\n", a.id, selected, a.name())
        })
        .collect();
    let content = format!(
        r#"<form method="POST" action="">
{title_input}<div class="form-group">
<label for="author">Author:</label>
<select id="author" name="author">
<option value="">--Please select an author--</option>
{options}</select>
</div>
<div class="form-group">
<label for="summary">Summary:</label>
<textarea id="summary" name="summary">{summary}</textarea>
</div>
{isbn_input}<button type="submit">Submit</button>
</form>
{errors}"#,
        title_input = text_input("title", "Title", &draft.title, "text"),
        summary = draft.summary,
        isbn_input = text_input("isbn", "ISBN", &draft.isbn, "text"),
        errors = errors_list(errors),
    );
    layout(title, &content)
}

pub fn delete(entry: &BookWithAuthor) -> String {
    let content = format!(
        r#"<h2>{}</h2>
{}
<p>Do you really want to delete this Book?</p>
<form method="POST" action="">
<input type="hidden" name="id" value="{}">
<button type="submit">Delete</button>
</form>"#,
        entry.book.title,
        summary_block(entry),
        entry.book.id
    );
    layout("Delete Book", &content)
}
