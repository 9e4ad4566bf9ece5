//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::book::Book;
use crate::validation::{
    alphanumeric, check, optional_iso8601_date, parse_iso8601_date, sanitize, Submission,
};

/// Full author record from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Detail page locator
    pub fn url(&self) -> String {
        author_url(&self.id)
    }

    /// Display name, family name first
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    pub fn lifespan(&self) -> String {
        format!(
            "{} - {}",
            format_date(self.date_of_birth),
            format_date(self.date_of_death)
        )
    }
}

pub fn author_url(id: &str) -> String {
    format!("/catalog/author/{}", id)
}

/// Medium-length display date, e.g. `Feb 9, 1965`
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Validated author fields, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorInput {
    pub fn into_author(self, id: String) -> Author {
        Author {
            id,
            first_name: self.first_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

/// Raw author form submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

impl AuthorForm {
    /// Sanitize every field, then run the author rules on the result
    pub fn validate(&self) -> Submission<AuthorInput, AuthorDraft> {
        let draft = AuthorDraft {
            first_name: sanitize(&self.first_name),
            family_name: sanitize(&self.family_name),
            date_of_birth: sanitize(&self.date_of_birth),
            date_of_death: sanitize(&self.date_of_death),
        };

        let errors = check(
            &draft,
            &[
                ("first_name", draft.first_name.as_str()),
                ("family_name", draft.family_name.as_str()),
                ("date_of_birth", draft.date_of_birth.as_str()),
                ("date_of_death", draft.date_of_death.as_str()),
            ],
        );
        if !errors.is_empty() {
            return Submission::Invalid { draft, errors };
        }

        Submission::Valid(AuthorInput {
            date_of_birth: parse_iso8601_date(&draft.date_of_birth),
            date_of_death: parse_iso8601_date(&draft.date_of_death),
            first_name: draft.first_name,
            family_name: draft.family_name,
        })
    }
}

/// Sanitized author values shown in the form, valid or not
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct AuthorDraft {
    #[validate(
        length(min = 1, message = "First name must not be empty."),
        custom(
            function = "alphanumeric",
            message = "First name has non-alphanumeric characters."
        )
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, message = "Family name must not be empty."),
        custom(
            function = "alphanumeric",
            message = "Family name has non-alphanumeric characters."
        )
    )]
    pub family_name: String,
    #[validate(custom(function = "optional_iso8601_date", message = "Invalid date of birth"))]
    pub date_of_birth: String,
    #[validate(custom(function = "optional_iso8601_date", message = "Invalid date of death"))]
    pub date_of_death: String,
}

impl From<&Author> for AuthorDraft {
    fn from(author: &Author) -> Self {
        let iso = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: iso(author.date_of_birth),
            date_of_death: iso(author.date_of_death),
        }
    }
}

/// Author together with every book that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetail {
    pub author: Author,
    pub books: Vec<Book>,
}
