//! Field sanitization and validation for submitted forms.
//!
//! Raw submissions are first sanitized (trimmed, then HTML-escaped) into a
//! draft. The draft carries `#[derive(Validate)]` rules; every rule of every
//! field runs, and the failures are flattened into [`FieldError`]s in the
//! order the form declares its fields.

mod date;

pub use date::parse_iso8601_date;

use std::fmt;

use serde::{de, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// A single failed rule on one submitted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Field value at the time the rule failed
    pub value: String,
    /// Human-readable message
    pub msg: String,
    /// Name of the submitted field
    pub path: String,
    /// Always `"body"`
    pub location: String,
}

impl FieldError {
    pub fn new(path: &str, value: &str, msg: impl Into<String>) -> Self {
        Self {
            kind: "field".to_string(),
            value: value.to_string(),
            msg: msg.into(),
            path: path.to_string(),
            location: "body".to_string(),
        }
    }
}

/// Result of running a form through its rules.
///
/// `Invalid` still carries the sanitized draft so the form can be shown again.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<I, D> {
    Valid(I),
    Invalid { draft: D, errors: Vec<FieldError> },
}

impl<I, D> Submission<I, D> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Submission::Valid(_))
    }
}

/// Trim, then HTML-escape
pub fn sanitize(raw: &str) -> String {
    escape_html(raw.trim())
}

/// Same character set and replacements as the usual `escape()` form sanitizer
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            c => out.push(c),
        }
    }
    out
}

/// Only `[A-Za-z0-9]`, and at least one of them
pub fn alphanumeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::new("alphanumeric"))
    }
}

/// Empty means absent; anything else must be an ISO-8601 date
pub fn optional_iso8601_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || parse_iso8601_date(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("iso8601"))
    }
}

/// Run the draft's rules. `fields` lists `(path, value)` in form order.
pub fn check<D: Validate>(draft: &D, fields: &[(&str, &str)]) -> Vec<FieldError> {
    match draft.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_errors(&errors, fields),
    }
}

/// Flatten `ValidationErrors` into `FieldError`s, presence failures first
/// within each field
pub fn field_errors(errors: &ValidationErrors, fields: &[(&str, &str)]) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    let mut out = Vec::new();
    for (path, value) in fields {
        let Some(failures) = by_field.get(*path) else {
            continue;
        };
        let mut failures: Vec<&ValidationError> = failures.iter().collect();
        failures.sort_by_key(|e| e.code != "length");
        for failure in failures {
            let msg = failure
                .message
                .as_deref()
                .map(str::to_string)
                .unwrap_or_else(|| failure.code.to_string());
            out.push(FieldError::new(path, value, msg));
        }
    }
    out
}

/// Accept any scalar where a string is expected: `null` becomes `""`,
/// numbers and booleans their text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl<'de> de::Visitor<'de> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<String, D2::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientString)
}
