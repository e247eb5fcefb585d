//! Validation and sanitization pipeline for note writes.
//!
//! Every create and update passes its raw `title`/`content` through
//! [`validate_and_normalize`]. Checks run in a fixed order and the first
//! failure wins:
//!
//! 1. presence (missing or `""`)
//! 2. title blank after trim
//! 3. content blank after trim
//! 4. title length
//! 5. content length
//! 6. HTML tag and NUL stripping (never fails)
//!
//! Trimming removes whitespace, byte-order marks and NUL from both ends.
//!
//! Clients key UI messages off the first error, so the order is part of the
//! API contract.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::defaults::{MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
use crate::models::NoteDraft;

/// Matches an HTML tag: `<` up to the first following `>`.
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Length bounds applied by the pipeline, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub max_title: usize,
    pub max_content: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title: MAX_TITLE_LENGTH,
            max_content: MAX_CONTENT_LENGTH,
        }
    }
}

impl ValidationLimits {
    pub fn new(max_title: usize, max_content: usize) -> Self {
        Self {
            max_title,
            max_content,
        }
    }

    /// Set the maximum title length.
    pub fn max_title(mut self, n: usize) -> Self {
        self.max_title = n;
        self
    }

    /// Set the maximum content length.
    pub fn max_content(mut self, n: usize) -> Self {
        self.max_content = n;
        self
    }
}

/// Which check rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    MissingFields,
    EmptyTitle,
    EmptyContent,
    TitleTooLong,
    ContentTooLong,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingFields => "MissingFields",
            Self::EmptyTitle => "EmptyTitle",
            Self::EmptyContent => "EmptyContent",
            Self::TitleTooLong => "TitleTooLong",
            Self::ContentTooLong => "ContentTooLong",
        };
        f.write_str(name)
    }
}

/// A rejected write. Always a client error (HTTP 400).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationFailure {
    /// HTTP status every validation failure maps to.
    pub const STATUS: u16 = 400;

    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Client-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        Self::STATUS
    }
}

/// Validate raw title and content, returning the trimmed, tag-stripped pair.
///
/// # Examples
///
/// ```
/// use notekeep_core::{validate_and_normalize, ValidationErrorKind, ValidationLimits};
///
/// let limits = ValidationLimits::default();
///
/// let draft = validate_and_normalize(Some("  Title  "), Some("<b>body</b>"), &limits).unwrap();
/// assert_eq!(draft.title, "Title");
/// assert_eq!(draft.content, "body");
///
/// let err = validate_and_normalize(Some("Title"), Some("   "), &limits).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::EmptyContent);
/// assert_eq!(err.message(), "Content cannot be empty");
/// ```
pub fn validate_and_normalize(
    title: Option<&str>,
    content: Option<&str>,
    limits: &ValidationLimits,
) -> Result<NoteDraft, ValidationFailure> {
    let (title, content) = match (title, content) {
        (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (trim_blank(t), trim_blank(c)),
        _ => {
            return Err(ValidationFailure::new(
                ValidationErrorKind::MissingFields,
                "Title and content are required",
            ))
        }
    };

    if title.is_empty() {
        return Err(ValidationFailure::new(
            ValidationErrorKind::EmptyTitle,
            "Title cannot be empty",
        ));
    }

    if content.is_empty() {
        return Err(ValidationFailure::new(
            ValidationErrorKind::EmptyContent,
            "Content cannot be empty",
        ));
    }

    if title.chars().count() > limits.max_title {
        return Err(ValidationFailure::new(
            ValidationErrorKind::TitleTooLong,
            format!("Title must be {} characters or less", limits.max_title),
        ));
    }

    if content.chars().count() > limits.max_content {
        return Err(ValidationFailure::new(
            ValidationErrorKind::ContentTooLong,
            format!("Content must be {} characters or less", limits.max_content),
        ));
    }

    Ok(NoteDraft {
        title: sanitize(title),
        content: sanitize(content),
    })
}

/// Trim whitespace, byte-order marks and NUL from both ends.
fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}' || c == '\0')
}

/// Strip every HTML tag and NUL character from `input`, keeping the text
/// between tags. PostgreSQL text columns cannot hold NUL.
///
/// ```
/// use notekeep_core::sanitize;
///
/// assert_eq!(
///     sanitize(r#"Test <script>alert("xss")</script> Note"#),
///     r#"Test alert("xss") Note"#
/// );
/// ```
pub fn sanitize(input: &str) -> String {
    HTML_TAG.replace_all(input, "").replace('\0', "")
}
