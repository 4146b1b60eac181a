//! Data models
//!
//! This module contains the listable entities of the EduHub platform.
//! Each model provides:
//! - The database record (`sqlx::FromRow`), including optional included fields
//! - Its filter, sort field and include vocabulary
//! - A `Collection` implementation tying them together for the pager

mod article;
mod course;
mod faq;
mod olympiad;
mod review;
mod teacher;
mod user;

pub use article::{Article, ArticleFilter, ArticleInclude, ArticleSort, ArticleStatus};
pub use course::{Course, CourseFilter, CourseInclude, CourseSort, CourseStatus};
pub use faq::{Faq, FaqFilter, FaqSort};
pub use olympiad::{Olympiad, OlympiadFilter, OlympiadSort, OlympiadStatus};
pub use review::{Review, ReviewFilter, ReviewInclude, ReviewSort, MAX_RATING, MIN_RATING};
pub use teacher::{Teacher, TeacherFilter, TeacherInclude, TeacherSort};
pub use user::{User, UserFilter, UserRole, UserSort};

/// A string that does not name any variant of a model enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Join included first/last name columns
///
/// `None` when the include was not requested or the related row is missing.
pub(crate) fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last).trim().to_string()),
        (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
        (None, None) => None,
    }
}
