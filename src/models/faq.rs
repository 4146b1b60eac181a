//! FAQ entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::{Collection, NoInclude};

/// Frequently asked question
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Grouping shown on the help page
    pub category: String,
    /// Display order within the category
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// FAQ listing filter
#[derive(Debug, Clone, Default)]
pub struct FaqFilter {
    pub category: Option<String>,
    /// Case-insensitive match on question or answer
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqSort {
    Position,
    CreatedAt,
}

impl Collection for Faq {
    const NAME: &'static str = "faqs";
    type Record = Self;
    type Filter = FaqFilter;
    type SortField = FaqSort;
    type Include = NoInclude;
}
