//! Course review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ParseEnumError;
use crate::pagination::Collection;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// A student's review of a course
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub course_id: i64,
    /// Reviewing user ID
    pub user_id: i64,
    /// Rating from 1 to 5
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    #[serde(default)]
    pub reviewer_first_name: Option<String>,
    #[sqlx(default)]
    #[serde(default)]
    pub reviewer_last_name: Option<String>,
}

impl Review {
    /// Reviewer's full name, when included
    pub fn reviewer_name(&self) -> Option<String> {
        super::full_name(
            self.reviewer_first_name.as_deref(),
            self.reviewer_last_name.as_deref(),
        )
    }
}

/// Review listing filter
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub course_id: Option<i64>,
    pub user_id: Option<i64>,
    pub min_rating: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSort {
    CreatedAt,
    Rating,
}

impl FromStr for ReviewSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(ReviewSort::CreatedAt),
            "rating" => Ok(ReviewSort::Rating),
            _ => Err(ParseEnumError::new("review sort field", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewInclude {
    pub reviewer: bool,
}

impl Collection for Review {
    const NAME: &'static str = "reviews";
    type Record = Self;
    type Filter = ReviewFilter;
    type SortField = ReviewSort;
    type Include = ReviewInclude;
}
