//! Course model
//!
//! This module provides:
//! - `Course` record, optionally carrying its teacher's name and review stats
//! - `CourseStatus` enum for enrollment states
//! - `CourseFilter`, `CourseSort` and `CourseInclude` for listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;
use crate::pagination::Collection;

/// Course entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    /// Unique identifier
    pub id: i64,
    /// Course title
    pub title: String,
    /// Course description
    pub description: String,
    /// Teacher ID (references `teachers`)
    pub teacher_id: i64,
    /// Maximum number of enrolled students
    pub capacity: i32,
    /// Enrollment status
    #[sqlx(try_from = "String")]
    pub status: CourseStatus,
    /// Start of the course, if scheduled
    pub starts_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Teacher first name (only with `CourseInclude::teacher`)
    #[sqlx(default)]
    #[serde(default)]
    pub teacher_first_name: Option<String>,
    /// Teacher last name (only with `CourseInclude::teacher`)
    #[sqlx(default)]
    #[serde(default)]
    pub teacher_last_name: Option<String>,
    /// Number of reviews (only with `CourseInclude::review_stats`)
    #[sqlx(default)]
    #[serde(default)]
    pub review_count: Option<i64>,
    /// Average review rating, `None` without reviews
    #[sqlx(default)]
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl Course {
    /// Teacher's full name, when included
    pub fn teacher_name(&self) -> Option<String> {
        super::full_name(
            self.teacher_first_name.as_deref(),
            self.teacher_last_name.as_deref(),
        )
    }
}

/// Course enrollment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    /// Accepting enrollments
    #[default]
    Open,
    /// Running, no new enrollments
    InProgress,
    /// Finished
    Completed,
}

impl CourseStatus {
    /// Convert status to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Open => "open",
            CourseStatus::InProgress => "in_progress",
            CourseStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(CourseStatus::Open),
            "in_progress" => Ok(CourseStatus::InProgress),
            "completed" => Ok(CourseStatus::Completed),
            _ => Err(ParseEnumError::new("course status", s)),
        }
    }
}

impl TryFrom<String> for CourseStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Course listing filter
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub teacher_id: Option<i64>,
    pub status: Option<CourseStatus>,
    /// Case-insensitive match on title or description
    pub search: Option<String>,
}

/// Course sort fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseSort {
    CreatedAt,
    StartsAt,
    Title,
    Capacity,
}

impl FromStr for CourseSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(CourseSort::CreatedAt),
            "starts_at" => Ok(CourseSort::StartsAt),
            "title" => Ok(CourseSort::Title),
            "capacity" => Ok(CourseSort::Capacity),
            _ => Err(ParseEnumError::new("course sort field", s)),
        }
    }
}

/// Related data to load with courses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseInclude {
    pub teacher: bool,
    pub review_stats: bool,
}

impl Collection for Course {
    const NAME: &'static str = "courses";
    type Record = Self;
    type Filter = CourseFilter;
    type SortField = CourseSort;
    type Include = CourseInclude;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_status_strings() {
        assert_eq!(CourseStatus::InProgress.as_str(), "in_progress");
        assert_eq!(CourseStatus::InProgress.to_string(), "in_progress");
        assert_eq!("Open".parse::<CourseStatus>().unwrap(), CourseStatus::Open);
        assert_eq!(
            CourseStatus::try_from("completed".to_string()).unwrap(),
            CourseStatus::Completed
        );
        assert!("cancelled".parse::<CourseStatus>().is_err());
    }

    #[test]
    fn test_course_status_serde_matches_database_strings() {
        let json = serde_json::to_string(&CourseStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_course_sort_from_str() {
        assert_eq!("capacity".parse::<CourseSort>().unwrap(), CourseSort::Capacity);
        assert_eq!("starts_at".parse::<CourseSort>().unwrap(), CourseSort::StartsAt);
        assert!("rating".parse::<CourseSort>().is_err());
    }
}
