//! Olympiad model
//!
//! Subject competitions for a single school grade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;
use crate::pagination::{Collection, NoInclude};

/// Olympiad entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Olympiad {
    pub id: i64,
    pub title: String,
    /// Subject, e.g. "mathematics"
    pub subject: String,
    /// School grade the olympiad targets
    pub grade: i32,
    #[sqlx(try_from = "String")]
    pub status: OlympiadStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Olympiad lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OlympiadStatus {
    #[default]
    Upcoming,
    Ongoing,
    Finished,
}

impl OlympiadStatus {
    /// Convert status to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OlympiadStatus::Upcoming => "upcoming",
            OlympiadStatus::Ongoing => "ongoing",
            OlympiadStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for OlympiadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OlympiadStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(OlympiadStatus::Upcoming),
            "ongoing" => Ok(OlympiadStatus::Ongoing),
            "finished" => Ok(OlympiadStatus::Finished),
            _ => Err(ParseEnumError::new("olympiad status", s)),
        }
    }
}

impl TryFrom<String> for OlympiadStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Olympiad listing filter
#[derive(Debug, Clone, Default)]
pub struct OlympiadFilter {
    pub subject: Option<String>,
    pub grade: Option<i32>,
    pub status: Option<OlympiadStatus>,
    /// Case-insensitive match on title
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OlympiadSort {
    StartsAt,
    CreatedAt,
    Title,
}

impl FromStr for OlympiadSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starts_at" => Ok(OlympiadSort::StartsAt),
            "created_at" => Ok(OlympiadSort::CreatedAt),
            "title" => Ok(OlympiadSort::Title),
            _ => Err(ParseEnumError::new("olympiad sort field", s)),
        }
    }
}

impl Collection for Olympiad {
    const NAME: &'static str = "olympiads";
    type Record = Self;
    type Filter = OlympiadFilter;
    type SortField = OlympiadSort;
    type Include = NoInclude;
}
