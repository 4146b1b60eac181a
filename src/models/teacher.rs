//! Teacher profile model
//!
//! A teacher profile extends a user account; the account's name and email
//! can be loaded alongside with `TeacherInclude::user`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ParseEnumError;
use crate::pagination::Collection;

/// Teacher profile entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Teacher {
    pub id: i64,
    /// Owning user account
    pub user_id: i64,
    /// Main subject taught
    pub subject: String,
    pub bio: String,
    pub experience_years: i32,
    pub created_at: DateTime<Utc>,
    #[sqlx(default)]
    #[serde(default)]
    pub user_first_name: Option<String>,
    #[sqlx(default)]
    #[serde(default)]
    pub user_last_name: Option<String>,
    #[sqlx(default)]
    #[serde(default)]
    pub user_email: Option<String>,
}

impl Teacher {
    /// Account holder's full name, when included
    pub fn name(&self) -> Option<String> {
        super::full_name(self.user_first_name.as_deref(), self.user_last_name.as_deref())
    }
}

/// Teacher listing filter
#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    pub subject: Option<String>,
    /// Minimum years of experience, inclusive
    pub min_experience: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherSort {
    CreatedAt,
    ExperienceYears,
}

impl FromStr for TeacherSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(TeacherSort::CreatedAt),
            "experience_years" => Ok(TeacherSort::ExperienceYears),
            _ => Err(ParseEnumError::new("teacher sort field", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherInclude {
    pub user: bool,
}

impl Collection for Teacher {
    const NAME: &'static str = "teachers";
    type Record = Self;
    type Filter = TeacherFilter;
    type SortField = TeacherSort;
    type Include = TeacherInclude;
}
