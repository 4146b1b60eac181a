//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;
use crate::pagination::{Collection, NoInclude};

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Email address (unique)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Platform role
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    /// Whether the email address has been confirmed
    pub is_verified: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_teacher(&self) -> bool {
        self.role == UserRole::Teacher
    }
}

/// User role on the platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Enrolls in courses and olympiads
    #[default]
    Student,
    /// Runs courses
    Teacher,
    /// Manages the platform
    Admin,
}

impl UserRole {
    /// Convert role to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(ParseEnumError::new("user role", s)),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// User listing filter
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_verified: Option<bool>,
    /// Case-insensitive match on email, first or last name
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSort {
    CreatedAt,
    Email,
    LastName,
}

impl FromStr for UserSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(UserSort::CreatedAt),
            "email" => Ok(UserSort::Email),
            "last_name" => Ok(UserSort::LastName),
            _ => Err(ParseEnumError::new("user sort field", s)),
        }
    }
}

impl Collection for User {
    const NAME: &'static str = "users";
    type Record = Self;
    type Filter = UserFilter;
    type SortField = UserSort;
    type Include = NoInclude;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Student.to_string(), "student");
        assert_eq!(UserRole::Teacher.to_string(), "teacher");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_from_str() {
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("TEACHER").unwrap(), UserRole::Teacher);
        assert_eq!(UserRole::from_str("Student").unwrap(), UserRole::Student);
        assert!(UserRole::from_str("editor").is_err());
    }

    #[test]
    fn test_user_role_default() {
        assert_eq!(UserRole::default(), UserRole::Student);
    }

    #[test]
    fn test_user_full_name() {
        let user = User {
            id: 1,
            email: "grace@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: UserRole::Teacher,
            is_verified: true,
            created_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Grace Hopper");
        assert!(user.is_teacher());
    }

    #[test]
    fn test_user_sort_from_str() {
        assert_eq!("last_name".parse::<UserSort>().unwrap(), UserSort::LastName);
        assert!("password".parse::<UserSort>().is_err());
    }
}
