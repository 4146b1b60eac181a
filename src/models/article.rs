//! Article model
//!
//! This module provides:
//! - `Article` record, optionally carrying its author's name
//! - `ArticleStatus` enum for publication states
//! - `ArticleFilter`, `ArticleSort` and `ArticleInclude` for listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;
use crate::pagination::Collection;

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    /// Unique identifier
    pub id: i64,
    /// URL-friendly slug
    pub slug: String,
    /// Article title
    pub title: String,
    /// Markdown content
    pub content: String,
    /// Author user ID
    pub author_id: i64,
    /// Publication status
    #[sqlx(try_from = "String")]
    pub status: ArticleStatus,
    /// Publication timestamp
    pub published_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Author first name (only with `ArticleInclude::author`)
    #[sqlx(default)]
    #[serde(default)]
    pub author_first_name: Option<String>,
    /// Author last name (only with `ArticleInclude::author`)
    #[sqlx(default)]
    #[serde(default)]
    pub author_last_name: Option<String>,
}

impl Article {
    /// Author's full name, when included
    pub fn author_name(&self) -> Option<String> {
        super::full_name(
            self.author_first_name.as_deref(),
            self.author_last_name.as_deref(),
        )
    }

    /// Short plain-text excerpt of the content
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", self.content[..idx].trim_end()),
            None => self.content.clone(),
        }
    }
}

/// Article publication status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Draft - not visible to public
    #[default]
    Draft,
    /// Published - visible to public
    Published,
    /// Archived - hidden but not deleted
    Archived,
}

impl ArticleStatus {
    /// Convert status to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "archived" => Ok(ArticleStatus::Archived),
            _ => Err(ParseEnumError::new("article status", s)),
        }
    }
}

impl TryFrom<String> for ArticleStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Article listing filter
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<i64>,
    /// Case-insensitive match on title or content
    pub search: Option<String>,
}

/// Article sort fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSort {
    CreatedAt,
    PublishedAt,
    Title,
}

impl FromStr for ArticleSort {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(ArticleSort::CreatedAt),
            "published_at" => Ok(ArticleSort::PublishedAt),
            "title" => Ok(ArticleSort::Title),
            _ => Err(ParseEnumError::new("article sort field", s)),
        }
    }
}

/// Related data to load with articles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleInclude {
    pub author: bool,
}

impl Collection for Article {
    const NAME: &'static str = "articles";
    type Record = Self;
    type Filter = ArticleFilter;
    type SortField = ArticleSort;
    type Include = ArticleInclude;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            id: 1,
            slug: "intro".to_string(),
            title: "Intro".to_string(),
            content: "Fractions are parts of a whole".to_string(),
            author_id: 7,
            status: ArticleStatus::Published,
            published_at: None,
            created_at: Utc::now(),
            author_first_name: None,
            author_last_name: None,
        }
    }

    #[test]
    fn test_article_status_roundtrip() {
        for status in [
            ArticleStatus::Draft,
            ArticleStatus::Published,
            ArticleStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<ArticleStatus>().unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!("PUBLISHED".parse::<ArticleStatus>().unwrap(), ArticleStatus::Published);
        assert!("deleted".parse::<ArticleStatus>().is_err());
        assert!(ArticleStatus::try_from("unknown".to_string()).is_err());
    }

    #[test]
    fn test_article_sort_from_str() {
        assert_eq!("created_at".parse::<ArticleSort>().unwrap(), ArticleSort::CreatedAt);
        assert_eq!("published_at".parse::<ArticleSort>().unwrap(), ArticleSort::PublishedAt);
        assert_eq!("title".parse::<ArticleSort>().unwrap(), ArticleSort::Title);
        assert!("content".parse::<ArticleSort>().is_err());
    }

    #[test]
    fn test_author_name() {
        let mut article = sample();
        assert_eq!(article.author_name(), None);

        article.author_first_name = Some("Ada".to_string());
        article.author_last_name = Some("Lovelace".to_string());
        assert_eq!(article.author_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_excerpt() {
        let article = sample();
        assert_eq!(article.excerpt(9), "Fractions...");
        assert_eq!(article.excerpt(100), article.content);
    }
}
