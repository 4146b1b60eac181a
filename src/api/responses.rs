//! Shared API response types
//!
//! Summary DTOs placed in the `nodes` of listing responses. Timestamps are
//! rendered as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Article, Course, Faq, Olympiad, Review, Teacher, User};

/// Characters of article content shown in list views
const EXCERPT_CHARS: usize = 200;

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

// ============================================================================
// Articles
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub status: String,
    pub author_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub published_at: Option<String>,
    pub created_at: String,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            excerpt: article.excerpt(EXCERPT_CHARS),
            author_name: article.author_name(),
            id: article.id,
            slug: article.slug,
            title: article.title,
            status: article.status.to_string(),
            author_id: article.author_id,
            published_at: article.published_at.map(timestamp),
            created_at: timestamp(article.created_at),
        }
    }
}

// ============================================================================
// Courses and reviews
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub capacity: i32,
    pub teacher_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i64>,
    pub average_rating: Option<f64>,
    pub starts_at: Option<String>,
    pub created_at: String,
}

impl From<Course> for CourseSummary {
    fn from(course: Course) -> Self {
        Self {
            teacher_name: course.teacher_name(),
            id: course.id,
            title: course.title,
            description: course.description,
            status: course.status.to_string(),
            capacity: course.capacity,
            teacher_id: course.teacher_id,
            review_count: course.review_count,
            average_rating: course.average_rating.map(|avg| (avg * 100.0).round() / 100.0),
            starts_at: course.starts_at.map(timestamp),
            created_at: timestamp(course.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewSummary {
    pub id: i64,
    pub course_id: i64,
    pub rating: i32,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    pub created_at: String,
}

impl From<Review> for ReviewSummary {
    fn from(review: Review) -> Self {
        Self {
            reviewer_name: review.reviewer_name(),
            id: review.id,
            course_id: review.course_id,
            rating: review.rating,
            comment: review.comment,
            created_at: timestamp(review.created_at),
        }
    }
}

// ============================================================================
// Olympiads
// ============================================================================

#[derive(Debug, Serialize)]
pub struct OlympiadSummary {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub grade: i32,
    pub status: String,
    pub starts_at: String,
    pub ends_at: String,
}

impl From<Olympiad> for OlympiadSummary {
    fn from(olympiad: Olympiad) -> Self {
        Self {
            id: olympiad.id,
            title: olympiad.title,
            subject: olympiad.subject,
            grade: olympiad.grade,
            status: olympiad.status.to_string(),
            starts_at: timestamp(olympiad.starts_at),
            ends_at: timestamp(olympiad.ends_at),
        }
    }
}

// ============================================================================
// Users and teachers
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_verified: bool,
    pub created_at: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            email: user.email,
            role: user.role.to_string(),
            is_verified: user.is_verified,
            created_at: timestamp(user.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeacherSummary {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub subject: String,
    pub bio: String,
    pub experience_years: i32,
}

impl From<Teacher> for TeacherSummary {
    fn from(teacher: Teacher) -> Self {
        Self {
            name: teacher.name(),
            id: teacher.id,
            user_id: teacher.user_id,
            email: teacher.user_email,
            subject: teacher.subject,
            bio: teacher.bio,
            experience_years: teacher.experience_years,
        }
    }
}

// ============================================================================
// FAQs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FaqSummary {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl From<Faq> for FaqSummary {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
            category: faq.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseStatus;
    use chrono::TimeZone;

    #[test]
    fn test_course_summary_rounds_average() {
        let course = Course {
            id: 1,
            title: "Algebra".to_string(),
            description: "Equations".to_string(),
            teacher_id: 1,
            capacity: 30,
            status: CourseStatus::InProgress,
            starts_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap(),
            teacher_first_name: None,
            teacher_last_name: None,
            review_count: Some(3),
            average_rating: Some(11.0 / 3.0),
        };

        let summary = CourseSummary::from(course);
        assert_eq!(summary.average_rating, Some(3.67));
        assert_eq!(summary.status, "in_progress");
        assert_eq!(summary.created_at, "2024-02-10T09:00:00+00:00");

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("teacher_name").is_none());
        assert_eq!(json["review_count"], 3);
    }
}
