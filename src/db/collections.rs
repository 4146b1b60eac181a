//! SQL mappings for the platform collections
//!
//! Each model gets a `SqlCollection` impl describing its table, the columns
//! and joins behind its includes, its filter conditions and its sort columns.

use super::sql::{Conditions, SelectBuilder, SqlCollection};
use crate::models::{
    Article, ArticleFilter, ArticleInclude, ArticleSort, Course, CourseFilter, CourseInclude,
    CourseSort, Faq, FaqFilter, FaqSort, Olympiad, OlympiadFilter, OlympiadSort, Review,
    ReviewFilter, ReviewInclude, ReviewSort, Teacher, TeacherFilter, TeacherInclude, TeacherSort,
    User, UserFilter, UserSort,
};
use crate::pagination::NoInclude;

// ============================================================================
// Articles
// ============================================================================

impl SqlCollection for Article {
    const TABLE: &'static str = "articles";

    fn select(include: ArticleInclude, select: &mut SelectBuilder) {
        select.columns(&[
            "id",
            "slug",
            "title",
            "content",
            "author_id",
            "status",
            "published_at",
            "created_at",
        ]);
        if include.author {
            select.column("author.first_name AS author_first_name");
            select.column("author.last_name AS author_last_name");
            select.left_join("users author ON author.id = articles.author_id");
        }
    }

    fn filter(filter: &ArticleFilter, conditions: &mut Conditions) {
        if let Some(status) = filter.status {
            conditions.eq("articles.status", status.as_str());
        }
        if let Some(author_id) = filter.author_id {
            conditions.eq("articles.author_id", author_id);
        }
        if let Some(search) = &filter.search {
            conditions.contains_any(&["articles.title", "articles.content"], search);
        }
    }

    fn sort_column(field: ArticleSort) -> &'static str {
        match field {
            ArticleSort::CreatedAt => "articles.created_at",
            ArticleSort::PublishedAt => "articles.published_at",
            ArticleSort::Title => "articles.title",
        }
    }
}

// ============================================================================
// Courses
// ============================================================================

impl SqlCollection for Course {
    const TABLE: &'static str = "courses";

    fn select(include: CourseInclude, select: &mut SelectBuilder) {
        select.columns(&[
            "id",
            "title",
            "description",
            "teacher_id",
            "capacity",
            "status",
            "starts_at",
            "created_at",
        ]);
        if include.teacher {
            select.column("teacher_user.first_name AS teacher_first_name");
            select.column("teacher_user.last_name AS teacher_last_name");
            select.left_join("teachers teacher ON teacher.id = courses.teacher_id");
            select.left_join("users teacher_user ON teacher_user.id = teacher.user_id");
        }
        if include.review_stats {
            select.column(
                "(SELECT COUNT(*) FROM reviews r WHERE r.course_id = courses.id) AS review_count",
            );
            select.column(
                "(SELECT CAST(AVG(r.rating) AS DOUBLE) FROM reviews r \
                 WHERE r.course_id = courses.id) AS average_rating",
            );
        }
    }

    fn filter(filter: &CourseFilter, conditions: &mut Conditions) {
        if let Some(teacher_id) = filter.teacher_id {
            conditions.eq("courses.teacher_id", teacher_id);
        }
        if let Some(status) = filter.status {
            conditions.eq("courses.status", status.as_str());
        }
        if let Some(search) = &filter.search {
            conditions.contains_any(&["courses.title", "courses.description"], search);
        }
    }

    fn sort_column(field: CourseSort) -> &'static str {
        match field {
            CourseSort::CreatedAt => "courses.created_at",
            CourseSort::StartsAt => "courses.starts_at",
            CourseSort::Title => "courses.title",
            CourseSort::Capacity => "courses.capacity",
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

impl SqlCollection for Review {
    const TABLE: &'static str = "reviews";

    fn select(include: ReviewInclude, select: &mut SelectBuilder) {
        select.columns(&["id", "course_id", "user_id", "rating", "comment", "created_at"]);
        if include.reviewer {
            select.column("reviewer.first_name AS reviewer_first_name");
            select.column("reviewer.last_name AS reviewer_last_name");
            select.left_join("users reviewer ON reviewer.id = reviews.user_id");
        }
    }

    fn filter(filter: &ReviewFilter, conditions: &mut Conditions) {
        if let Some(course_id) = filter.course_id {
            conditions.eq("reviews.course_id", course_id);
        }
        if let Some(user_id) = filter.user_id {
            conditions.eq("reviews.user_id", user_id);
        }
        if let Some(min_rating) = filter.min_rating {
            conditions.at_least("reviews.rating", min_rating);
        }
    }

    fn sort_column(field: ReviewSort) -> &'static str {
        match field {
            ReviewSort::CreatedAt => "reviews.created_at",
            ReviewSort::Rating => "reviews.rating",
        }
    }
}

// ============================================================================
// Olympiads
// ============================================================================

impl SqlCollection for Olympiad {
    const TABLE: &'static str = "olympiads";

    fn select(_include: NoInclude, select: &mut SelectBuilder) {
        select.columns(&[
            "id",
            "title",
            "subject",
            "grade",
            "status",
            "starts_at",
            "ends_at",
            "created_at",
        ]);
    }

    fn filter(filter: &OlympiadFilter, conditions: &mut Conditions) {
        if let Some(subject) = &filter.subject {
            conditions.eq("olympiads.subject", subject.as_str());
        }
        if let Some(grade) = filter.grade {
            conditions.eq("olympiads.grade", grade);
        }
        if let Some(status) = filter.status {
            conditions.eq("olympiads.status", status.as_str());
        }
        if let Some(search) = &filter.search {
            conditions.contains_any(&["olympiads.title"], search);
        }
    }

    fn sort_column(field: OlympiadSort) -> &'static str {
        match field {
            OlympiadSort::StartsAt => "olympiads.starts_at",
            OlympiadSort::CreatedAt => "olympiads.created_at",
            OlympiadSort::Title => "olympiads.title",
        }
    }
}

// ============================================================================
// Users
// ============================================================================

impl SqlCollection for User {
    const TABLE: &'static str = "users";

    fn select(_include: NoInclude, select: &mut SelectBuilder) {
        select.columns(&[
            "id",
            "email",
            "first_name",
            "last_name",
            "role",
            "is_verified",
            "created_at",
        ]);
    }

    fn filter(filter: &UserFilter, conditions: &mut Conditions) {
        if let Some(role) = filter.role {
            conditions.eq("users.role", role.as_str());
        }
        if let Some(is_verified) = filter.is_verified {
            conditions.eq("users.is_verified", is_verified);
        }
        if let Some(search) = &filter.search {
            conditions.contains_any(
                &["users.email", "users.first_name", "users.last_name"],
                search,
            );
        }
    }

    fn sort_column(field: UserSort) -> &'static str {
        match field {
            UserSort::CreatedAt => "users.created_at",
            UserSort::Email => "users.email",
            UserSort::LastName => "users.last_name",
        }
    }
}

// ============================================================================
// Teachers
// ============================================================================

impl SqlCollection for Teacher {
    const TABLE: &'static str = "teachers";

    fn select(include: TeacherInclude, select: &mut SelectBuilder) {
        select.columns(&["id", "user_id", "subject", "bio", "experience_years", "created_at"]);
        if include.user {
            select.column("account.first_name AS user_first_name");
            select.column("account.last_name AS user_last_name");
            select.column("account.email AS user_email");
            select.left_join("users account ON account.id = teachers.user_id");
        }
    }

    fn filter(filter: &TeacherFilter, conditions: &mut Conditions) {
        if let Some(subject) = &filter.subject {
            conditions.eq("teachers.subject", subject.as_str());
        }
        if let Some(min_experience) = filter.min_experience {
            conditions.at_least("teachers.experience_years", min_experience);
        }
    }

    fn sort_column(field: TeacherSort) -> &'static str {
        match field {
            TeacherSort::CreatedAt => "teachers.created_at",
            TeacherSort::ExperienceYears => "teachers.experience_years",
        }
    }
}

// ============================================================================
// FAQs
// ============================================================================

impl SqlCollection for Faq {
    const TABLE: &'static str = "faqs";

    fn select(_include: NoInclude, select: &mut SelectBuilder) {
        select.columns(&["id", "question", "answer", "category", "position", "created_at"]);
    }

    fn filter(filter: &FaqFilter, conditions: &mut Conditions) {
        if let Some(category) = &filter.category {
            conditions.eq("faqs.category", category.as_str());
        }
        if let Some(search) = &filter.search {
            conditions.contains_any(&["faqs.question", "faqs.answer"], search);
        }
    }

    fn sort_column(field: FaqSort) -> &'static str {
        match field {
            FaqSort::Position => "faqs.position",
            FaqSort::CreatedAt => "faqs.created_at",
        }
    }
}
