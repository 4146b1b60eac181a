//! Seed data for tests
//!
//! `seeded_pool` returns a migrated in-memory SQLite pool holding a small,
//! fixed platform: 5 users, 2 teachers, 5 articles, 3 courses, 4 reviews,
//! 4 olympiads and 5 FAQ entries.

use anyhow::Result;

use super::{create_test_pool, migrations, DynDatabasePool};

const SEED: &[&str] = &[
    // users
    "INSERT INTO users (id, email, first_name, last_name, role, is_verified, created_at) VALUES
        (1, 'ada@example.com', 'Ada', 'Lovelace', 'teacher', 1, '2024-01-01 10:00:00'),
        (2, 'grace@example.com', 'Grace', 'Hopper', 'teacher', 1, '2024-01-02 10:00:00'),
        (3, 'alan@example.com', 'Alan', 'Turing', 'student', 0, '2024-01-03 10:00:00'),
        (4, 'emmy@example.com', 'Emmy', 'Noether', 'student', 1, '2024-01-04 10:00:00'),
        (5, 'root@example.com', 'Site', 'Admin', 'admin', 1, '2024-01-05 10:00:00')",
    // teachers
    "INSERT INTO teachers (id, user_id, subject, bio, experience_years, created_at) VALUES
        (1, 1, 'mathematics', 'Analytical engines and algebra', 12, '2024-01-06 10:00:00'),
        (2, 2, 'informatics', 'Compilers and debugging', 7, '2024-01-07 10:00:00')",
    // articles
    "INSERT INTO articles (id, slug, title, content, author_id, status, published_at, created_at) VALUES
        (1, 'fractions', 'Understanding Fractions', 'Fractions are parts of a whole', 1, 'published', '2024-02-01 09:00:00', '2024-02-01 09:00:00'),
        (2, 'loops', 'Loops in Python', 'A loop repeats a block of code', 2, 'published', '2024-02-03 09:00:00', '2024-02-03 09:00:00'),
        (3, 'draft-notes', 'Draft Notes', 'Unfinished thoughts', 1, 'draft', NULL, '2024-02-05 09:00:00'),
        (4, 'recursion', 'Recursion Explained', 'A recursive function calls itself', 2, 'published', '2024-02-07 09:00:00', '2024-02-07 09:00:00'),
        (5, 'old-news', 'Old News', 'Archived announcement', 1, 'archived', NULL, '2024-01-15 09:00:00')",
    // courses
    "INSERT INTO courses (id, title, description, teacher_id, capacity, status, starts_at, created_at) VALUES
        (1, 'Algebra Basics', 'Linear equations and fractions', 1, 30, 'open', '2024-03-01 09:00:00', '2024-02-10 09:00:00'),
        (2, 'Intro to Programming', 'Variables, loops and functions', 2, 25, 'open', '2024-03-15 09:00:00', '2024-02-11 09:00:00'),
        (3, 'Geometry', 'Shapes and proofs', 1, 20, 'completed', '2023-09-01 09:00:00', '2023-08-01 09:00:00')",
    // reviews
    "INSERT INTO reviews (id, course_id, user_id, rating, comment, created_at) VALUES
        (1, 1, 3, 5, 'Great pace', '2024-03-10 12:00:00'),
        (2, 1, 4, 4, 'Clear explanations', '2024-03-11 12:00:00'),
        (3, 1, 5, 2, 'Too fast for me', '2024-03-12 12:00:00'),
        (4, 2, 3, 3, 'Okay', '2024-03-20 12:00:00')",
    // olympiads
    "INSERT INTO olympiads (id, title, subject, grade, status, starts_at, ends_at, created_at) VALUES
        (1, 'City Math Olympiad', 'mathematics', 9, 'upcoming', '2024-04-01 09:00:00', '2024-04-01 13:00:00', '2024-02-01 09:00:00'),
        (2, 'Regional Informatics', 'informatics', 10, 'upcoming', '2024-04-10 09:00:00', '2024-04-10 14:00:00', '2024-02-02 09:00:00'),
        (3, 'School Math Cup', 'mathematics', 9, 'finished', '2023-12-01 09:00:00', '2023-12-01 12:00:00', '2023-11-01 09:00:00'),
        (4, 'Junior Math Sprint', 'mathematics', 7, 'ongoing', '2024-03-20 09:00:00', '2024-03-20 11:00:00', '2024-02-03 09:00:00')",
    // faqs
    "INSERT INTO faqs (id, question, answer, category, position, created_at) VALUES
        (1, 'How do I enroll?', 'Open the course page and press Enroll', 'courses', 1, '2024-01-10 09:00:00'),
        (2, 'Can I leave a course?', 'Yes, from your profile page', 'courses', 2, '2024-01-11 09:00:00'),
        (3, 'Who can join olympiads?', 'Any registered student', 'olympiads', 1, '2024-01-12 09:00:00'),
        (4, 'How do I reset my password?', 'Use the link on the login page', 'account', 1, '2024-01-13 09:00:00'),
        (5, 'Are courses free?', 'Most courses are free', 'courses', 3, '2024-01-14 09:00:00')",
];

/// Migrated in-memory pool with the seed data loaded
pub async fn seeded_pool() -> Result<DynDatabasePool> {
    let pool = create_test_pool().await?;
    migrations::run_migrations(&pool).await?;
    for statement in SEED {
        pool.execute(statement).await?;
    }
    Ok(pool)
}
