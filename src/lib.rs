//! EduHub - educational platform backend
//!
//! This library provides paginated listings of articles, courses, reviews,
//! olympiads, users, teachers and FAQ entries. The generic pager lives in
//! `pagination`; everything else feeds it or serves it over HTTP.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod pagination;
pub mod services;
