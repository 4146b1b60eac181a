//! Services layer - Business logic
//!
//! This module contains the business logic services for the EduHub backend.
//! Services are responsible for:
//! - Coordinating between the pager and the data source
//! - Applying configured defaults
//! - Logging and classifying failures

pub mod listing;

pub use listing::{ListingError, ListingService};
