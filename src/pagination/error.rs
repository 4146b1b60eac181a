//! Pager error types

use thiserror::Error;

/// Errors raised while producing a page
///
/// None of these are retried; the whole page fails.
#[derive(Debug, Error)]
pub enum PaginateError {
    /// The fetch query failed
    #[error("Failed to fetch page from {collection}: {source}")]
    Fetch {
        collection: &'static str,
        source: anyhow::Error,
    },

    /// The count query failed
    #[error("Failed to count records in {collection}: {source}")]
    Count {
        collection: &'static str,
        source: anyhow::Error,
    },

    /// The caller's converter rejected a record
    #[error("Failed to convert record from {collection}: {source}")]
    Convert {
        collection: &'static str,
        source: anyhow::Error,
    },
}

impl PaginateError {
    /// Name of the collection the failing call was reading
    pub fn collection(&self) -> &'static str {
        match self {
            PaginateError::Fetch { collection, .. }
            | PaginateError::Count { collection, .. }
            | PaginateError::Convert { collection, .. } => collection,
        }
    }

    /// Whether the failure came from the data source rather than the converter
    pub fn is_data_source(&self) -> bool {
        !matches!(self, PaginateError::Convert { .. })
    }
}
