//! Offset pagination
//!
//! This module provides the generic pager used by every list endpoint:
//! - `PageRequest` / `PageDefaults` for the requested page position
//! - `FilterSpec` and the `Collection` trait for typed, per-collection queries
//! - `DataSource` trait for the persistence collaborator
//! - `PageEnvelope` for the returned page plus metadata
//! - `paginate` / `try_paginate` tying them together
//!
//! # Usage
//!
//! ```ignore
//! use eduhub::models::{Course, CourseFilter, CourseSort};
//! use eduhub::pagination::{paginate, FilterSpec, PageDefaults, PageRequest, SortDirection};
//!
//! let spec = FilterSpec::<Course>::new(CourseFilter::default())
//!     .order_by(CourseSort::CreatedAt, SortDirection::Desc);
//! let page = paginate(&source, &spec, PageRequest::new(2, 10), PageDefaults::default(), |row| row.title)
//!     .await?;
//! ```

mod envelope;
mod error;
mod query;
mod request;

pub use envelope::{total_pages, PageEnvelope};
pub use error::PaginateError;
pub use query::{Collection, DataSource, FilterSpec, FindMany, NoInclude, OrderBy, SortDirection};
pub use request::{PageDefaults, PageRequest, PageWindow, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Fetch one page of `C` and compute its metadata.
///
/// Issues exactly one `find_many` and one `count` against `source`, both
/// derived from `spec`. The two run concurrently; if either fails the whole
/// call fails. `convert` runs once per fetched record, in order.
pub async fn paginate<C, S, T, F>(
    source: &S,
    spec: &FilterSpec<C>,
    request: PageRequest,
    defaults: PageDefaults,
    mut convert: F,
) -> Result<PageEnvelope<T>, PaginateError>
where
    C: Collection,
    S: DataSource<C> + ?Sized,
    F: FnMut(C::Record) -> T,
{
    try_paginate(source, spec, request, defaults, |record| Ok(convert(record))).await
}

/// Same as `paginate`, with a converter that can fail.
///
/// The first conversion failure fails the whole page; no partial result is
/// returned.
pub async fn try_paginate<C, S, T, F>(
    source: &S,
    spec: &FilterSpec<C>,
    request: PageRequest,
    defaults: PageDefaults,
    convert: F,
) -> Result<PageEnvelope<T>, PaginateError>
where
    C: Collection,
    S: DataSource<C> + ?Sized,
    F: FnMut(C::Record) -> anyhow::Result<T>,
{
    let window = request.resolve(defaults);
    let query = FindMany {
        spec,
        skip: window.skip,
        take: window.take,
    };

    let fetch = async {
        source
            .find_many(query)
            .await
            .map_err(|source| PaginateError::Fetch {
                collection: C::NAME,
                source,
            })
    };
    let count = async {
        source
            .count(&spec.filter)
            .await
            .map_err(|source| PaginateError::Count {
                collection: C::NAME,
                source,
            })
    };
    let (records, total_count) = tokio::try_join!(fetch, count)?;

    let nodes = records
        .into_iter()
        .map(convert)
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|source| PaginateError::Convert {
            collection: C::NAME,
            source,
        })?;

    tracing::debug!(
        "Paginated {}: page {} (skip {}, take {}), {} of {} record(s)",
        C::NAME,
        window.page,
        window.skip,
        window.take,
        nodes.len(),
        total_count
    );

    Ok(PageEnvelope::new(nodes, total_count, &window))
}
