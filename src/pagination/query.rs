//! Typed query description and the data source seam
//!
//! This module provides:
//! - `Collection` trait naming a set of records and its query vocabulary
//! - `FilterSpec` describing selection, ordering and includes for one collection
//! - `FindMany` merging a spec with the pager's offset/limit
//! - `DataSource` trait the pager reads through

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named collection of records with its own filter, sort and include types
pub trait Collection: Send + Sync + 'static {
    /// Collection name, used in errors and logs
    const NAME: &'static str;

    /// Raw record as returned by the data source
    type Record: Send;

    /// Selection criteria
    type Filter: Send + Sync;

    /// Fields the collection can be ordered by
    type SortField: Copy + fmt::Debug + Send + Sync;

    /// Related data to attach to each record
    type Include: Copy + Default + fmt::Debug + Send + Sync;
}

/// Include type for collections without related data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoInclude;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Parse direction from a query-string value
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// One ordering clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Selection, ordering and includes for one collection
///
/// Built fresh by each caller. Never carries offset or limit; the pager owns
/// those and merges them in through `FindMany`.
pub struct FilterSpec<C: Collection> {
    /// Which records to select
    pub filter: C::Filter,
    /// Ordering clauses, applied in sequence
    pub order_by: Vec<OrderBy<C::SortField>>,
    /// Related data to attach
    pub include: C::Include,
}

impl<C: Collection> FilterSpec<C> {
    /// Create a spec with the given filter, no ordering and no includes
    pub fn new(filter: C::Filter) -> Self {
        Self {
            filter,
            order_by: Vec::new(),
            include: C::Include::default(),
        }
    }

    /// Append an ordering clause
    pub fn order_by(mut self, field: C::SortField, direction: SortDirection) -> Self {
        self.order_by.push(OrderBy { field, direction });
        self
    }

    /// Set the includes
    pub fn include(mut self, include: C::Include) -> Self {
        self.include = include;
        self
    }
}

impl<C: Collection> Default for FilterSpec<C>
where
    C::Filter: Default,
{
    fn default() -> Self {
        Self::new(C::Filter::default())
    }
}

impl<C: Collection> fmt::Debug for FilterSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSpec")
            .field("collection", &C::NAME)
            .field("order_by", &self.order_by)
            .field("include", &self.include)
            .finish_non_exhaustive()
    }
}

/// A filter spec with offset/limit merged in
pub struct FindMany<'a, C: Collection> {
    pub spec: &'a FilterSpec<C>,
    pub skip: u64,
    pub take: u32,
}

impl<C: Collection> Clone for FindMany<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection> Copy for FindMany<'_, C> {}

impl<'a, C: Collection> FindMany<'a, C> {
    pub fn filter(&self) -> &'a C::Filter {
        &self.spec.filter
    }

    pub fn order_by(&self) -> &'a [OrderBy<C::SortField>] {
        &self.spec.order_by
    }

    pub fn include(&self) -> C::Include {
        self.spec.include
    }
}

/// Read access to one kind of collection
///
/// `count` only ever receives the filter, so includes, ordering and the
/// page window cannot influence it.
#[async_trait]
pub trait DataSource<C: Collection>: Send + Sync {
    /// Fetch the records selected by `query`, in order
    async fn find_many(&self, query: FindMany<'_, C>) -> Result<Vec<C::Record>>;

    /// Count all records matching `filter`
    async fn count(&self, filter: &C::Filter) -> Result<u64>;
}
