//! Listing service
//!
//! Runs paginated listings for any collection the data source can serve,
//! with page defaults taken from configuration. Pager failures are logged
//! here and reported as `ListingError`.

use std::sync::Arc;

use crate::db::SqlxDataSource;
use crate::pagination::{
    paginate, try_paginate, Collection, DataSource, FilterSpec, PageDefaults, PageEnvelope,
    PageRequest, PaginateError,
};

/// Error types for listing operations
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Fetching or counting records failed
    #[error("Data source error: {0}")]
    DataSource(String),

    /// A record could not be converted for output
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<PaginateError> for ListingError {
    fn from(err: PaginateError) -> Self {
        let message = match &err {
            PaginateError::Fetch { source, .. }
            | PaginateError::Count { source, .. }
            | PaginateError::Convert { source, .. } => format!("{}: {:#}", err.collection(), source),
        };

        if err.is_data_source() {
            tracing::error!("Listing {} failed: {}", err.collection(), message);
            ListingError::DataSource(message)
        } else {
            tracing::error!("Listing {} returned an unconvertible record: {}", err.collection(), message);
            ListingError::Conversion(message)
        }
    }
}

/// Listing service shared by all collection endpoints
pub struct ListingService<S = SqlxDataSource> {
    source: Arc<S>,
    defaults: PageDefaults,
}

impl<S> Clone for ListingService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            defaults: self.defaults,
        }
    }
}

impl<S> ListingService<S> {
    /// Create a new listing service
    ///
    /// # Arguments
    /// * `source` - Data source for every listed collection
    /// * `defaults` - Page and limit used when a request omits them
    pub fn new(source: Arc<S>, defaults: PageDefaults) -> Self {
        Self { source, defaults }
    }

    /// List one page of `C`, converting each record with `convert`
    ///
    /// # Errors
    /// - `DataSource` if the fetch or the count fails
    pub async fn list<C, T, F>(
        &self,
        spec: &FilterSpec<C>,
        request: PageRequest,
        convert: F,
    ) -> Result<PageEnvelope<T>, ListingError>
    where
        C: Collection,
        S: DataSource<C>,
        F: FnMut(C::Record) -> T,
    {
        paginate(self.source.as_ref(), spec, request, self.defaults, convert)
            .await
            .map_err(ListingError::from)
    }

    /// List one page of `C` with a converter that can fail
    ///
    /// # Errors
    /// - `DataSource` if the fetch or the count fails
    /// - `Conversion` if any record fails to convert
    pub async fn try_list<C, T, F>(
        &self,
        spec: &FilterSpec<C>,
        request: PageRequest,
        convert: F,
    ) -> Result<PageEnvelope<T>, ListingError>
    where
        C: Collection,
        S: DataSource<C>,
        F: FnMut(C::Record) -> anyhow::Result<T>,
    {
        try_paginate(self.source.as_ref(), spec, request, self.defaults, convert)
            .await
            .map_err(ListingError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::seeded_pool;
    use crate::models::{Faq, FaqFilter, FaqSort, Review, ReviewFilter};
    use crate::pagination::{FindMany, SortDirection};
    use async_trait::async_trait;

    async fn service(defaults: PageDefaults) -> ListingService {
        let pool = seeded_pool().await.expect("Failed to seed pool");
        ListingService::new(SqlxDataSource::shared(pool), defaults)
    }

    /// A data source whose every call fails
    struct BrokenSource;

    #[async_trait]
    impl DataSource<Faq> for BrokenSource {
        async fn find_many(&self, _query: FindMany<'_, Faq>) -> anyhow::Result<Vec<Faq>> {
            Err(anyhow::anyhow!("connection reset"))
        }

        async fn count(&self, _filter: &FaqFilter) -> anyhow::Result<u64> {
            Ok(5)
        }
    }

    #[tokio::test]
    async fn test_list_uses_configured_default_limit() {
        let service = service(PageDefaults::default().with_limit(2)).await;
        let spec = FilterSpec::<Faq>::default().order_by(FaqSort::CreatedAt, SortDirection::Asc);

        let page = service
            .list(&spec, PageRequest::default(), |faq: Faq| faq.id)
            .await
            .unwrap();

        assert_eq!(page.nodes, vec![1, 2]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[tokio::test]
    async fn test_list_request_overrides_defaults() {
        let service = service(PageDefaults::default()).await;
        let spec = FilterSpec::<Faq>::default();

        let page = service
            .list(&spec, PageRequest::default().with_page(3).with_limit(2), |faq: Faq| faq.id)
            .await
            .unwrap();

        assert_eq!(page.nodes, vec![5]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page);
    }

    #[tokio::test]
    async fn test_list_empty_result() {
        let service = service(PageDefaults::default()).await;
        let spec = FilterSpec::<Review>::new(ReviewFilter {
            course_id: Some(3),
            ..ReviewFilter::default()
        });

        let page = service
            .list(&spec, PageRequest::default(), |review: Review| review.id)
            .await
            .unwrap();

        assert!(page.nodes.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[tokio::test]
    async fn test_try_list_conversion_failure() {
        let service = service(PageDefaults::default()).await;
        let spec = FilterSpec::<Faq>::default();

        let result = service
            .try_list(&spec, PageRequest::default(), |faq: Faq| {
                if faq.category == "account" {
                    anyhow::bail!("account questions are private");
                }
                Ok(faq.question)
            })
            .await;

        match result {
            Err(ListingError::Conversion(message)) => {
                assert!(message.contains("faqs"));
                assert!(message.contains("account questions are private"));
            }
            other => panic!("expected conversion error, got {:?}", other.map(|p| p.nodes)),
        }
    }

    #[tokio::test]
    async fn test_data_source_failure() {
        let service = ListingService::new(Arc::new(BrokenSource), PageDefaults::default());
        let spec = FilterSpec::<Faq>::default();

        let err = service
            .list(&spec, PageRequest::default(), |faq: Faq| faq.id)
            .await
            .unwrap_err();

        assert!(matches!(err, ListingError::DataSource(ref m) if m.contains("connection reset")));
    }

    #[test]
    fn test_listing_error_display() {
        let err = ListingError::DataSource("faqs: timeout".to_string());
        assert_eq!(err.to_string(), "Data source error: faqs: timeout");
    }
}
