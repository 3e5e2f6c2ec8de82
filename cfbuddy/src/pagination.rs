//! Page-by-page aggregation of list endpoints.
//!
//! The driver asks for page 1, 2, 3, ... until a page comes back empty.
//! Any failing page aborts the whole aggregation; items gathered so far are
//! dropped, never returned as if complete.
//!
//! An API that keeps answering full pages would keep the loop going forever.
//! Set [`PageSpec::max_pages`] to bound it.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::{CfError, Result};

/// Default number of items requested per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Page size and optional cap for an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    /// Items per page.
    pub per_page: u32,
    /// Highest page number that may be requested, including the final empty
    /// page. `None` = unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            max_pages: None,
        }
    }
}

impl PageSpec {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page,
            max_pages: None,
        }
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    fn check(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(CfError::invalid_parameter("per_page", "must be at least 1"));
        }
        if self.max_pages == Some(0) {
            return Err(CfError::invalid_parameter("max_pages", "must be at least 1"));
        }
        Ok(())
    }
}

/// Validate a single page request and clamp its size to the endpoint maximum.
pub(crate) fn page_window(page: u32, per_page: u32, max_per_page: u32) -> Result<(u32, u32)> {
    if page == 0 {
        return Err(CfError::invalid_parameter("page", "pages are numbered from 1"));
    }
    if per_page == 0 {
        return Err(CfError::invalid_parameter("per_page", "must be at least 1"));
    }
    Ok((page, per_page.min(max_per_page)))
}

/// Fetch every page and concatenate the results.
///
/// `fetch(page, per_page)` is called with page numbers 1, 2, 3, ... in order.
pub async fn collect_pages<T, F, Fut>(spec: PageSpec, fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    collect_pages_with(spec, fetch, |page| page).await
}

/// Like [`collect_pages`], but runs `project` on each raw page before it is
/// accumulated.
///
/// Termination looks at the raw page: a page whose items are all filtered
/// out by `project` does not end the loop.
pub async fn collect_pages_with<R, T, F, Fut, P>(
    spec: PageSpec,
    mut fetch: F,
    mut project: P,
) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
    P: FnMut(Vec<R>) -> Vec<T>,
{
    spec.check()?;

    let mut items = Vec::new();
    let mut page: u32 = 1;

    loop {
        if let Some(max_pages) = spec.max_pages
            && page > max_pages
        {
            log::warn!("Pagination stopped: page cap {max_pages} reached with pages still non-empty");
            return Err(CfError::PageLimitExceeded { max_pages });
        }

        let raw = fetch(page, spec.per_page).await.inspect_err(|e| {
            log::warn!("Pagination aborted at page {page}: {e}");
        })?;

        if raw.is_empty() {
            log::debug!("Pagination finished after {} pages, {} items", page - 1, items.len());
            return Ok(items);
        }

        log::debug!("Fetched page {page}: {} items", raw.len());
        items.extend(project(raw));
        page = page.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Page source returning `sizes[n-1]` items for page `n` and recording calls.
    struct FakePages {
        sizes: Vec<usize>,
        fail_on: Option<u32>,
        calls: Mutex<Vec<(u32, u32)>>,
    }

    impl FakePages {
        fn new(sizes: &[usize]) -> Self {
            Self {
                sizes: sizes.to_vec(),
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        async fn fetch(&self, page: u32, per_page: u32) -> Result<Vec<u32>> {
            self.calls.lock().unwrap().push((page, per_page));
            if self.fail_on == Some(page) {
                return Err(CfError::NetworkError {
                    detail: "connection reset".into(),
                });
            }
            let size = self.sizes.get(page as usize - 1).copied().unwrap_or(0);
            Ok((0..size as u32).map(|i| page * 1000 + i).collect())
        }

        fn pages_called(&self) -> Vec<u32> {
            self.calls.lock().unwrap().iter().map(|(p, _)| *p).collect()
        }
    }

    #[tokio::test]
    async fn aggregates_until_empty_page() {
        let src = FakePages::new(&[100, 100, 37, 0]);
        let items = collect_pages(PageSpec::new(100), |p, pp| src.fetch(p, pp))
            .await
            .unwrap();
        assert_eq!(items.len(), 237);
        assert_eq!(src.pages_called(), vec![1, 2, 3, 4]);
        assert!(src.calls.lock().unwrap().iter().all(|(_, pp)| *pp == 100));
        // page order preserved
        assert_eq!(items[0], 1000);
        assert_eq!(items[236], 3036);
    }

    #[tokio::test]
    async fn failure_discards_partial_results() {
        let mut src = FakePages::new(&[100, 100, 100, 0]);
        src.fail_on = Some(3);
        let res = collect_pages(PageSpec::new(100), |p, pp| src.fetch(p, pp)).await;
        assert!(matches!(res, Err(CfError::NetworkError { .. })));
        assert_eq!(src.pages_called(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_first_page() {
        let src = FakePages::new(&[]);
        let items = collect_pages(PageSpec::default(), |p, pp| src.fetch(p, pp))
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(src.pages_called(), vec![1]);
    }

    #[tokio::test]
    async fn cap_stops_endless_source() {
        let src = FakePages::new(&[10; 50]);
        let res = collect_pages(PageSpec::new(10).with_max_pages(5), |p, pp| src.fetch(p, pp)).await;
        assert!(matches!(res, Err(CfError::PageLimitExceeded { max_pages: 5 })));
        assert_eq!(src.pages_called(), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn cap_large_enough_succeeds() {
        let src = FakePages::new(&[10, 10, 3]);
        let items = collect_pages(PageSpec::new(10).with_max_pages(4), |p, pp| src.fetch(p, pp))
            .await
            .unwrap();
        assert_eq!(items.len(), 23);
    }

    #[tokio::test]
    async fn zero_page_size_rejected_before_fetching() {
        let src = FakePages::new(&[1]);
        let res = collect_pages(PageSpec::new(0), |p, pp| src.fetch(p, pp)).await;
        assert!(matches!(res, Err(CfError::InvalidParameter { .. })));
        assert!(src.pages_called().is_empty());
    }

    #[tokio::test]
    async fn filtered_out_page_does_not_stop_loop() {
        let src = FakePages::new(&[5, 5, 0]);
        // keep only items from page 2
        let items = collect_pages_with(
            PageSpec::new(5),
            |p, pp| src.fetch(p, pp),
            |page| page.into_iter().filter(|i| *i >= 2000).collect(),
        )
        .await
        .unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(src.pages_called(), vec![1, 2, 3]);
    }

    #[test]
    fn page_window_clamps() {
        assert!(matches!(page_window(1, 500, 50), Ok((1, 50))));
        assert!(matches!(page_window(3, 20, 50), Ok((3, 20))));
        assert!(page_window(0, 20, 50).is_err());
        assert!(page_window(1, 0, 50).is_err());
    }
}
