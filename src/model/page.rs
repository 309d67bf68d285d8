use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 20;

/// Query string accepted by every paginated endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<usize>,
    /// Page size, defaults to the endpoint's own limit
    pub limit: Option<usize>,
    /// Set to `false` to bypass the response cache
    pub use_cache: Option<bool>,
}

impl PageQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            use_cache: None,
        }
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).max(1)
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache.unwrap_or(true)
    }
}

/// One page of a larger collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<T: Clone> Page<T> {
    /// Cut page `page` (1-based) of size `limit` out of `items`.
    ///
    /// Pages past the end are empty rather than an error.
    pub fn slice(items: &[T], page: usize, limit: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let start = (page - 1).saturating_mul(limit).min(items.len());
        let end = start.saturating_add(limit).min(items.len());

        Self {
            items: items[start..end].to_vec(),
            has_more: end < items.len(),
            total: items.len(),
            page,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_requested_page() {
        let items: Vec<i32> = (1..=45).collect();

        let first = Page::slice(&items, 1, 20);
        assert_eq!(first.items, (1..=20).collect::<Vec<_>>());
        assert!(first.has_more);
        assert_eq!(first.total, 45);

        let last = Page::slice(&items, 3, 20);
        assert_eq!(last.items, (41..=45).collect::<Vec<_>>());
        assert!(!last.has_more);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = vec![1, 2, 3];
        let page = Page::slice(&items, 4, 20);

        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn query_defaults() {
        let query = PageQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit_or(50), 50);
        assert!(query.use_cache());
    }
}
