//! Pagination extractor
//!
//! Reads 1-based `page` / `pageSize` query parameters into a
//! [`PageRequest`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use setlist_core::traits::PageRequest;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

/// Validated pagination; the page size is clamped to `1..=100`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination(pub PageRequest);

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self(PageRequest::from_page(
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(PageRequest::DEFAULT_LIMIT),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let Pagination(page) = Pagination::from(PaginationParams::default());
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn test_page_size_clamping() {
        let Pagination(page) = Pagination::from(PaginationParams {
            page: Some(2),
            page_size: Some(500),
        });
        assert_eq!(page.limit, PageRequest::MAX_LIMIT);
        assert_eq!(page.offset, PageRequest::MAX_LIMIT);

        let Pagination(page) = Pagination::from(PaginationParams {
            page: None,
            page_size: Some(0),
        });
        assert_eq!(page.limit, 1);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_page_only_uses_default_size() {
        let Pagination(page) = Pagination::from(PaginationParams {
            page: Some(3),
            page_size: None,
        });
        assert_eq!(page.limit, PageRequest::DEFAULT_LIMIT);
        assert_eq!(page.offset, 2 * PageRequest::DEFAULT_LIMIT);
    }

    #[test]
    fn test_enormous_page_does_not_overflow() {
        let Pagination(page) = Pagination::from(PaginationParams {
            page: Some(i64::MAX),
            page_size: Some(100),
        });
        assert_eq!(page.offset, i64::MAX);
    }
}
