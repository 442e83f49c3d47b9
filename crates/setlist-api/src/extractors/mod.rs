//! Axum extractors for request handling
//!
//! Wrappers around the stock extractors that reject with [`ApiError`]
//! so malformed input gets the same JSON envelope as every other error.
//!
//! [`ApiError`]: crate::response::ApiError

mod pagination;
mod path;
mod query;
mod validated;

pub use pagination::{Pagination, PaginationParams};
pub use path::ApiPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
