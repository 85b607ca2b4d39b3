//! REST transport layer: HTTP client, pagination metadata, error taxonomy.

mod client;
mod error;
mod page;

pub use client::RestClient;
pub use error::{ErrorDetail, ErrorKind, FieldError, RestError};
pub use page::{Page, PageLinks, PageQuery, SortDirection, SortSpec};
