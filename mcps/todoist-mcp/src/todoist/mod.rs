//! Todoist API access
//!
//! Remote interface, REST implementation, wire types and cursor pagination.

pub mod api;
pub mod error;
pub mod pagination;
pub mod types;

pub use api::{RestApi, TodoistApi, DEFAULT_BASE_URL, MAX_PAGE_SIZE};
pub use error::{TodoistError, TodoistResult};
pub use pagination::{fetch_all, Page};
