//! Cursor pagination
//!
//! Todoist list endpoints return one page of `results` plus a `next_cursor`
//! that is `null` once the collection is exhausted. [`fetch_all`] drives that
//! loop so callers get the whole collection in one call.

use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use super::error::TodoistResult;

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// The final page of a listing
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
        }
    }

    /// A page followed by more results behind `cursor`
    pub fn more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(cursor.into()),
        }
    }
}

/// Fetch every page of a listing and concatenate the results in order
///
/// `fetch_page` receives `None` for the first page, then whatever cursor the
/// previous page returned. The first request is always made, even if the
/// collection turns out to be empty. Any page error aborts the whole fetch
/// and the items gathered so far are dropped.
///
/// There is no page limit: a remote that never returns a `null` cursor keeps
/// this looping.
pub async fn fetch_all<T, F, Fut>(resource: &str, mut fetch_page: F) -> TodoistResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = TodoistResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        debug!(resource, page = pages, has_cursor = cursor.is_some(), "fetching page");
        let page = fetch_page(cursor.take()).await?;
        pages += 1;
        items.extend(page.results);

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(resource, pages, items = items.len(), "fetched all pages");
    Ok(items)
}
