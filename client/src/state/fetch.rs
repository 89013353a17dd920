//! Generation-guarded state for fetched lists.
//!
//! DESIGN
//! ======
//! Every load hands out a ticket. Only the response carrying the latest
//! ticket is applied, so a slow response to an old filter can never
//! overwrite the result of a newer one. Errors are logged and degrade to an
//! empty list rather than blocking the page.
//!
//! A fresh list counts as pending: pages start their first load from a
//! client-side effect, so the server render shows the spinner, never the
//! empty-state text.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::api::ApiError;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, generation: 0 }
    }
}

impl<T> ListState<T> {
    /// Mark a new load in flight and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a response. Returns `false` (and changes nothing) when `ticket`
    /// belongs to a superseded load.
    pub fn finish(&mut self, ticket: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("list fetch failed: {e}");
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Drop the current items and orphan any load in flight.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.items.clear();
        self.error = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

/// Which of the three list renderings applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items,
}

impl<T> ListState<T> {
    #[must_use]
    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items
        }
    }
}

/// A single fetched record: loading, present, or absent.
#[derive(Clone, Debug)]
pub enum ItemState<T> {
    Loading,
    Found(T),
    Missing,
}

impl<T> Default for ItemState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ItemState<T> {
    /// Any failure, including a 404, renders as missing.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(item) => Self::Found(item),
            Err(e) => {
                leptos::logging::warn!("fetch failed: {e}");
                Self::Missing
            }
        }
    }
}
