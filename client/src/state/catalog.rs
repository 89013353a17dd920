//! Services catalog selection: category chips and the selected service.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Service;
use crate::util::format::money;

/// Categories shown before any service carries one.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Brows", "Waxing", "Aesthetics", "Anti-Wrinkle", "Facials"];

/// Distinct categories in first-seen order, from an unfiltered fetch.
#[must_use]
pub fn categories(services: &[Service]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in services.iter().filter_map(|s| s.category.as_deref()).map(str::trim) {
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_owned());
        }
    }
    if seen.is_empty() {
        return DEFAULT_CATEGORIES.iter().map(|c| (*c).to_owned()).collect();
    }
    seen
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogSelection {
    /// Active chip; `None` shows every service.
    pub category: Option<String>,
    pub service_id: Option<i64>,
}

impl CatalogSelection {
    /// Switch category. Returns `true` when a re-fetch is needed.
    pub fn select_category(&mut self, category: Option<String>) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.service_id = None;
        true
    }

    /// Select a service, or deselect it when it is already selected.
    pub fn toggle_service(&mut self, service_id: i64) {
        self.service_id = if self.service_id == Some(service_id) { None } else { Some(service_id) };
    }

    #[must_use]
    pub fn selected<'a>(&self, services: &'a [Service]) -> Option<&'a Service> {
        let id = self.service_id?;
        services.iter().find(|s| s.id == id)
    }
}

/// Call-to-action text for the selected service.
#[must_use]
pub fn book_label(service: &Service) -> String {
    format!("Book {} - {}", service.name, money(service.price))
}
