//! REST endpoint catalogue: method, path, and query for every API operation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api::ApiClient` turns an `Endpoint` into an HTTP request. Keeping the
//! route table here, free of transport code, lets it be unit tested without a
//! browser.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use super::types::AppointmentStatus;

/// HTTP verbs used by the booking API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A resolved API route relative to the configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new() }
    }

    /// Add a query parameter, skipping absent or blank values.
    fn param(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value.map(|v| v.to_string())
            && !value.trim().is_empty()
        {
            self.query.push((key, value));
        }
        self
    }

    /// Join the endpoint path onto `base` without doubling slashes.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

pub mod auth {
    use super::{Endpoint, Method};

    #[must_use]
    pub fn register() -> Endpoint {
        Endpoint::new(Method::Post, "/auth/register")
    }

    #[must_use]
    pub fn login() -> Endpoint {
        Endpoint::new(Method::Post, "/auth/login")
    }

    #[must_use]
    pub fn me() -> Endpoint {
        Endpoint::new(Method::Get, "/auth/me")
    }
}

pub mod services {
    use super::{Endpoint, Method};

    #[must_use]
    pub fn list(category: Option<&str>) -> Endpoint {
        Endpoint::new(Method::Get, "/services").param("category", category)
    }

    #[must_use]
    pub fn get(id: i64) -> Endpoint {
        Endpoint::new(Method::Get, format!("/services/{id}"))
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::new(Method::Post, "/services")
    }

    #[must_use]
    pub fn update(id: i64) -> Endpoint {
        Endpoint::new(Method::Put, format!("/services/{id}"))
    }

    #[must_use]
    pub fn delete(id: i64) -> Endpoint {
        Endpoint::new(Method::Delete, format!("/services/{id}"))
    }
}

pub mod providers {
    use super::{Endpoint, Method};

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::new(Method::Get, "/providers")
    }

    #[must_use]
    pub fn get(id: i64) -> Endpoint {
        Endpoint::new(Method::Get, format!("/providers/{id}"))
    }

    #[must_use]
    pub fn by_service(service_id: i64) -> Endpoint {
        Endpoint::new(Method::Get, format!("/providers/service/{service_id}"))
    }

    #[must_use]
    pub fn update_profile() -> Endpoint {
        Endpoint::new(Method::Put, "/providers/profile")
    }

    #[must_use]
    pub fn set_services() -> Endpoint {
        Endpoint::new(Method::Put, "/providers/services")
    }

    #[must_use]
    pub fn set_availability() -> Endpoint {
        Endpoint::new(Method::Put, "/providers/availability")
    }
}

pub mod appointments {
    use super::{AppointmentStatus, Endpoint, Method};

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::new(Method::Post, "/appointments")
    }

    #[must_use]
    pub fn list_mine(status: Option<AppointmentStatus>) -> Endpoint {
        Endpoint::new(Method::Get, "/appointments/my").param("status", status.map(AppointmentStatus::as_str))
    }

    #[must_use]
    pub fn list_for_provider(status: Option<AppointmentStatus>, date: Option<&str>) -> Endpoint {
        Endpoint::new(Method::Get, "/appointments/provider")
            .param("status", status.map(AppointmentStatus::as_str))
            .param("date", date)
    }

    #[must_use]
    pub fn update_status(id: i64) -> Endpoint {
        Endpoint::new(Method::Put, format!("/appointments/{id}/status"))
    }

    #[must_use]
    pub fn cancel(id: i64) -> Endpoint {
        Endpoint::new(Method::Put, format!("/appointments/{id}/cancel"))
    }

    #[must_use]
    pub fn available_slots(provider_id: i64, date: &str) -> Endpoint {
        Endpoint::new(Method::Get, "/appointments/slots")
            .param("provider_id", Some(provider_id))
            .param("date", Some(date))
    }
}

pub mod reviews {
    use super::{Endpoint, Method};

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::new(Method::Get, "/reviews")
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::new(Method::Post, "/reviews")
    }

    #[must_use]
    pub fn list_for_provider(provider_id: i64, page: u32) -> Endpoint {
        Endpoint::new(Method::Get, format!("/reviews/provider/{provider_id}")).param("page", Some(page.max(1)))
    }

    #[must_use]
    pub fn list_mine() -> Endpoint {
        Endpoint::new(Method::Get, "/reviews/my")
    }

    #[must_use]
    pub fn delete(id: i64) -> Endpoint {
        Endpoint::new(Method::Delete, format!("/reviews/{id}"))
    }
}

pub mod products {
    use super::{Endpoint, Method};

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::new(Method::Get, "/products")
    }

    #[must_use]
    pub fn get(id: i64) -> Endpoint {
        Endpoint::new(Method::Get, format!("/products/{id}"))
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::new(Method::Post, "/products")
    }

    #[must_use]
    pub fn update(id: i64) -> Endpoint {
        Endpoint::new(Method::Put, format!("/products/{id}"))
    }

    #[must_use]
    pub fn delete(id: i64) -> Endpoint {
        Endpoint::new(Method::Delete, format!("/products/{id}"))
    }
}
