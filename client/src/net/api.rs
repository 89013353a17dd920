//! REST API client for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since the
//! API is only reachable from the browser with the user's bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. A 401 on any
//! authenticated route tears the session down and sends the browser to
//! `/login`; list pages log other failures and render their empty state,
//! while forms surface `ApiError::user_message` inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoints::{self, Endpoint};
use super::types::{
    Appointment, AppointmentStatus, AuthSession, AvailabilitySlot, LoginRequest, NewAppointment, NewReview, Product,
    ProductPayload, Provider, ProviderProfile, RegisterRequest, Review, ReviewPage, Service, ServicePayload,
    SlotsResponse, User,
};
use crate::state::auth::AuthState;

/// Failures surfaced by API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The session token was rejected; the session has been cleared.
    #[error("your session has expired, please log in again")]
    Unauthorized,

    /// The server answered with a non-success status.
    #[error("{}", server_error_display(*status, message.as_deref()))]
    Server { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message for inline form errors: the server's own wording when it sent
    /// one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Unauthorized => self.to_string(),
            _ => fallback.to_owned(),
        }
    }
}

fn server_error_display(status: u16, message: Option<&str>) -> String {
    message.map_or_else(|| format!("request failed: {status}"), str::to_owned)
}

/// Pull a human-readable message out of an error response body.
///
/// Accepts `{"message": ..}`, `{"error": ..}` and validator-style
/// `{"errors": [{"msg": ..}]}` shapes.
#[must_use]
pub(crate) fn server_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let direct = ["message", "error"]
        .into_iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str));
    let first_validation = || {
        value
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(|first| first.get("msg").or_else(|| first.get("message")))
            .and_then(serde_json::Value::as_str)
    };
    direct
        .or_else(first_validation)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

/// Credential routes answer 401 for a wrong password; that is a form error,
/// not an expired session.
#[must_use]
pub(crate) fn tears_down_session(endpoint: &Endpoint) -> bool {
    !matches!(endpoint.path.as_str(), "/auth/login" | "/auth/register")
}

#[must_use]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Image file attached to a product create/update.
pub struct ImageUpload {
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl ImageUpload {
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }
}

enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart { fields: Vec<(&'static str, String)>, image: Option<ImageUpload> },
}

impl Body {
    fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Handle to the REST API, provided as context at the app root.
///
/// Reads the bearer token from the shared `AuthState` on every request so a
/// login or logout takes effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    auth: RwSignal<AuthState>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str, auth: RwSignal<AuthState>) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), auth }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the account is rejected.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        self.fetch(endpoints::auth::register(), Body::json(request)?).await
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        self.fetch(endpoints::auth::login(), Body::json(request)?).await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the token is invalid.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.fetch(endpoints::auth::me(), Body::Empty).await
    }

    // =========================================================================
    // SERVICES
    // =========================================================================

    /// `GET /services`, optionally filtered server-side by category.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn list_services(&self, category: Option<&str>) -> Result<Vec<Service>, ApiError> {
        self.fetch(endpoints::services::list(category), Body::Empty).await
    }

    /// `GET /services/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn get_service(&self, id: i64) -> Result<Service, ApiError> {
        self.fetch(endpoints::services::get(id), Body::Empty).await
    }

    /// `POST /services`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or validation is rejected.
    pub async fn create_service(&self, payload: &ServicePayload) -> Result<(), ApiError> {
        self.execute(endpoints::services::create(), Body::json(payload)?).await
    }

    /// `PUT /services/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or validation is rejected.
    pub async fn update_service(&self, id: i64, payload: &ServicePayload) -> Result<(), ApiError> {
        self.execute(endpoints::services::update(id), Body::json(payload)?).await
    }

    /// `DELETE /services/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn delete_service(&self, id: i64) -> Result<(), ApiError> {
        self.execute(endpoints::services::delete(id), Body::Empty).await
    }

    // =========================================================================
    // PROVIDERS
    // =========================================================================

    /// `GET /providers`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn list_providers(&self) -> Result<Vec<Provider>, ApiError> {
        self.fetch(endpoints::providers::list(), Body::Empty).await
    }

    /// `GET /providers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the provider is unknown.
    pub async fn get_provider(&self, id: i64) -> Result<Provider, ApiError> {
        self.fetch(endpoints::providers::get(id), Body::Empty).await
    }

    /// `GET /providers/service/{service_id}`: providers offering a service.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn providers_for_service(&self, service_id: i64) -> Result<Vec<Provider>, ApiError> {
        self.fetch(endpoints::providers::by_service(service_id), Body::Empty).await
    }

    /// `PUT /providers/profile`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn update_provider_profile(&self, profile: &ProviderProfile) -> Result<(), ApiError> {
        self.execute(endpoints::providers::update_profile(), Body::json(profile)?).await
    }

    /// `PUT /providers/services` with `{ "serviceIds": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn set_provider_services(&self, service_ids: &[i64]) -> Result<(), ApiError> {
        let body = Body::Json(serde_json::json!({ "serviceIds": service_ids }));
        self.execute(endpoints::providers::set_services(), body).await
    }

    /// `PUT /providers/availability` with `{ "availability": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn set_provider_availability(&self, availability: &[AvailabilitySlot]) -> Result<(), ApiError> {
        let body = Body::json(&serde_json::json!({ "availability": availability }))?;
        self.execute(endpoints::providers::set_availability(), body).await
    }

    // =========================================================================
    // APPOINTMENTS
    // =========================================================================

    /// `POST /appointments`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the slot is taken.
    pub async fn create_appointment(&self, booking: &NewAppointment) -> Result<(), ApiError> {
        self.execute(endpoints::appointments::create(), Body::json(booking)?).await
    }

    /// `GET /appointments/my`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn my_appointments(&self, status: Option<AppointmentStatus>) -> Result<Vec<Appointment>, ApiError> {
        self.fetch(endpoints::appointments::list_mine(status), Body::Empty).await
    }

    /// `GET /appointments/provider`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn provider_appointments(
        &self,
        status: Option<AppointmentStatus>,
        date: Option<&str>,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.fetch(endpoints::appointments::list_for_provider(status, date), Body::Empty).await
    }

    /// `PUT /appointments/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn update_appointment_status(&self, id: i64, status: AppointmentStatus) -> Result<(), ApiError> {
        let body = Body::Json(serde_json::json!({ "status": status.as_str() }));
        self.execute(endpoints::appointments::update_status(id), body).await
    }

    /// `PUT /appointments/{id}/cancel`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn cancel_appointment(&self, id: i64) -> Result<(), ApiError> {
        self.execute(endpoints::appointments::cancel(id), Body::Empty).await
    }

    /// `GET /appointments/slots` for one provider and ISO date.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn available_slots(&self, provider_id: i64, date: &str) -> Result<Vec<String>, ApiError> {
        let response: SlotsResponse =
            self.fetch(endpoints::appointments::available_slots(provider_id, date), Body::Empty).await?;
        Ok(response.slots)
    }

    // =========================================================================
    // REVIEWS
    // =========================================================================

    /// `GET /reviews`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.fetch(endpoints::reviews::list(), Body::Empty).await
    }

    /// `POST /reviews`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the review is rejected.
    pub async fn create_review(&self, review: &NewReview) -> Result<(), ApiError> {
        self.execute(endpoints::reviews::create(), Body::json(review)?).await
    }

    /// `GET /reviews/provider/{id}?page=`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn provider_reviews(&self, provider_id: i64, page: u32) -> Result<ReviewPage, ApiError> {
        self.fetch(endpoints::reviews::list_for_provider(provider_id, page), Body::Empty).await
    }

    /// `GET /reviews/my`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn my_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.fetch(endpoints::reviews::list_mine(), Body::Empty).await
    }

    /// `DELETE /reviews/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn delete_review(&self, id: i64) -> Result<(), ApiError> {
        self.execute(endpoints::reviews::delete(id), Body::Empty).await
    }

    // =========================================================================
    // PRODUCTS
    // =========================================================================

    /// `GET /products`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch(endpoints::products::list(), Body::Empty).await
    }

    /// `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.fetch(endpoints::products::get(id), Body::Empty).await
    }

    /// `POST /products` as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or validation is rejected.
    pub async fn create_product(&self, payload: &ProductPayload, image: Option<ImageUpload>) -> Result<(), ApiError> {
        let body = Body::Multipart { fields: payload.form_fields(), image };
        self.execute(endpoints::products::create(), body).await
    }

    /// `PUT /products/{id}` as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or validation is rejected.
    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
        image: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        let body = Body::Multipart { fields: payload.form_fields(), image };
        self.execute(endpoints::products::update(id), body).await
    }

    /// `DELETE /products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.execute(endpoints::products::delete(id), Body::Empty).await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Body) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.dispatch(&endpoint, body).await?;
            response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn execute(&self, endpoint: Endpoint, body: Body) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(&endpoint, body).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch(&self, endpoint: &Endpoint, body: Body) -> Result<gloo_net::http::Response, ApiError> {
        use super::endpoints::Method;
        use gloo_net::http::Request;

        let url = endpoint.url(&self.base_url);
        let mut builder = match endpoint.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if !endpoint.query.is_empty() {
            builder = builder.query(endpoint.query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        if let Some(token) = self.auth.get_untracked().token {
            builder = builder.header("Authorization", &bearer_header(&token));
        }

        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Multipart { fields, image } => builder.body(multipart_form(&fields, image.as_ref())?),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status == 401 && tears_down_session(endpoint) {
            leptos::logging::warn!("401 from {}; clearing session", endpoint.path);
            crate::net::session::teardown(self.auth);
            crate::util::auth::hard_redirect("/login");
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, message: server_error_message(&text) });
        }
        Ok(response)
    }
}

#[cfg(feature = "hydrate")]
fn multipart_form(fields: &[(&'static str, String)], image: Option<&ImageUpload>) -> Result<web_sys::FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    if let Some(image) = image {
        form.append_with_blob_and_filename("image", &image.file, &image.file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}
