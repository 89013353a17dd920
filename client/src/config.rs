//! Runtime configuration handed from the host to the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds a `ClientConfig` from its environment, provides it as
//! context during SSR, and renders it as JSON into
//! `<meta name="beautybook-config">`. After hydration the app reads the same
//! tag back, so both passes see identical settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::booking::BookingOptions;

/// Name attribute of the meta tag carrying the serialized config.
pub const META_NAME: &str = "beautybook-config";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Placeholder portrait for providers without an uploaded image.
pub const DEFAULT_PROVIDER_IMAGE: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// REST API root, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    /// Origin that serves uploaded images (provider portraits, product photos).
    pub asset_base_url: String,
    /// Whether the booking flow asks the client to pick a provider.
    pub provider_step: bool,
    /// Provider used for bookings and reviews when there is no provider step.
    pub default_provider_id: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            asset_base_url: asset_base_from_api(DEFAULT_API_BASE_URL),
            provider_step: false,
            default_provider_id: 1,
        }
    }
}

/// Derive the asset origin from an API root by dropping a trailing `/api`.
#[must_use]
pub fn asset_base_from_api(api_base_url: &str) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed).to_owned()
}

impl ClientConfig {
    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    #[must_use]
    pub fn from_meta_content(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }

    /// Read the config rendered by the host, falling back to defaults.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content.as_deref().map(Self::from_meta_content) {
                Some(Some(config)) => config,
                Some(None) => {
                    leptos::logging::warn!("unreadable {META_NAME} meta tag; using defaults");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Resolve an image path returned by the API against the asset origin.
    /// Absolute URLs pass through; a missing image uses the placeholder.
    #[must_use]
    pub fn asset_url(&self, path: Option<&str>) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PROVIDER_IMAGE.to_owned(),
            Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_owned(),
            Some(p) => {
                let base = self.asset_base_url.trim_end_matches('/');
                if p.starts_with('/') { format!("{base}{p}") } else { format!("{base}/{p}") }
            }
        }
    }

    #[must_use]
    pub fn booking_options(&self) -> BookingOptions {
        BookingOptions { provider_step: self.provider_step, default_provider_id: self.default_provider_id }
    }
}
