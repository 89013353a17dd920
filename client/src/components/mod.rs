//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbar, footer, dialogs) and catalog
//! cards while reading shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod footer;
pub mod list_status;
pub mod navbar;
pub mod notice_banner;
pub mod provider_card;
pub mod review_card;
pub mod service_card;
pub mod stars;
pub mod status_badge;
