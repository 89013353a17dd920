//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `booking`, `editor`, etc.) so pages can
//! depend on small focused models. Everything here is plain data with
//! methods; pages wrap it in `RwSignal`s.

pub mod appointments;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod editor;
pub mod fetch;
pub mod forms;
pub mod notice;
pub mod provider_settings;
