//! Networking modules for the booking REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` is the route table, `api` performs the HTTP calls, `session`
//! owns the login lifecycle, and `types` defines the wire schema.

pub mod api;
pub mod endpoints;
pub mod session;
pub mod types;
