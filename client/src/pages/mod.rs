//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, mutations)
//! and delegates rendering details to `components` and pure logic to `state`.

pub mod admin;
pub mod appointments;
pub mod book;
pub mod contact;
pub mod home;
pub mod login;
pub mod provider_dashboard;
pub mod provider_detail;
pub mod providers;
pub mod register;
pub mod reviews;
pub mod services;
