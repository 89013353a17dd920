//! Helpers shared by pages: date math, display formatting, route params,
//! role guards, list loading, and `localStorage` access.
//!
//! Browser calls stay behind `hydrate` gates here so the rest of the crate
//! renders and tests on the server.

pub mod auth;
pub mod dates;
pub mod format;
pub mod load;
pub mod route;
pub mod storage;
