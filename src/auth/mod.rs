//! Session handling for the shop admin client.
//!
//! # Overview
//!
//! - [`TokenManager`]: stores the bearer token issued at login
//! - [`Navigator`]: redirect seam used when a session is missing or expires
//! - [`AccessGate`]: per-navigation check of protected pages
//!
//! There is no client-side expiry check. A token is trusted until the backend
//! rejects it with 401, at which point the HTTP client removes it and
//! redirects to the sign-in page.

mod navigation;
mod token;

pub use navigation::{AccessGate, GateDecision, LoggingNavigator, Navigator};
pub use token::TokenManager;
