//! # Shop Admin Client
//!
//! A Rust client for the REST API of a small e-commerce admin backend
//! (customers, items, orders, shipping, payments, reviews, rewards, and the
//! dashboard), with the session and cart state an admin front end keeps.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - Pluggable key-value persistence via [`storage::KeyValueStore`]
//! - Bearer token lifecycle via [`TokenManager`]
//! - A persisted client-side cart via [`CartManager`]
//! - An async HTTP client that injects the token, tears the session down on
//!   401, and normalizes error bodies into one message
//! - One typed method per backend action on [`AdminApi`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shop_admin::{AdminConfig, ApiBaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://127.0.0.1:8002").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.is_public_page("Sign-In.html"));
//! assert!(!config.is_public_page("customers.html"));
//! ```
//!
//! ## Sessions and the Page Gate
//!
//! ```rust
//! use std::sync::Arc;
//! use shop_admin::{AccessGate, AdminConfig, GateDecision, LoggingNavigator, TokenManager};
//! use shop_admin::storage::MemoryStore;
//!
//! let tokens = TokenManager::new(Arc::new(MemoryStore::new()));
//! let gate = AccessGate::new(&AdminConfig::default(), tokens, Arc::new(LoggingNavigator));
//!
//! assert_eq!(gate.check("/admin/index.html").unwrap(), GateDecision::Allow);
//! assert_eq!(
//!     gate.check("/admin/orders.html").unwrap(),
//!     GateDecision::RedirectToSignIn
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_admin::{AdminApi, AdminConfig, LoggingNavigator, TokenManager};
//! use shop_admin::api::PaymentStatus;
//! use shop_admin::storage::FileStore;
//!
//! let tokens = TokenManager::new(Arc::new(FileStore::new("admin-state.json")));
//! let api = AdminApi::new(&AdminConfig::default(), tokens, Arc::new(LoggingNavigator))?;
//!
//! api.login("admin", "secret").await?;
//! let stats = api.get_dashboard_stats().await?;
//! println!("{} orders, {} to ship", stats.total_orders, stats.to_ship);
//!
//! api.update_payment_status(17, PaymentStatus::Paid).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: token and cart services take an injected store
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Fire-once calls**: no retries, deduplication, or client-side timeouts
//!   beyond the configured transport timeout

pub mod api;
pub mod auth;
pub mod cart;
pub mod clients;
pub mod config;
pub mod error;
pub mod storage;

mod decimal;
mod timestamp;

// Re-export public types at crate root for convenience
pub use api::{AdminApi, OrderRef};
pub use auth::{AccessGate, GateDecision, LoggingNavigator, Navigator, TokenManager};
pub use cart::{CartEntry, CartItem, CartManager};
pub use config::{AdminConfig, AdminConfigBuilder, ApiBaseUrl, BearerToken};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiResponse, ErrorEnvelope, ErrorKind, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, InvalidHttpRequestError, MultipartFile, RequestFailedError,
};
