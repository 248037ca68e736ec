//! Client SDK for the Portfolio backend.
//!
//! Three loosely coupled pieces:
//!
//! - [`auth`]: a two-tier token store (in-memory session tier over the OS
//!   credential store), read synchronously before every request.
//! - [`bridge`]: a typed cross-window protocol letting a parent window
//!   push/pull auth state into an embedded client, attached as an explicit,
//!   disposable subscription.
//! - [`api`]: one-shot request functions for project CRUD, presigned S3
//!   uploads, and the OAuth code exchange.
//!
//! Typical wiring at host startup:
//!
//! ```no_run
//! use std::sync::Arc;
//! use portfolio_client::{ApiClient, AuthBridge, Config, TokenStore};
//!
//! let store = Arc::new(TokenStore::with_keychain());
//! let client = ApiClient::from_config(&Config::load(), store.clone());
//! let bridge = AuthBridge::new(store);
//! // attach the bridge to the embedding surface's envelope channel, then
//! // call portfolio_client::api::projects::get_all_projects(&client) etc.
//! ```

pub mod api;
pub mod auth;
pub mod bridge;
pub mod config;
pub mod error;

pub use api::ApiClient;
pub use auth::TokenStore;
pub use bridge::{AuthBridge, AuthMessage, BridgeHandle, Envelope, WindowContext};
pub use config::Config;
pub use error::ApiError;
