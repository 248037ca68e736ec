//! API client module for the Portfolio backend.
//!
//! Provides the HTTP client with auth header injection, project CRUD,
//! presigned S3 uploads, OAuth code exchange, and the request/response types
//! matching the backend's JSON format.

pub mod client;
pub mod oauth;
pub mod projects;
pub mod types;
pub mod upload;

pub use client::ApiClient;
