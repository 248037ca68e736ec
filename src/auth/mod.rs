//! Authentication token storage for the Portfolio client.
//!
//! A single opaque token is held across two tiers: an in-memory session tier
//! that lives as long as the process, and the OS credential store which
//! survives restarts. Reads prefer the session tier; writes target it
//! exclusively (the credential store is populated by the embedding host).

pub mod keychain;
pub mod store;

pub use keychain::KeychainTier;
pub use store::{SessionTier, TokenStore, TokenTier};
