//! Two-tier token store.
//!
//! Tier A (session) always wins on read and is the only tier `set` touches.
//! Tier B is a pluggable persistent backend, `KeychainTier` in production.
//! All operations are synchronous so API calls capture the token value at
//! call time, independent of later bridge writes.

use std::sync::RwLock;

/// One storage tier holding at most one token.
///
/// Implementations must not fail: a tier that cannot read reports absence,
/// a tier that cannot write or clear degrades to a no-op.
pub trait TokenTier: Send + Sync {
    /// Current token in this tier, if any.
    fn load(&self) -> Option<String>;

    /// Overwrite this tier's token.
    fn store(&self, token: &str);

    /// Remove this tier's token. Idempotent.
    fn clear(&self);
}

/// In-memory session tier. Cleared when the process exits.
#[derive(Default)]
pub struct SessionTier {
    value: RwLock<Option<String>>,
}

impl SessionTier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenTier for SessionTier {
    fn load(&self) -> Option<String> {
        self.value.read().unwrap().clone()
    }

    fn store(&self, token: &str) {
        *self.value.write().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.value.write().unwrap() = None;
    }
}

/// Process-wide authentication token store.
pub struct TokenStore {
    session: SessionTier,
    persistent: Box<dyn TokenTier>,
}

impl TokenStore {
    /// Build a store with the given persistent tier.
    pub fn new(persistent: Box<dyn TokenTier>) -> Self {
        Self {
            session: SessionTier::new(),
            persistent,
        }
    }

    /// Production wiring: session tier plus the OS credential store.
    pub fn with_keychain() -> Self {
        Self::new(Box::new(super::KeychainTier::new()))
    }

    /// Current token: session tier if present, else the persistent tier.
    pub fn get(&self) -> Option<String> {
        self.session.load().or_else(|| self.persistent.load())
    }

    /// Store a token in the session tier. No shape validation is performed.
    ///
    /// The persistent tier is deliberately untouched -- it is written by the
    /// embedding host, not by this store.
    pub fn set(&self, token: &str) {
        self.session.store(token);
    }

    /// Remove the token from both tiers. Idempotent.
    pub fn clear(&self) {
        self.session.clear();
        self.persistent.clear();
    }

    /// Whether a token is currently held in either tier.
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> TokenStore {
        TokenStore::new(Box::new(SessionTier::new()))
    }

    #[test]
    fn test_set_then_get_returns_token() {
        let store = memory_store();
        store.set("tok-1");
        assert_eq!(store.get().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_set_overwrites_prior_value() {
        let store = memory_store();
        store.set("old");
        store.set("new");
        assert_eq!(store.get().as_deref(), Some("new"));
    }

    #[test]
    fn test_get_falls_back_to_persistent_tier() {
        let persistent = SessionTier::new();
        persistent.store("persisted");
        let store = TokenStore::new(Box::new(persistent));
        assert_eq!(store.get().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_session_tier_wins_over_persistent() {
        let persistent = SessionTier::new();
        persistent.store("persisted");
        let store = TokenStore::new(Box::new(persistent));
        store.set("fresh");
        assert_eq!(store.get().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_clear_empties_both_tiers() {
        let persistent = SessionTier::new();
        persistent.store("persisted");
        let store = TokenStore::new(Box::new(persistent));
        store.set("fresh");

        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = memory_store();
        store.set("tok");
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_is_authenticated_tracks_presence() {
        let store = memory_store();
        assert!(!store.is_authenticated());
        store.set("tok");
        assert!(store.is_authenticated());
        store.clear();
        assert!(!store.is_authenticated());
    }
}
