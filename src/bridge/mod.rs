//! Cross-window authentication bridge.
//!
//! Lets a parent window push/pull auth state into/from an embedded client.
//! The bridge only applies in an embedded context (the client's window is not
//! the top-level window); attaching elsewhere is a diagnostic no-op.
//!
//! Unlike a page-lifetime global listener, the bridge is an explicit
//! subscription: `attach` consumes a channel of incoming envelopes on a
//! spawned task and returns a [`BridgeHandle`] that tears the subscription
//! down when dropped, so hosts and tests control its lifetime per case.

pub mod message;

pub use message::AuthMessage;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::auth::TokenStore;

/// An incoming message as delivered by the windowing boundary: the sender's
/// origin, the raw (untrusted) payload, and a way to post a reply back to the
/// sender's window.
pub struct Envelope {
    pub origin: String,
    pub payload: serde_json::Value,
    pub reply: mpsc::UnboundedSender<AuthMessage>,
}

/// The client's position in the window hierarchy.
///
/// Embedded means a parent endpoint exists to post messages to; top-level
/// means there is no parent and parent-directed operations are no-ops.
pub struct WindowContext {
    parent: Option<mpsc::UnboundedSender<AuthMessage>>,
}

impl WindowContext {
    /// Context for a client running as the top-level window.
    pub fn top_level() -> Self {
        Self { parent: None }
    }

    /// Context for a client embedded under a parent window.
    pub fn embedded(parent: mpsc::UnboundedSender<AuthMessage>) -> Self {
        Self { parent: Some(parent) }
    }

    pub fn is_embedded(&self) -> bool {
        self.parent.is_some()
    }

    /// Ask the parent window to push auth state down.
    ///
    /// Posts `REQUEST_AUTH` to the parent when embedded. When not embedded
    /// this is a no-op that reports a diagnostic rather than failing.
    /// Returns whether the request was posted.
    pub fn request_auth_from_parent(&self) -> bool {
        match &self.parent {
            Some(parent) => {
                if parent.send(AuthMessage::RequestAuth).is_err() {
                    log::warn!("Parent window endpoint closed, auth request dropped");
                    return false;
                }
                log::debug!("Requested auth from parent window");
                true
            }
            None => {
                log::debug!("Not embedded: no parent window to request auth from");
                false
            }
        }
    }
}

/// Message handler bridging the parent window to the token store.
pub struct AuthBridge {
    store: Arc<TokenStore>,
    allowed_origins: Option<Vec<String>>,
}

impl AuthBridge {
    /// Bridge accepting messages from any origin.
    ///
    /// This matches the embedding contract most hosts rely on; use
    /// [`AuthBridge::with_allowed_origins`] when the set of trusted parents
    /// is known.
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self {
            store,
            allowed_origins: None,
        }
    }

    /// Bridge that only acts on messages from the listed origins.
    pub fn with_allowed_origins(store: Arc<TokenStore>, origins: Vec<String>) -> Self {
        Self {
            store,
            allowed_origins: Some(origins),
        }
    }

    /// Dispatch one incoming payload, returning the reply to post to the
    /// sender (if any).
    ///
    /// Messages outside the closed protocol set, malformed payloads, empty
    /// tokens, and rejected origins are all dropped without a reply -- the
    /// bridge never raises.
    pub fn handle(&self, origin: &str, payload: &serde_json::Value) -> Option<AuthMessage> {
        if let Some(allowed) = &self.allowed_origins {
            if !allowed.iter().any(|o| o == origin) {
                log::warn!("Dropping auth message from untrusted origin {}", origin);
                return None;
            }
        }

        let Some(message) = AuthMessage::parse(payload) else {
            log::debug!("Ignoring unrecognized message from {}", origin);
            return None;
        };

        match message {
            AuthMessage::SetAuthToken { token } => {
                if token.is_empty() {
                    log::debug!("Ignoring SET_AUTH_TOKEN without a token");
                    return None;
                }
                self.store.set(&token);
                Some(AuthMessage::AuthStatus { authenticated: true })
            }
            AuthMessage::ClearAuthToken => {
                self.store.clear();
                Some(AuthMessage::AuthStatus {
                    authenticated: false,
                })
            }
            AuthMessage::CheckAuthStatus => Some(AuthMessage::AuthStatus {
                authenticated: self.store.is_authenticated(),
            }),
            // Parent-bound request and reply messages are protocol members
            // but carry no action on the embedded side.
            AuthMessage::RequestAuth | AuthMessage::AuthStatus { .. } => None,
        }
    }

    /// Subscribe the bridge to a stream of incoming envelopes.
    ///
    /// Only applicable in an embedded context; returns `None` (with a
    /// diagnostic) for a top-level window. The subscription runs until the
    /// envelope channel closes or the returned handle is dropped.
    pub fn attach(
        self,
        context: &WindowContext,
        mut incoming: mpsc::UnboundedReceiver<Envelope>,
    ) -> Option<BridgeHandle> {
        if !context.is_embedded() {
            log::debug!("Top-level window: auth bridge not attached");
            return None;
        }

        let task = tokio::spawn(async move {
            while let Some(envelope) = incoming.recv().await {
                if let Some(reply) = self.handle(&envelope.origin, &envelope.payload) {
                    if envelope.reply.send(reply).is_err() {
                        log::debug!("Sender window gone, dropping reply to {}", envelope.origin);
                    }
                }
            }
            log::debug!("Auth bridge envelope channel closed");
        });

        Some(BridgeHandle { task })
    }
}

/// Active bridge subscription. Dropping it detaches the bridge.
pub struct BridgeHandle {
    task: JoinHandle<()>,
}

impl BridgeHandle {
    /// Detach the bridge, stopping message consumption.
    pub fn detach(self) {}
}

impl Drop for BridgeHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
