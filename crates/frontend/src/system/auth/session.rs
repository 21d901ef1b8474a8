//! Logged-in vendedor session and its persistence
//!
//! The session is either absent or a complete (vendedor, token) pair. Both
//! halves are persisted under [`TOKEN_KEY`] and [`VENDEDOR_KEY`] and are
//! written or cleared together.

use contracts::domain::a001_vendedor::aggregate::VendedorPublico;

use super::storage::{KeyValueStore, StorageError, TOKEN_KEY, VENDEDOR_KEY};
use crate::shared::notifications::Notifier;

pub const SESSION_EXPIRED_MESSAGE: &str = "Sessão expirada. Faça login novamente.";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub vendedor: VendedorPublico,
    pub token: String,
}

/// Where the UI should go after a session change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SessionTransition {
    /// Show the vendedor dashboard
    ToDashboard,
    /// Back to the default (Vendas) view
    ToDefault,
    /// Nothing to do
    Stay,
}

/// Anything that can terminate the session when the API rejects the token
pub trait AuthGate {
    fn on_unauthorized(&mut self, notifier: &dyn Notifier);
}

pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Rebuilds the session from storage. Anything other than a complete,
    /// parseable pair wipes both keys.
    pub fn restore(&mut self) -> SessionTransition {
        let token = self.storage.get(TOKEN_KEY);
        let raw_vendedor = self.storage.get(VENDEDOR_KEY);

        match (token, raw_vendedor) {
            (None, None) => {
                self.current = None;
                SessionTransition::Stay
            }
            (Some(token), Some(raw)) if !token.is_empty() => {
                match serde_json::from_str::<VendedorPublico>(&raw) {
                    Ok(vendedor) => {
                        log::info!("session restored for vendedor #{}", vendedor.id);
                        self.current = Some(Session { vendedor, token });
                        SessionTransition::ToDashboard
                    }
                    Err(e) => {
                        log::warn!("stored vendedor is unreadable, discarding session: {}", e);
                        self.discard();
                        SessionTransition::Stay
                    }
                }
            }
            _ => {
                log::warn!("incomplete stored session, discarding");
                self.discard();
                SessionTransition::Stay
            }
        }
    }

    /// Starts a session. If persisting fails the in-memory session still
    /// holds for this page, but storage is left empty rather than half-written.
    pub fn login(&mut self, vendedor: VendedorPublico, token: String) -> SessionTransition {
        if let Err(e) = self.persist(&vendedor, &token) {
            log::warn!("session not persisted: {}", e);
            self.clear_storage();
        }
        log::info!("vendedor #{} logged in", vendedor.id);
        self.current = Some(Session { vendedor, token });
        SessionTransition::ToDashboard
    }

    pub fn logout(&mut self) -> SessionTransition {
        if let Some(session) = &self.current {
            log::info!("vendedor #{} logged out", session.vendedor.id);
        }
        self.discard();
        SessionTransition::ToDefault
    }

    /// Ends the session after the API refused the token
    pub fn expire(&mut self, notifier: &dyn Notifier) -> SessionTransition {
        let transition = self.logout();
        notifier.error(SESSION_EXPIRED_MESSAGE);
        transition
    }

    fn persist(&self, vendedor: &VendedorPublico, token: &str) -> Result<(), StorageError> {
        let raw = serde_json::to_string(vendedor).map_err(|e| StorageError::Write {
            key: VENDEDOR_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(VENDEDOR_KEY, &raw)
    }

    fn discard(&mut self) {
        self.current = None;
        self.clear_storage();
    }

    fn clear_storage(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(VENDEDOR_KEY);
    }
}

impl<S: KeyValueStore> AuthGate for SessionStore<S> {
    fn on_unauthorized(&mut self, notifier: &dyn Notifier) {
        let _ = self.expire(notifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{MemoryStorage, RecordingNotifier};

    fn maria() -> VendedorPublico {
        VendedorPublico {
            id: 7,
            nome_vendedor: "Maria Souza".to_string(),
            email: Some("maria@loja.com".to_string()),
            ativo: Some(true),
        }
    }

    #[test]
    fn test_login_then_reload_restores_same_session() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new(storage.clone());
        assert_eq!(
            store.login(maria(), "tok-123".to_string()),
            SessionTransition::ToDashboard
        );

        let mut reloaded = SessionStore::new(storage);
        assert_eq!(reloaded.restore(), SessionTransition::ToDashboard);
        assert_eq!(reloaded.current(), store.current());
        assert_eq!(reloaded.token(), Some("tok-123"));
    }

    #[test]
    fn test_logout_clears_both_keys() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new(storage.clone());
        let _ = store.login(maria(), "tok".to_string());

        assert_eq!(store.logout(), SessionTransition::ToDefault);
        assert!(!store.is_authenticated());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(VENDEDOR_KEY));

        let mut reloaded = SessionStore::new(storage);
        assert_eq!(reloaded.restore(), SessionTransition::Stay);
        assert!(reloaded.current().is_none());
    }

    #[test]
    fn test_restore_with_empty_storage() {
        let mut store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.restore(), SessionTransition::Stay);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_restore_with_corrupt_vendedor_clears_storage() {
        let storage = MemoryStorage::with(&[(TOKEN_KEY, "abc"), (VENDEDOR_KEY, "{not json")]);
        let mut store = SessionStore::new(storage.clone());

        assert_eq!(store.restore(), SessionTransition::Stay);
        assert!(store.current().is_none());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(VENDEDOR_KEY));
    }

    #[test]
    fn test_restore_with_half_pair_clears_storage() {
        let storage = MemoryStorage::with(&[(TOKEN_KEY, "abc")]);
        let mut store = SessionStore::new(storage.clone());

        assert_eq!(store.restore(), SessionTransition::Stay);
        assert!(store.current().is_none());
        assert!(!storage.contains(TOKEN_KEY));
    }

    #[test]
    fn test_failed_write_leaves_no_half_pair() {
        let storage = MemoryStorage::default();
        storage.fail_writes_to(VENDEDOR_KEY);
        let mut store = SessionStore::new(storage.clone());

        let _ = store.login(maria(), "tok".to_string());
        assert!(store.is_authenticated());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(VENDEDOR_KEY));
    }

    #[test]
    fn test_unauthorized_expires_session_and_notifies() {
        let storage = MemoryStorage::default();
        let notifier = RecordingNotifier::default();
        let mut store = SessionStore::new(storage.clone());
        let _ = store.login(maria(), "tok".to_string());

        store.on_unauthorized(&notifier);

        assert!(!store.is_authenticated());
        assert!(!storage.contains(TOKEN_KEY));
        assert_eq!(notifier.errors(), vec![SESSION_EXPIRED_MESSAGE.to_string()]);
    }
}
