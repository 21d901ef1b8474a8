use contracts::domain::a001_vendedor::VendedorPublico;
use leptos::prelude::*;

use super::session::{AuthGate, Session, SessionStore, SessionTransition};
use super::storage::BrowserStorage;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifications::Notifier;

/// Session store shared through context, with a signal mirror for views
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore<BrowserStorage>>,
    session: RwSignal<Option<Session>>,
    nav: AppGlobalContext,
}

impl SessionContext {
    pub fn new(nav: AppGlobalContext) -> Self {
        Self {
            store: StoredValue::new(SessionStore::new(BrowserStorage)),
            session: RwSignal::new(None),
            nav,
        }
    }

    /// Restores the persisted session, if any, and opens the dashboard for it
    pub fn restore(&self) {
        let transition = self
            .store
            .try_update_value(|store| store.restore())
            .unwrap_or(SessionTransition::Stay);
        self.apply(transition);
    }

    pub fn login(&self, vendedor: VendedorPublico, token: String) {
        let transition = self
            .store
            .try_update_value(|store| store.login(vendedor, token))
            .unwrap_or(SessionTransition::Stay);
        self.apply(transition);
    }

    pub fn logout(&self) {
        let transition = self
            .store
            .try_update_value(|store| store.logout())
            .unwrap_or(SessionTransition::Stay);
        self.apply(transition);
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.session.with_untracked(|s| s.is_some())
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.store
            .with_value(|store| store.token().map(str::to_string))
    }

    fn apply(&self, transition: SessionTransition) {
        let current = self.store.with_value(|store| store.current().cloned());
        self.session.set(current);
        self.nav.follow(transition);
    }
}

impl AuthGate for SessionContext {
    fn on_unauthorized(&mut self, notifier: &dyn Notifier) {
        let transition = self
            .store
            .try_update_value(|store| store.expire(notifier))
            .unwrap_or(SessionTransition::Stay);
        self.apply(transition);
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
