use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::system::auth::session::SessionTransition;

/// Top-level views of the app, one per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppTab {
    Vendas,
    Vendedores,
    Relatorios,
    Importacao,
    /// Login form, or the vendedor dashboard once logged in
    Login,
    /// Only offered while a session exists
    Dashboard,
}

impl AppTab {
    pub const ALL: [AppTab; 6] = [
        AppTab::Vendas,
        AppTab::Vendedores,
        AppTab::Relatorios,
        AppTab::Importacao,
        AppTab::Login,
        AppTab::Dashboard,
    ];

    /// Stable key used in the `?tab=` query parameter
    pub fn key(self) -> &'static str {
        match self {
            AppTab::Vendas => "vendas",
            AppTab::Vendedores => "vendedores",
            AppTab::Relatorios => "relatorios",
            AppTab::Importacao => "importacao",
            AppTab::Login => "login",
            AppTab::Dashboard => "dashboard",
        }
    }

    pub fn from_key(key: &str) -> Option<AppTab> {
        AppTab::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn title(self, authenticated: bool) -> &'static str {
        match self {
            AppTab::Vendas => "Vendas",
            AppTab::Vendedores => "Vendedores",
            AppTab::Relatorios => "Relatórios",
            AppTab::Importacao => "Importação",
            AppTab::Login if authenticated => "Dashboard",
            AppTab::Login => "Login",
            AppTab::Dashboard => "Meu Dashboard",
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, AppTab::Dashboard)
    }

    /// Tabs shown in the tab bar for the given session state
    pub fn visible(authenticated: bool) -> Vec<AppTab> {
        AppTab::ALL
            .into_iter()
            .filter(|tab| authenticated || !tab.requires_session())
            .collect()
    }
}

/// Tab a session transition leads to, if any
pub fn transition_target(transition: SessionTransition) -> Option<AppTab> {
    match transition {
        SessionTransition::ToDashboard => Some(AppTab::Dashboard),
        SessionTransition::ToDefault => Some(AppTab::Vendas),
        SessionTransition::Stay => None,
    }
}

/// Tab requested by a `?tab=...` query string, ignoring unknown keys and
/// session-only tabs when logged out
pub fn tab_from_search(search: &str, authenticated: bool) -> Option<AppTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("tab")
        .and_then(|key| AppTab::from_key(key))
        .filter(|tab| authenticated || !tab.requires_session())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppTab::Vendas),
        }
    }

    pub fn activate_tab(&self, tab: AppTab) {
        log::debug!("activate_tab: {}", tab.key());
        self.active.set(tab);
    }

    pub fn follow(&self, transition: SessionTransition) {
        if let Some(tab) = transition_target(transition) {
            self.activate_tab(tab);
        }
    }

    /// Picks up `?tab=` from the address bar and keeps it in sync afterwards
    pub fn init_router_integration(&self, authenticated: bool) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_search(&search, authenticated) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the tab navigation context
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for tab in AppTab::ALL {
            assert_eq!(AppTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(AppTab::from_key("pedidos"), None);
    }

    #[test]
    fn test_dashboard_tab_only_when_logged_in() {
        assert!(!AppTab::visible(false).contains(&AppTab::Dashboard));
        assert!(AppTab::visible(true).contains(&AppTab::Dashboard));
        assert_eq!(AppTab::visible(false).len(), 5);
    }

    #[test]
    fn test_login_tab_title_follows_session() {
        assert_eq!(AppTab::Login.title(false), "Login");
        assert_eq!(AppTab::Login.title(true), "Dashboard");
    }

    #[test]
    fn test_transition_target() {
        assert_eq!(
            transition_target(SessionTransition::ToDashboard),
            Some(AppTab::Dashboard)
        );
        assert_eq!(
            transition_target(SessionTransition::ToDefault),
            Some(AppTab::Vendas)
        );
        assert_eq!(transition_target(SessionTransition::Stay), None);
    }

    #[test]
    fn test_tab_from_search() {
        assert_eq!(
            tab_from_search("?tab=relatorios", false),
            Some(AppTab::Relatorios)
        );
        assert_eq!(tab_from_search("?tab=dashboard", false), None);
        assert_eq!(
            tab_from_search("?tab=dashboard", true),
            Some(AppTab::Dashboard)
        );
        assert_eq!(tab_from_search("", false), None);
        assert_eq!(tab_from_search("?tab=nada", true), None);
    }
}
