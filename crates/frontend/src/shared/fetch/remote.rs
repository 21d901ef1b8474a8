use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::request::{fetch_json, ApiRequest};
use super::state::{FetchState, Resolution};
use crate::shared::notifications::{use_notifications, Notifications};
use crate::system::auth::context::{use_session, SessionContext};

/// Reactive [`FetchState`] bound to the session and the toaster.
///
/// Must be created inside a component; it captures the contexts it needs so
/// that responses can be resolved after the component's scope is gone.
pub struct RemoteData<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
    session: SessionContext,
    notifications: Notifications,
    fallback: &'static str,
}

impl<T: Send + Sync + 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteData<T> {}

impl<T: DeserializeOwned + Send + Sync + 'static> RemoteData<T> {
    /// `fallback` is shown when a load fails without a server message
    pub fn new(fallback: &'static str) -> Self {
        Self {
            state: RwSignal::new(FetchState::new()),
            session: use_session(),
            notifications: use_notifications(),
            fallback,
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn load(&self, request: ApiRequest) {
        let Self {
            state,
            mut session,
            notifications,
            fallback,
        } = *self;

        let Some(seq) = state.try_update(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            let outcome = fetch_json::<T>(&request).await;
            // The owning view may be gone by now; a 401 must still end the session.
            let detached = Resolution::detached(&outcome);
            state
                .try_update(|s| s.finish(seq, outcome))
                .unwrap_or(detached)
                .report(fallback, &mut session, &notifications);
        });
    }
}
