//! Loading state of one remote data set
//!
//! Every request gets a sequence number from [`FetchState::begin`]. A
//! response older than one already applied is dropped, so a slow early
//! request can never overwrite the result of a later one.

use super::error::FetchError;
use crate::shared::notifications::Notifier;
use crate::system::auth::session::AuthGate;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    data: Option<T>,
    error: Option<FetchError>,
    loading: bool,
    issued: u64,
    applied: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            issued: 0,
            applied: 0,
        }
    }
}

/// What happened to one response
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a resolution must be reported so the user sees failures"]
pub struct Resolution {
    pub applied: bool,
    pub error: Option<FetchError>,
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error text for a load that failed before any data arrived
    pub fn failure_message(&self, fallback: &str) -> Option<String> {
        match (&self.data, &self.error) {
            (None, Some(err)) => Some(err.user_message(fallback)),
            _ => None,
        }
    }

    /// Marks a new request in flight and returns its sequence number
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Records the outcome of request `seq`. Failures keep the last good data
    /// so the view can show it next to the error.
    pub fn finish(&mut self, seq: u64, outcome: Result<T, FetchError>) -> Resolution {
        let error = outcome.as_ref().err().cloned();
        if seq <= self.applied || seq > self.issued {
            log::debug!("dropping stale response #{} (applied #{})", seq, self.applied);
            return Resolution {
                applied: false,
                error,
            };
        }

        self.applied = seq;
        if seq == self.issued {
            self.loading = false;
        }
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                log::warn!("request #{} failed: {}", seq, e);
                self.error = Some(e);
            }
        }
        Resolution {
            applied: true,
            error,
        }
    }
}

impl Resolution {
    /// Outcome of a response whose state no longer exists
    pub fn detached<T>(outcome: &Result<T, FetchError>) -> Self {
        Self {
            applied: false,
            error: outcome.as_ref().err().cloned(),
        }
    }

    /// Surfaces the outcome: a rejected token ends the session even when the
    /// response itself was stale; other failures are only shown when applied.
    pub fn report<A: AuthGate + ?Sized>(self, fallback: &str, auth: &mut A, notifier: &dyn Notifier) {
        match self.error {
            Some(FetchError::Unauthorized) => auth.on_unauthorized(notifier),
            Some(err) if self.applied => notifier.error(&err.user_message(fallback)),
            _ => {}
        }
    }
}
