//! Transient user notifications (toasts)
//!
//! Core logic talks to the [`Notifier`] trait; the app provides
//! [`Notifications`], a signal-backed queue rendered by the toaster.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

#[derive(Clone, Copy)]
pub struct Notifications {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Currently visible notices, oldest first
    pub fn visible(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Notifications {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        match level {
            NoticeLevel::Error => log::warn!("notice #{}: {}", id, message),
            _ => log::debug!("notice #{}: {}", id, message),
        }

        self.notices.update(|notices| {
            notices.push(Notice {
                id,
                level,
                message: message.to_string(),
            })
        });

        let this = *self;
        Timeout::new(NOTICE_TTL_MS, move || this.dismiss(id)).forget();
    }
}

/// Hook to access the notification queue
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found in component tree")
}
