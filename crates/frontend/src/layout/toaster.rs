use crate::shared::notifications::{use_notifications, NoticeLevel};
use leptos::prelude::*;

/// Stack of transient notices, bottom-right
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notifications.visible()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.level {
                        NoticeLevel::Success => "toast toast--success",
                        NoticeLevel::Error => "toast toast--error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class on:click=move |_| notifications.dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
