use leptos::prelude::*;

use super::context::use_session;

/// Renders children only while a vendedor is logged in
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <div class="empty-state">"Faça login para acessar o seu dashboard."</div> }
        >
            {children()}
        </Show>
    }
}
