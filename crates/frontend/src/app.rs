use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notifications::Notifications;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(Notifications::new());

    let session = SessionContext::new(ctx);
    provide_context(session);

    // Session first: a restored session opens the dashboard, an explicit
    // ?tab= in the address bar wins over that.
    session.restore();
    ctx.init_router_integration(session.is_authenticated_untracked());

    view! { <Shell /> }
}
