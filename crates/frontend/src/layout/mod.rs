pub mod global_context;
pub mod tabs;
pub mod toaster;
pub mod top_header;

use leptos::prelude::*;
use tabs::{TabBar, TabContent};
use toaster::Toaster;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Vendas | Vendedores | ... (TabBar)       |
/// +------------------------------------------+
/// |          active tab (TabContent)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                <TabBar />
                <div class="app-content">
                    <TabContent />
                </div>
            </main>
            <Toaster />
        </div>
    }
}
