//! Tab bar and the view shown for the active tab

use crate::dashboards::{RelatorioVendasDashboard, VendedorDashboard};
use crate::domain::a001_vendedor::ui::list::VendedoresList;
use crate::domain::a002_venda::ui::list::VendasList;
use crate::layout::global_context::{use_global_context, AppTab};
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireSession;
use crate::system::pages::login::LoginPage;
use crate::usecases::u501_importacao_vendas::ImportacaoVendasWidget;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let tabs = move || {
        let authenticated = session.is_authenticated();
        AppTab::visible(authenticated)
            .into_iter()
            .map(|tab| {
                let class = move || {
                    if ctx.active.get() == tab {
                        "tab-bar__item tab-bar__item--active"
                    } else {
                        "tab-bar__item"
                    }
                };
                view! {
                    <button class=class on:click=move |_| ctx.activate_tab(tab)>
                        {tab.title(authenticated)}
                    </button>
                }
            })
            .collect_view()
    };

    view! { <nav class="tab-bar">{tabs}</nav> }
}

#[component]
pub fn TabContent() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    move || match ctx.active.get() {
        AppTab::Vendas => view! { <VendasList /> }.into_any(),
        AppTab::Vendedores => view! { <VendedoresList /> }.into_any(),
        AppTab::Relatorios => view! { <RelatorioVendasDashboard /> }.into_any(),
        AppTab::Importacao => view! { <ImportacaoVendasWidget /> }.into_any(),
        AppTab::Login => {
            if session.is_authenticated() {
                view! { <VendedorDashboard /> }.into_any()
            } else {
                view! { <LoginPage /> }.into_any()
            }
        }
        AppTab::Dashboard => view! {
            <RequireSession>
                <VendedorDashboard />
            </RequireSession>
        }
        .into_any(),
    }
}
