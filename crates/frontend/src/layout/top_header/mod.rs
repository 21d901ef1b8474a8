//! TopHeader component - application title and the logged-in vendedor

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

pub const APP_TITLE: &str = "Sistema de Vendas e Comissões";

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();

    let logged_in_as = move || {
        session.session().map(|s| {
            view! {
                <div class="top-header__user">
                    {icon("user")}
                    "Logado como: "
                    <span class="top-header__user-name">{s.vendedor.nome_vendedor}</span>
                </div>
            }
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
            <div class="top-header__actions">{logged_in_as}</div>
        </header>
    }
}
