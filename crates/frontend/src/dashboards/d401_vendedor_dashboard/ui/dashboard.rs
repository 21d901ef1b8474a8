use contracts::dashboards::d401_vendedor_dashboard::VendedorDashboardResponse;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::super::api::{dashboard_request, DASHBOARD_FILTERS};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::select_field::{comissao_status_options, SelectField};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::vendas_table::VendasTable;
use crate::shared::fetch::RemoteData;
use crate::shared::filters::{FilterQuery, FilterSet};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_brl, format_count};
use crate::system::auth::context::use_session;

const LOAD_ERROR: &str = "Erro ao carregar dashboard";

/// Statistics and sales of the logged-in vendedor
#[component]
pub fn VendedorDashboard() -> impl IntoView {
    let session = use_session();
    let dashboard = RemoteData::<VendedorDashboardResponse>::new(LOAD_ERROR);
    let filters = RwSignal::new(FilterSet::new(DASHBOARD_FILTERS));

    let load = move |query: FilterQuery| match session.token_untracked() {
        Some(token) => dashboard.load(dashboard_request(&token, query)),
        None => log::debug!("dashboard requested without a session"),
    };
    load(filters.with_untracked(|f| f.apply()));

    let field = move |key: &'static str| Signal::derive(move || filters.with(|f| f.get(key).to_string()));
    let set = move |key: &'static str| {
        move |value: String| {
            filters.update(|f| {
                f.set_field(key, value);
            })
        }
    };
    let on_apply = move |_| load(filters.with_untracked(|f| f.apply()));
    let on_clear = move |_| {
        if let Some(query) = filters.try_update(|f| f.clear()) {
            load(query);
        }
    };

    let nome = move || {
        session
            .session()
            .map(|s| s.vendedor.nome_vendedor)
            .unwrap_or_default()
    };
    let stat = move |pick: fn(&VendedorDashboardResponse) -> String| {
        Signal::derive(move || dashboard.with(|s| s.data().map(pick)))
    };
    let vendas_rows = Signal::derive(move || {
        dashboard.with(|s| s.data().map(|d| d.vendas.clone()).unwrap_or_default())
    });
    let loading = Signal::derive(move || dashboard.is_loading());
    let table_error = Signal::derive(move || dashboard.with(|s| s.failure_message(LOAD_ERROR)));
    let has_data = move || dashboard.with(|s| s.data().is_some());

    view! {
        <div class="page">
            <div class="dashboard-header">
                <div class="dashboard-header__who">
                    <div class="dashboard-header__avatar">{icon("user")}</div>
                    <div>
                        <h2 class="dashboard-header__title">"Dashboard do Vendedor"</h2>
                        <p class="dashboard-header__subtitle">"Bem-vindo, " {nome} "!"</p>
                    </div>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| session.logout()>
                    {icon("logout")}
                    "Sair"
                </Button>
            </div>

            <Show
                when=has_data
                fallback=move || {
                    if loading.get() {
                        view! { <div class="empty-state">"Carregando dashboard..."</div> }.into_any()
                    } else {
                        view! {
                            <div class="alert alert--error">
                                "Erro ao carregar dados do dashboard. Tente novamente."
                            </div>
                        }
                        .into_any()
                    }
                }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Total de Vendas"
                        icon_name="sales"
                        value=stat(|d| format_count(d.estatisticas.total_vendas))
                    />
                    <StatCard
                        label="Valor Total"
                        icon_name="money"
                        value=stat(|d| format_brl(d.estatisticas.total_valor_vendas))
                    />
                    <StatCard
                        label="Comissões Pagas"
                        icon_name="check"
                        tone=StatTone::Success
                        value=stat(|d| format_brl(d.estatisticas.comissoes_pagas))
                    />
                    <StatCard
                        label="Comissões Pendentes"
                        icon_name="clock"
                        tone=StatTone::Warning
                        value=stat(|d| format_brl(d.estatisticas.comissoes_pendentes))
                    />
                </div>
            </Show>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Filtros"</h3>
                </div>
                <div class="filter-grid">
                    <DateInput label="Data Início" value=field("data_inicio") on_change=set("data_inicio") />
                    <DateInput label="Data Fim" value=field("data_fim") on_change=set("data_fim") />
                    <SelectField
                        label="Status Comissão"
                        value=field("comissao_paga")
                        options=comissao_status_options("Pagas", "Pendentes")
                        on_change=set("comissao_paga")
                    />
                    <div class="button-row button-row--end">
                        <Button appearance=ButtonAppearance::Primary on_click=on_apply>"Aplicar"</Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_clear>"Limpar"</Button>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Suas Vendas"</h3>
                    <p class="card__description">
                        {move || dashboard.with(|s| s.data().map(|d| d.vendas.len()).unwrap_or_default())}
                        " venda(s) no período selecionado"
                    </p>
                </div>
                <VendasTable
                    vendas=vendas_rows
                    loading=loading
                    empty_text="Nenhuma venda encontrada com os filtros aplicados."
                    show_tabela=true
                    error=table_error
                />
            </div>
        </div>
    }
}
