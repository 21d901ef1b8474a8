use contracts::dashboards::d400_relatorio_vendas::RelatorioVendasResponse;
use contracts::domain::a001_vendedor::VendedorDto;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::super::api::{relatorio_request, RELATORIO_FILTERS};
use super::super::chart_data::{status_comissoes, totals_por_vendedor};
use crate::domain::a001_vendedor::api as vendedor_api;
use crate::shared::components::bar_chart::{BarChart, BarDatum, ProportionChart, Slice};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::select_field::{comissao_status_options, SelectField};
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::vendas_table::VendasTable;
use crate::shared::date_utils::today_iso;
use crate::shared::export::{export_sales_csv, BrowserDownload};
use crate::shared::fetch::RemoteData;
use crate::shared::filters::FilterSet;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::number_format::{format_brl, format_count};

const LOAD_ERROR: &str = "Erro ao carregar relatório";

#[component]
pub fn RelatorioVendasDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let relatorio = RemoteData::<RelatorioVendasResponse>::new(LOAD_ERROR);
    let vendedores = RemoteData::<Vec<VendedorDto>>::new("Erro ao carregar vendedores");
    let filters = RwSignal::new(FilterSet::new(RELATORIO_FILTERS));

    relatorio.load(relatorio_request(filters.with_untracked(|f| f.apply())));
    vendedores.load(vendedor_api::list_request());

    let field = move |key: &'static str| Signal::derive(move || filters.with(|f| f.get(key).to_string()));
    let set = move |key: &'static str| {
        move |value: String| {
            filters.update(|f| {
                f.set_field(key, value);
            })
        }
    };

    let on_apply = move |_| relatorio.load(relatorio_request(filters.with_untracked(|f| f.apply())));
    let on_clear = move |_| {
        if let Some(query) = filters.try_update(|f| f.clear()) {
            relatorio.load(relatorio_request(query));
        }
    };
    let on_export = move |_| {
        relatorio.with_untracked(|s| {
            let _ = export_sales_csv(
                s.data().map(|r| r.vendas.as_slice()),
                &today_iso(),
                &BrowserDownload,
                &notifications,
            );
        });
    };

    let vendedor_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Todos os vendedores".to_string())];
        vendedores.with(|s| {
            options.extend(
                s.data()
                    .into_iter()
                    .flatten()
                    .map(|v| (v.nome_vendedor.clone(), v.nome_vendedor.clone())),
            )
        });
        options
    });

    let has_report = move || relatorio.with(|s| s.data().is_some());
    let resumo_value = move |pick: fn(&RelatorioVendasResponse) -> String| {
        Signal::derive(move || relatorio.with(|s| s.data().map(pick)))
    };

    let bar_data = Signal::derive(move || {
        let rows = relatorio.with(|r| {
            vendedores.with(|v| {
                totals_por_vendedor(
                    v.data().map(Vec::as_slice).unwrap_or_default(),
                    r.data().map(|d| d.vendas.as_slice()).unwrap_or_default(),
                )
            })
        });
        rows.into_iter()
            .map(|t| BarDatum {
                label: t.nome,
                value: t.valor,
                display: format_brl(t.valor),
            })
            .collect::<Vec<_>>()
    });
    let status_data = Signal::derive(move || {
        relatorio.with(|s| {
            s.data()
                .map(|r| {
                    status_comissoes(&r.resumo)
                        .into_iter()
                        .map(|t| Slice {
                            label: t.label,
                            value: t.value,
                            display: format_brl(t.value),
                            color: t.color,
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let vendas_rows = Signal::derive(move || {
        relatorio.with(|s| s.data().map(|r| r.vendas.clone()).unwrap_or_default())
    });
    let loading = Signal::derive(move || relatorio.is_loading());

    view! {
        <div class="page">
            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Relatório de Vendas"</h2>
                    <p class="card__description">"Filtre vendas por vendedor, período e status da comissão"</p>
                </div>
                <div class="filter-grid">
                    <SelectField
                        label="Nome do Vendedor"
                        value=field("nome_vendedor")
                        options=vendedor_options
                        on_change=set("nome_vendedor")
                    />
                    <DateInput label="Data Início" value=field("data_inicio") on_change=set("data_inicio") />
                    <DateInput label="Data Fim" value=field("data_fim") on_change=set("data_fim") />
                    <SelectField
                        label="Status Comissão"
                        value=field("comissao_paga")
                        options=comissao_status_options("Paga", "Pendente")
                        on_change=set("comissao_paga")
                    />
                </div>
                <div class="button-row">
                    <Button appearance=ButtonAppearance::Primary on_click=on_apply disabled=loading>
                        {move || if loading.get() { "Carregando..." } else { "Gerar Relatório" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_clear>
                        "Limpar Filtros"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                        {icon("download")}
                        "Exportar CSV"
                    </Button>
                </div>
            </div>

            {move || {
                relatorio
                    .with(|s| s.failure_message(LOAD_ERROR))
                    .map(|message| view! { <div class="alert alert--error">{message}</div> })
            }}

            <Show when=has_report>
                <div class="stat-grid">
                    <StatCard
                        label="Total de Vendas"
                        icon_name="sales"
                        value=resumo_value(|r| format_count(r.resumo.total_vendas))
                    />
                    <StatCard
                        label="Valor Total"
                        icon_name="money"
                        value=resumo_value(|r| format_brl(r.resumo.total_valor_vendas))
                    />
                    <StatCard
                        label="Comissões Pagas"
                        icon_name="check"
                        tone=StatTone::Success
                        value=resumo_value(|r| format_brl(r.resumo.comissoes_pagas))
                    />
                    <StatCard
                        label="Comissões Pendentes"
                        icon_name="clock"
                        tone=StatTone::Warning
                        value=resumo_value(|r| format_brl(r.resumo.comissoes_pendentes))
                    />
                </div>

                <div class="chart-grid">
                    <BarChart title="Vendas por Vendedor" data=bar_data />
                    <ProportionChart title="Status das Comissões" data=status_data />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Detalhes das Vendas"</h3>
                    </div>
                    <VendasTable
                        vendas=vendas_rows
                        loading=loading
                        empty_text="Nenhuma venda encontrada com os filtros aplicados"
                    />
                </div>
            </Show>
        </div>
    }
}
