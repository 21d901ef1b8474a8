use contracts::domain::a002_venda::VendaDto;
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_date_br;
use crate::shared::number_format::format_brl;

/// Sales table used by the listing, the report and the dashboard
#[component]
pub fn VendasTable(
    #[prop(into)] vendas: Signal<Vec<VendaDto>>,
    #[prop(into)] loading: Signal<bool>,
    empty_text: &'static str,
    /// Commission table badge instead of the Vendedor column (dashboard of a
    /// single vendedor)
    #[prop(optional)]
    show_tabela: bool,
    /// Message of a load that failed before any rows arrived
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let body = move || {
        if loading.get() && vendas.with(|v| v.is_empty()) {
            return view! {
                <tr><td colspan=7 class="table__placeholder">"Carregando..."</td></tr>
            }
            .into_any();
        }
        if let Some(message) = error.and_then(|e| e.get()) {
            return view! {
                <tr>
                    <td colspan=7 class="table__placeholder">
                        <div class="alert alert--error">{message}</div>
                    </td>
                </tr>
            }
            .into_any();
        }
        if vendas.with(|v| v.is_empty()) {
            return view! {
                <tr><td colspan=7 class="table__placeholder">{empty_text}</td></tr>
            }
            .into_any();
        }
        vendas
            .get()
            .into_iter()
            .map(|venda| {
                let status_class = if venda.comissao_paga {
                    "badge badge--success"
                } else {
                    "badge badge--warning"
                };
                let status = venda.status_comissao();
                view! {
                    <tr>
                        <td class="table__cell--strong">{venda.nome_cliente.clone()}</td>
                        <td>{venda.cpf_cliente.clone()}</td>
                        <td>{format_optional_date_br(venda.data_venda.as_deref())}</td>
                        <td class="table__cell--number">{format_brl(venda.valor_venda)}</td>
                        {if show_tabela {
                            view! {
                                <td>
                                    <span class="badge badge--outline">
                                        {venda.nome_tabela.clone().unwrap_or_else(|| "-".to_string())}
                                    </span>
                                </td>
                            }
                            .into_any()
                        } else {
                            view! {
                                <td>{venda.nome_vendedor.clone().unwrap_or_else(|| "-".to_string())}</td>
                            }
                            .into_any()
                        }}
                        <td class="table__cell--number">{format_brl(venda.valor_comissao)}</td>
                        <td><span class=status_class>{status}</span></td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Cliente"</th>
                        <th>"CPF"</th>
                        <th>"Data"</th>
                        <th>"Valor Venda"</th>
                        <th>{if show_tabela { "Tabela" } else { "Vendedor" }}</th>
                        <th>"Comissão"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
