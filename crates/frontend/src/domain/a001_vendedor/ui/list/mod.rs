use contracts::domain::a001_vendedor::VendedorDto;
use leptos::prelude::*;

use crate::domain::a001_vendedor::api;
use crate::shared::fetch::RemoteData;
use crate::shared::number_format::format_percent;

const LOAD_ERROR: &str = "Erro ao carregar vendedores";

#[component]
pub fn VendedoresList() -> impl IntoView {
    let vendedores = RemoteData::<Vec<VendedorDto>>::new(LOAD_ERROR);
    vendedores.load(api::list_request());

    let rows = move || {
        let (loading, failure, items) = vendedores.with(|s| {
            (s.is_loading(), s.failure_message(LOAD_ERROR), s.data().cloned())
        });
        let items = items.unwrap_or_default();
        if loading && items.is_empty() {
            return view! { <tr><td colspan="3" class="table__placeholder">"Carregando..."</td></tr> }
                .into_any();
        }
        if let Some(message) = failure {
            return view! {
                <tr>
                    <td colspan="3" class="table__placeholder">
                        <div class="alert alert--error">{message}</div>
                    </td>
                </tr>
            }
            .into_any();
        }
        if items.is_empty() {
            return view! { <tr><td colspan="3" class="table__placeholder">"Nenhum vendedor cadastrado"</td></tr> }
                .into_any();
        }
        items
            .into_iter()
            .map(|v| {
                let comissao = v
                    .porcentagem_comissao
                    .map(format_percent)
                    .unwrap_or_else(|| "-".to_string());
                view! {
                    <tr>
                        <td class="table__cell--strong">{v.nome_vendedor}</td>
                        <td><span class="badge badge--info">{comissao}</span></td>
                        <td>{v.nome_tabela.unwrap_or_else(|| "-".to_string())}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card">
            <div class="card__header">
                <div>
                    <h2 class="card__title">"Vendedores"</h2>
                    <p class="card__description">"Gerencie vendedores e suas porcentagens de comissão"</p>
                </div>
            </div>
            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nome do Vendedor"</th>
                            <th>"Comissão (%)"</th>
                            <th>"Tabela/Campanha"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
