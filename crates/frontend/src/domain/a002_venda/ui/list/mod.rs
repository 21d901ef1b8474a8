use contracts::domain::a002_venda::VendaDto;
use leptos::prelude::*;

use crate::domain::a002_venda::api;
use crate::shared::components::vendas_table::VendasTable;
use crate::shared::fetch::RemoteData;

const LOAD_ERROR: &str = "Erro ao carregar vendas";

#[component]
pub fn VendasList() -> impl IntoView {
    let vendas = RemoteData::<Vec<VendaDto>>::new(LOAD_ERROR);
    vendas.load(api::list_request());

    let rows = Signal::derive(move || vendas.with(|s| s.data().cloned().unwrap_or_default()));
    let loading = Signal::derive(move || vendas.is_loading());
    let error = Signal::derive(move || vendas.with(|s| s.failure_message(LOAD_ERROR)));

    view! {
        <div class="card">
            <div class="card__header">
                <div>
                    <h2 class="card__title">"Vendas"</h2>
                    <p class="card__description">"Gerencie todas as vendas e comissões"</p>
                </div>
            </div>
            <VendasTable vendas=rows loading=loading empty_text="Nenhuma venda encontrada" error=error />
        </div>
    }
}
