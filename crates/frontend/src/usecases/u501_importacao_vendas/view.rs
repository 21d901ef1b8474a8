use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_importacao_vendas::ImportacaoVendas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::api::{self, TEMPLATE_SUCCESS_MESSAGE};
use super::state::{ImportState, SelectedFile, ADVERTISED_MAX_SIZE_MB};
use crate::shared::export::BrowserDownload;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifier};
use crate::shared::number_format::format_brl;

#[component]
pub fn ImportacaoVendasWidget() -> impl IntoView {
    let notifications = use_notifications();
    let state = RwSignal::new(ImportState::default());
    // The browser File handle is not Send, keep it beside the state machine
    let file_handle = StoredValue::new_local(None::<web_sys::File>);
    let dragging = RwSignal::new(false);
    let template_busy = RwSignal::new(false);

    let pick = move |file: web_sys::File| {
        let selected = SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            size_bytes: file.size().max(0.0) as u64,
        };
        match state.try_update(|s| s.select_file(selected)) {
            Some(Ok(())) => file_handle.set_value(Some(file)),
            Some(Err(rejection)) => notifications.error(&rejection.to_string()),
            None => {}
        }
    };

    let on_upload = move |_| {
        match state.try_update(|s| s.start_upload()) {
            Some(Ok(_)) => {}
            Some(Err(rejection)) => {
                notifications.error(&rejection.to_string());
                return;
            }
            None => return,
        }
        let Some(file) = file_handle.get_value() else {
            log::warn!("upload started without a file handle");
            state.update(|s| s.reset());
            return;
        };
        log::info!("{}: uploading '{}'", ImportacaoVendas::full_name(), file.name());
        spawn_local(async move {
            let outcome = api::upload_vendas(&file).await;
            if let Some(Some((level, message))) = state.try_update(|s| s.finish_upload(outcome)) {
                notifications.notify(level, &message);
            }
        });
    };

    let on_reset = move |_| {
        state.update(|s| s.reset());
        file_handle.set_value(None);
    };

    let on_template = move |_| {
        template_busy.set(true);
        spawn_local(async move {
            match api::download_template(&BrowserDownload).await {
                Ok(()) => notifications.success(TEMPLATE_SUCCESS_MESSAGE),
                Err(e) => notifications.error(&e.user_message()),
            }
            template_busy.set(false);
        });
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            pick(file);
        }
        // Allow choosing the same file again
        input.set_value("");
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            pick(file);
        }
    };

    let uploading = move || state.with(|s| s.is_uploading());
    let busy = Signal::derive(uploading);

    let selected_view = move || {
        state.with(|s| {
            s.selected_file().cloned().map(|file| {
                view! {
                    <div class="file-chip">
                        {icon("file")}
                        <div>
                            <p class="file-chip__name">{file.name.clone()}</p>
                            <p class="file-chip__size">{file.size_label()}</p>
                        </div>
                    </div>
                }
            })
        })
    };

    let result_view = move || {
        let current = state.get();
        if let Some(message) = current.failure() {
            return Some(
                view! {
                    <div class="card">
                        <h3 class="card__title">"Resultado da Importação"</h3>
                        <div class="alert alert--error">{message.to_string()}</div>
                        <div class="button-row">
                            <Button appearance=ButtonAppearance::Primary on_click=on_reset>"Importar Novo Arquivo"</Button>
                        </div>
                    </div>
                }
                .into_any(),
            );
        }
        let summary = current.summary()?.clone();
        let created = summary
            .created_items
            .iter()
            .map(|v| {
                view! {
                    <div class="import-result__item import-result__item--ok">
                        <span>{format!("Linha {}: {} - {}", v.linha, v.cliente, format_brl(v.valor))}</span>
                        <span class="badge badge--success">{format!("{} - {}", v.vendedor, v.tabela)}</span>
                    </div>
                }
            })
            .collect_view();
        let errors = summary
            .error_items
            .iter()
            .map(|e| view! { <div class="import-result__item import-result__item--error">{e.clone()}</div> })
            .collect_view();
        let has_created = !summary.created_items.is_empty();
        let has_errors = !summary.error_items.is_empty();

        Some(
            view! {
                <div class="card">
                    <h3 class="card__title">"Resultado da Importação"</h3>
                    <div class="import-result__counts">
                        <div class="import-result__count import-result__count--ok">
                            <strong>{summary.created_count}</strong>
                            <span>"Vendas Criadas"</span>
                        </div>
                        <div class="import-result__count import-result__count--error">
                            <strong>{summary.error_count}</strong>
                            <span>"Erros Encontrados"</span>
                        </div>
                    </div>
                    {has_created.then(|| view! {
                        <h4 class="import-result__heading">"Vendas Criadas com Sucesso:"</h4>
                        <div class="import-result__list">{created}</div>
                    })}
                    {has_errors.then(|| view! {
                        <h4 class="import-result__heading">"Erros Encontrados:"</h4>
                        <div class="import-result__list">{errors}</div>
                    })}
                    <div class="button-row">
                        <Button appearance=ButtonAppearance::Primary on_click=on_reset>"Importar Novo Arquivo"</Button>
                    </div>
                </div>
            }
            .into_any(),
        )
    };

    view! {
        <div class="page">
            <div class="page__intro">
                <h2>{ImportacaoVendas::display_name()}</h2>
                <p>{ImportacaoVendas::description()}</p>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Template Excel"</h3>
                    <p class="card__description">"Baixe o template com o formato correto para importação"</p>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=on_template disabled=template_busy>
                    {icon("download")}
                    {move || if template_busy.get() { "Gerando template..." } else { "Baixar Template" }}
                </Button>
                <p class="hint">"O template inclui exemplos e instruções para preenchimento correto"</p>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Upload do Arquivo"</h3>
                    <p class="card__description">"Selecione ou arraste o arquivo Excel com as vendas"</p>
                </div>
                <label
                    class=move || if dragging.get() { "drop-zone drop-zone--active" } else { "drop-zone" }
                    on:dragenter=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        dragging.set(true);
                    }
                    on:dragover=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        dragging.set(true);
                    }
                    on:dragleave=move |_| dragging.set(false)
                    on:drop=on_drop
                >
                    <input
                        type="file"
                        accept=".xlsx,.xls"
                        class="visually-hidden"
                        disabled=uploading
                        on:change=on_input_change
                    />
                    <Show
                        when=move || state.with(|s| s.selected_file().is_some())
                        fallback=move || view! {
                            <div class="drop-zone__placeholder">
                                {icon("upload")}
                                <p class="drop-zone__title">"Clique ou arraste o arquivo aqui"</p>
                                <p class="hint">{format!("Formatos aceitos: .xlsx, .xls (máx. {}MB)", ADVERTISED_MAX_SIZE_MB)}</p>
                            </div>
                        }
                    >
                        {selected_view}
                    </Show>
                </label>
                <Show when=move || state.with(|s| matches!(s, ImportState::FileSelected(_) | ImportState::Uploading(_)))>
                    <div class="button-row">
                        <Button appearance=ButtonAppearance::Primary on_click=on_upload disabled=busy>
                            {move || if uploading() { "Importando..." } else { "Importar Vendas" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_reset disabled=busy>
                            "Cancelar"
                        </Button>
                    </div>
                </Show>
                <Show when=uploading>
                    <p class="hint hint--center">"Processando arquivo..."</p>
                </Show>
            </div>

            {result_view}

            <div class="card">
                <h3 class="card__title">"Instruções de Uso"</h3>
                <ol class="instructions">
                    <li>"Baixe o template Excel clicando no botão acima"</li>
                    <li>"Preencha os dados das vendas seguindo o formato do template"</li>
                    <li>"Certifique-se de que os vendedores e tabelas de comissão existem no sistema"</li>
                    <li>"Faça upload do arquivo preenchido"</li>
                    <li>"Aguarde o processamento e verifique os resultados"</li>
                </ol>
            </div>
        </div>
    }
}
