use leptos::prelude::*;

/// Labelled native `<select>`; an option with an empty value means "all"
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class="form-input"
                prop:value=value
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, text)| {
                            let is_selected = option_value == selected;
                            view! { <option value=option_value selected=is_selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Options of the commission status filter
pub fn comissao_status_options(paid: &str, pending: &str) -> Vec<(String, String)> {
    vec![
        (String::new(), "Todos".to_string()),
        ("true".to_string(), paid.to_string()),
        ("false".to_string(), pending.to_string()),
    ]
}
