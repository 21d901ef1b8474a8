use leptos::prelude::*;

/// Labelled native date picker
/// Browser displays the date in its locale format (dd/mm/yyyy for pt-BR)
#[component]
pub fn DateInput(
    label: &'static str,
    /// The date value in yyyy-mm-dd format, empty for none
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <input
                type="date"
                class="form-input"
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </label>
    }
}
