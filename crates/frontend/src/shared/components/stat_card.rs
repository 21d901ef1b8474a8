use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Success,
    Warning,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    tone: Option<StatTone>,
) -> impl IntoView {
    let class = match tone.unwrap_or(StatTone::Neutral) {
        StatTone::Neutral => "stat-card",
        StatTone::Success => "stat-card stat-card--success",
        StatTone::Warning => "stat-card stat-card--warning",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "-".to_string())}
                </div>
            </div>
        </div>
    }
}
