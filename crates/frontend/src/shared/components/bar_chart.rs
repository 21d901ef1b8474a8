use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Text shown next to the bar
    pub display: String,
}

/// Bar widths in percent of the largest value; all zero when nothing is positive
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v.max(0.0) / max * 100.0).clamp(0.0, 100.0))
        .collect()
}

/// Shares of a total in percent, for stacked bars
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v.max(0.0) / total * 100.0).collect()
}

/// Horizontal bar chart drawn with plain divs
#[component]
pub fn BarChart(
    title: &'static str,
    #[prop(into)] data: Signal<Vec<BarDatum>>,
    #[prop(optional)] color: Option<&'static str>,
) -> impl IntoView {
    let color = color.unwrap_or("#3b82f6");
    let rows = move || {
        let data = data.get();
        let widths = bar_widths(&data.iter().map(|d| d.value).collect::<Vec<_>>());
        data.into_iter()
            .zip(widths)
            .map(|(d, width)| {
                view! {
                    <div class="bar-chart__row">
                        <div class="bar-chart__label" title=d.label.clone()>{d.label.clone()}</div>
                        <div class="bar-chart__track">
                            <div
                                class="bar-chart__bar"
                                style=format!("width: {:.1}%; background: {};", width, color)
                            ></div>
                        </div>
                        <div class="bar-chart__value">{d.display}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <Show
                when=move || data.with(|d| !d.is_empty())
                fallback=|| view! { <div class="empty-state">"Sem dados para exibir"</div> }
            >
                <div class="bar-chart">{rows}</div>
            </Show>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub display: String,
    pub color: &'static str,
}

/// Single stacked bar with a legend, for part-of-whole figures
#[component]
pub fn ProportionChart(title: &'static str, #[prop(into)] data: Signal<Vec<Slice>>) -> impl IntoView {
    let segments = move || {
        let data = data.get();
        let pct = shares(&data.iter().map(|s| s.value).collect::<Vec<_>>());
        data.into_iter()
            .zip(pct)
            .filter(|(_, p)| *p > 0.0)
            .map(|(s, p)| {
                view! {
                    <div
                        class="proportion-chart__segment"
                        style=format!("width: {:.1}%; background: {};", p, s.color)
                        title=format!("{}: {:.1}%", s.label, p)
                    ></div>
                }
            })
            .collect_view()
    };
    let legend = move || {
        data.get()
            .into_iter()
            .map(|s| {
                view! {
                    <div class="proportion-chart__legend-item">
                        <span class="proportion-chart__swatch" style=format!("background: {};", s.color)></span>
                        <span>{s.label}</span>
                        <strong>{s.display}</strong>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <div class="proportion-chart">{segments}</div>
            <div class="proportion-chart__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_widths_relative_to_max() {
        assert_eq!(bar_widths(&[50.0, 100.0, 0.0]), vec![50.0, 100.0, 0.0]);
        assert_eq!(bar_widths(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_widths(&[]).is_empty());
    }

    #[test]
    fn test_shares() {
        assert_eq!(shares(&[30.0, 10.0]), vec![75.0, 25.0]);
        assert_eq!(shares(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
