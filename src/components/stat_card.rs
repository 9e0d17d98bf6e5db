//! Aggregate metric card used on the dashboard and analytics overviews.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    /// BEM accent modifier, e.g. `"stat-card--views"`.
    #[prop(optional)]
    accent: &'static str,
) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_owned()
    } else {
        format!("stat-card {accent}")
    };
    view! {
        <div class=class>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
