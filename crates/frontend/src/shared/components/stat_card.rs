use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline figure card used on dashboards
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Accent color (CSS), e.g. the branch color
    #[prop(into, optional)]
    accent: Signal<Option<String>>,
) -> impl IntoView {
    let accent_style = move || {
        accent
            .get()
            .map(|c| format!("border-left: 4px solid {};", c))
            .unwrap_or_default()
    };

    view! {
        <div class="stat-card" style=accent_style>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
