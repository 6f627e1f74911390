use crate::shared::icons::icon;
use leptos::prelude::*;

/// Button with a leading icon. Variants: "primary" (default), "secondary".
#[component]
pub fn ActionButton(
    icon_name: &'static str,
    #[prop(optional)]
    secondary: bool,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    let class = if secondary {
        "button button--secondary"
    } else {
        "button button--primary"
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |ev| on_click.run(ev)
        >
            {icon(icon_name)}
            <span>{children()}</span>
        </button>
    }
}
