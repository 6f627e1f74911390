use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::sections::render_section_content;
use crate::layout::Shell;
use crate::shared::config::load_qr_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(ctx);

    // QR settings are read once at startup and shared read-only.
    provide_context(load_qr_config());

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any()>
            {move || ctx.active.with(|key| render_section_content(key))}
        </Shell>
    }
}
