use crate::usecases::u510_qr_generator::render::{render_svg, QrRenderError};
use leptos::prelude::*;

/// Live QR preview; re-renders whenever `payload` changes
#[component]
pub fn QrCodeView(
    #[prop(into)]
    payload: Signal<String>,
    /// Minimum edge of the preview in pixels
    size_px: u32,
) -> impl IntoView {
    let content = move || match render_svg(&payload.get(), size_px) {
        Ok(svg) => view! { <div class="qr-preview__code" inner_html=svg></div> }.into_any(),
        Err(QrRenderError::EmptyPayload) => view! {
            <div class="qr-preview__placeholder">"Completa los datos para generar el código"</div>
        }
        .into_any(),
        Err(e) => {
            log::warn!("QR preview failed: {}", e);
            view! { <div class="qr-preview__error">{e.to_string()}</div> }.into_any()
        }
    };

    view! {
        <div class="qr-preview" style:min-width=format!("{}px", size_px)>
            {content}
        </div>
    }
}
