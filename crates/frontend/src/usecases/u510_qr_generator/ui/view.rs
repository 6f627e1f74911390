use super::qr_code_view::QrCodeView;
use super::view_model::QrGeneratorViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ActionButton, SelectField, TextField};
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u510_qr_generator::{QrConfig, QrGenerator, QrMode, QrRequest};
use leptos::prelude::*;

#[component]
pub fn QrGeneratorPage() -> impl IntoView {
    let config = use_context::<QrConfig>().unwrap_or_default();
    let vm = QrGeneratorViewModel::new(config);
    if let Some(ctx) = use_context::<AppGlobalContext>() {
        vm.bind_form_state(ctx);
    }

    let payload = Signal::derive(move || vm.payload());
    let is_empty = Signal::derive(move || payload.with(|p| p.is_empty()));
    // Only the mode decides which fields exist; typing must not rebuild them.
    let mode = Memo::new(move |_| vm.mode());
    let mode_value = Signal::derive(move || {
        mode.get().map(|m| m.as_str()).unwrap_or_default().to_string()
    });
    let mode_options: Vec<(&'static str, &'static str)> =
        QrMode::ALL.iter().map(|m| (m.as_str(), m.label())).collect();

    view! {
        <PageFrame page_id=page_id(&QrGenerator::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h1 class="page__title">{QrGenerator::display_name()}</h1>
                <p class="page__subtitle">{QrGenerator::description()}</p>
            </div>

            <div class="page__content qr-generator">
                <div class="card qr-generator__form">
                    <SelectField
                        label="Tipo de código"
                        id="qr-mode"
                        value=mode_value
                        on_change=Callback::new(move |v: String| vm.set_mode(&v))
                        options=mode_options
                    />
                    {move || mode_fields(vm, mode.get())}
                </div>

                <div class="card qr-generator__preview">
                    <QrCodeView payload=payload size_px=vm.preview_size() />
                    <div class="qr-generator__label">{move || vm.label()}</div>
                    <code class="qr-generator__payload">{move || payload.get()}</code>

                    <div class="qr-generator__actions">
                        <ActionButton
                            icon_name="download"
                            disabled=is_empty
                            on_click=Callback::new(move |_| vm.export_png_command())
                        >
                            "Descargar PNG"
                        </ActionButton>
                        <ActionButton
                            icon_name="printer"
                            secondary=true
                            disabled=is_empty
                            on_click=Callback::new(move |_| vm.print_command())
                        >
                            "Imprimir"
                        </ActionButton>
                        <ActionButton
                            icon_name="copy"
                            secondary=true
                            disabled=is_empty
                            on_click=Callback::new(move |_| vm.copy_command())
                        >
                            {move || if vm.copied.get() { "¡Copiado!" } else { "Copiar contenido" }}
                        </ActionButton>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

/// Input fields relevant for the selected mode
fn mode_fields(vm: QrGeneratorViewModel, mode: Option<QrMode>) -> AnyView {
    let form = vm.form;
    let field = move |get: fn(&QrRequest) -> String| Signal::derive(move || form.with(get));

    match mode {
        Some(QrMode::Table) => view! {
            <TextField
                label="Número de mesa"
                id="qr-table-number"
                value=field(|f| f.table_number.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.table_number = v))
                placeholder="5"
            />
        }
        .into_any(),
        Some(QrMode::DigitalMenu) => {
            let hint = format!("Si se deja vacío se usa {}", vm.fallback_menu_url());
            view! {
                <TextField
                    label="URL del menú"
                    id="qr-menu-url"
                    value=field(|f| f.destination_url.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.destination_url = v))
                    placeholder="https://"
                    input_type="url"
                />
                <div class="form__hint">{hint}</div>
            }
            .into_any()
        }
        Some(QrMode::Wifi) => view! {
            <TextField
                label="Nombre de la red (SSID)"
                id="qr-wifi-ssid"
                value=field(|f| f.wifi_ssid.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.wifi_ssid = v))
            />
            <TextField
                label="Contraseña"
                id="qr-wifi-password"
                value=field(|f| f.wifi_password.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.wifi_password = v))
                input_type="password"
                hint="No uses los caracteres ; : , en la red ni en la contraseña"
            />
        }
        .into_any(),
        Some(QrMode::Custom) => view! {
            <TextField
                label="Enlace"
                id="qr-custom-url"
                value=field(|f| f.destination_url.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.destination_url = v))
                placeholder="https://"
                input_type="url"
            />
        }
        .into_any(),
        None => view! {
            <div class="form__hint">"Selecciona un tipo de código"</div>
        }
        .into_any(),
    }
}
