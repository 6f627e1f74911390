use crate::layout::global_context::AppGlobalContext;
use crate::shared::alert::show_alert;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::export::download_bytes;
use crate::shared::print::print_in_new_window;
use crate::usecases::u510_qr_generator::render::{render_png, render_svg};
use chrono::Local;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u510_qr_generator::{
    compose_payload, export_file_name, print_label, print_page_markup, QrConfig, QrGenerator,
    QrMode, QrRequest,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const COPIED_FEEDBACK_MS: u32 = 2_000;

/// Tracks the "copied" indicator across overlapping clicks: only the timer
/// of the latest copy may clear it.
#[derive(Debug, Default, Clone, Copy)]
struct CopyFeedback {
    generation: u32,
}

impl CopyFeedback {
    /// Registers a new copy and returns its ticket
    fn start(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn is_latest(&self, ticket: u32) -> bool {
        self.generation == ticket
    }
}

/// ViewModel of the QR generator page
///
/// - `form` holds the current `QrRequest`; the payload is derived from it
///   on every read, never stored.
/// - Commands: export PNG, print, copy payload.
#[derive(Clone, Copy)]
pub struct QrGeneratorViewModel {
    pub form: RwSignal<QrRequest>,
    pub copied: RwSignal<bool>,
    copy_feedback: StoredValue<CopyFeedback>,
    config: StoredValue<QrConfig>,
}

impl QrGeneratorViewModel {
    pub fn new(config: QrConfig) -> Self {
        Self {
            form: RwSignal::new(QrRequest::default()),
            copied: RwSignal::new(false),
            copy_feedback: StoredValue::new(CopyFeedback::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn preview_size(&self) -> u32 {
        self.config.with_value(|c| c.render.preview_size_px)
    }

    pub fn fallback_menu_url(&self) -> String {
        self.config.with_value(|c| c.menu.fallback_url.clone())
    }

    /// Current payload (tracked)
    pub fn payload(&self) -> String {
        let config = self.config;
        self.form
            .with(|request| config.with_value(|c| compose_payload(request, c)))
    }

    pub fn label(&self) -> String {
        self.form.with(print_label)
    }

    pub fn mode(&self) -> Option<QrMode> {
        self.form.with(|f| f.mode)
    }

    /// Applies a mode chosen in the selector; unknown names clear the mode
    pub fn set_mode(&self, value: &str) {
        let mode = QrMode::parse(value);
        if mode.is_none() {
            log::warn!("Unsupported QR mode selected: {}", value);
        } else {
            log::debug!("QR mode changed to {}", value);
        }
        self.form.update(|f| f.mode = mode);
    }

    /// Restores the last form values kept in the global context and keeps
    /// them updated while the page lives.
    pub fn bind_form_state(&self, ctx: AppGlobalContext) {
        let key = QrGenerator::full_name();
        if let Some(saved) = ctx.get_form_state(&key) {
            match serde_json::from_value::<QrRequest>(saved) {
                Ok(request) => self.form.set(request),
                Err(e) => log::warn!("Discarding saved QR form state: {}", e),
            }
        }

        let form = self.form;
        Effect::new(move |_| {
            let request = form.get();
            match serde_json::to_value(&request) {
                Ok(value) => ctx.set_form_state(key.clone(), value),
                Err(e) => log::warn!("Failed to save QR form state: {}", e),
            }
        });
    }

    /// Renders the current payload to PNG and downloads it
    pub fn export_png_command(&self) {
        let request = self.form.get_untracked();
        let file_name = export_file_name(&request);
        let (payload, size) = self.config.with_value(|c| {
            (compose_payload(&request, c), c.render.export_size_px)
        });

        let result = render_png(&payload, size)
            .map_err(|e| e.to_string())
            .and_then(|bytes| download_bytes(&bytes, "image/png", &file_name));

        match result {
            Ok(()) => log::info!("QR exported as {}", file_name),
            Err(e) => {
                log::error!("QR export failed: {}", e);
                show_alert(&format!("Error al descargar el código QR: {}", e));
            }
        }
    }

    /// Opens the print dialog with the QR code and its label
    pub fn print_command(&self) {
        let request = self.form.get_untracked();
        let (payload, size) = self.config.with_value(|c| {
            (compose_payload(&request, c), c.render.preview_size_px)
        });

        let result = render_svg(&payload, size)
            .map_err(|e| e.to_string())
            .and_then(|svg| {
                let markup =
                    print_page_markup(&svg, &print_label(&request), Local::now().date_naive());
                print_in_new_window(&markup)
            });

        if let Err(e) = result {
            log::error!("QR print failed: {}", e);
            show_alert(&format!("Error al imprimir el código QR: {}", e));
        }
    }

    /// Copies the payload; `copied` stays true for a short moment
    pub fn copy_command(&self) {
        let payload = self.config.with_value(|c| {
            self.form.with_untracked(|request| compose_payload(request, c))
        });
        if payload.is_empty() {
            return;
        }

        let copied = self.copied;
        let feedback = self.copy_feedback;
        copy_to_clipboard_with_callback(&payload, move || {
            let mut state = feedback.get_value();
            let ticket = state.start();
            feedback.set_value(state);
            copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                if feedback.with_value(|f| f.is_latest(ticket)) {
                    copied.set(false);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_feedback_latest_click_wins() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.start();
        let second = feedback.start();

        // First timer fires while the second copy is still showing
        assert!(!feedback.is_latest(first));
        assert!(feedback.is_latest(second));
    }
}
