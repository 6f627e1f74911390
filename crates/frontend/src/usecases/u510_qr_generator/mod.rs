//! QR generator UI
//!
//! - render.rs: payload → SVG (preview, print) and PNG (download)
//! - ui/view_model.rs: form state and commands (export, print, copy)
//! - ui/view.rs: page component
//! - ui/qr_code_view.rs: preview widget

pub mod render;
pub mod ui;
