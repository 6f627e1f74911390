pub mod config;
pub mod export;
pub mod payload;
pub mod request;

pub use config::{ConfigError, QrConfig, DEFAULT_QR_CONFIG};
pub use export::{export_file_name, print_label, print_page_markup};
pub use payload::{compose_payload, table_chat_message};
pub use request::{QrMode, QrRequest};

use crate::usecases::common::UseCaseMetadata;

pub struct QrGenerator;

impl UseCaseMetadata for QrGenerator {
    fn usecase_index() -> &'static str {
        "u510"
    }

    fn usecase_name() -> &'static str {
        "qr_generator"
    }

    fn display_name() -> &'static str {
        "Generador de códigos QR"
    }

    fn description() -> &'static str {
        "Códigos QR para mesas, menú digital, WiFi y enlaces promocionales"
    }
}
