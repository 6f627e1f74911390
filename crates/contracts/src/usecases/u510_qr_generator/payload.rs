use super::config::QrConfig;
use super::request::{QrMode, QrRequest};

/// Message sent to the restaurant chat from a table QR code
pub fn table_chat_message(table_number: &str) -> String {
    format!("Hola, estoy en la Mesa {}, quiero ver el menú.", table_number)
}

/// Builds the string encoded into the QR image.
///
/// Total over its input: an unrecognised mode gives an empty payload.
/// WiFi credentials are inserted as-is; `;`, `:` and `,` in the SSID or
/// password are not escaped.
pub fn compose_payload(request: &QrRequest, config: &QrConfig) -> String {
    let Some(mode) = request.mode else {
        return String::new();
    };

    match mode {
        QrMode::Table => format!(
            "https://wa.me/{}?text={}",
            config.chat.phone,
            urlencoding::encode(&table_chat_message(&request.table_number))
        ),
        QrMode::DigitalMenu => {
            if request.destination_url.is_empty() {
                config.menu.fallback_url.clone()
            } else {
                request.destination_url.clone()
            }
        }
        QrMode::Wifi => format!(
            "WIFI:T:WPA;S:{};P:{};;",
            request.wifi_ssid, request.wifi_password
        ),
        QrMode::Custom => request.destination_url.clone(),
    }
}
