//! Naming and markup for the PNG export and print actions

use super::request::{QrMode, QrRequest};
use chrono::NaiveDate;

/// Download name in the form `qr-<mode>-<value>.png`.
///
/// The value part is the table number in table mode and `custom`
/// otherwise or when the table number is empty. Characters that are not
/// safe in file names are replaced with `_`.
pub fn export_file_name(request: &QrRequest) -> String {
    let mode = request.mode.map(|m| m.as_str()).unwrap_or("unknown");
    let value = match request.mode {
        Some(QrMode::Table) if !request.table_number.trim().is_empty() => {
            sanitize_file_part(request.table_number.trim())
        }
        _ => "custom".to_string(),
    };
    format!("qr-{}-{}.png", mode, value)
}

/// Caption printed under the QR code
pub fn print_label(request: &QrRequest) -> String {
    match request.mode {
        Some(QrMode::Table) => format!("Mesa {}", request.table_number),
        Some(QrMode::DigitalMenu) => "Menú digital".to_string(),
        Some(QrMode::Wifi) => format!("WiFi: {}", request.wifi_ssid),
        Some(QrMode::Custom) => "Enlace personalizado".to_string(),
        None => String::new(),
    }
}

/// Inner markup of the `<html>` element of the print window.
///
/// `qr_markup` is inserted as-is (it is the generated SVG); the label is
/// HTML-escaped.
pub fn print_page_markup(qr_markup: &str, label: &str, printed_on: NaiveDate) -> String {
    format!(
        "<head>\
         <meta charset=\"utf-8\">\
         <title>Imprimir QR - {label}</title>\
         <style>\
         body {{ font-family: sans-serif; display: flex; flex-direction: column; \
         align-items: center; justify-content: center; min-height: 100vh; margin: 0; }}\
         .qr-print__label {{ font-size: 24px; font-weight: bold; margin-top: 16px; }}\
         .qr-print__date {{ font-size: 12px; color: #666; margin-top: 8px; }}\
         </style>\
         </head>\
         <body>\
         <div class=\"qr-print__code\">{qr_markup}</div>\
         <div class=\"qr-print__label\">{label}</div>\
         <div class=\"qr-print__date\">{date}</div>\
         </body>",
        label = escape_html(label),
        qr_markup = qr_markup,
        date = printed_on.format("%d/%m/%Y"),
    )
}

fn sanitize_file_part(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_table() {
        let mut req = QrRequest::with_mode(QrMode::Table);
        req.table_number = "5".to_string();
        assert_eq!(export_file_name(&req), "qr-table-5.png");

        req.table_number = "12/B".to_string();
        assert_eq!(export_file_name(&req), "qr-table-12_B.png");

        req.table_number = String::new();
        assert_eq!(export_file_name(&req), "qr-table-custom.png");
    }

    #[test]
    fn test_export_file_name_other_modes() {
        assert_eq!(
            export_file_name(&QrRequest::with_mode(QrMode::Custom)),
            "qr-custom-custom.png"
        );
        assert_eq!(
            export_file_name(&QrRequest::with_mode(QrMode::Wifi)),
            "qr-wifi-custom.png"
        );
        assert_eq!(
            export_file_name(&QrRequest::with_mode(QrMode::DigitalMenu)),
            "qr-digitalMenu-custom.png"
        );
    }

    #[test]
    fn test_print_label() {
        let mut req = QrRequest::with_mode(QrMode::Table);
        req.table_number = "7".to_string();
        assert_eq!(print_label(&req), "Mesa 7");

        let mut wifi = QrRequest::with_mode(QrMode::Wifi);
        wifi.wifi_ssid = "Net".to_string();
        assert_eq!(print_label(&wifi), "WiFi: Net");
    }

    #[test]
    fn test_print_page_markup() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let html = print_page_markup("<svg></svg>", "Mesa <5>", date);
        assert!(html.contains("<div class=\"qr-print__code\"><svg></svg></div>"));
        assert!(html.contains("Mesa &lt;5&gt;"));
        assert!(!html.contains("Mesa <5>"));
        assert!(html.contains("15/03/2024"));
    }
}
