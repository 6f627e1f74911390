use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the QR code points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QrMode {
    /// Chat link announcing the table number
    Table,
    /// Digital menu URL
    DigitalMenu,
    /// WiFi credentials
    Wifi,
    /// Arbitrary promotional link
    Custom,
}

impl QrMode {
    pub const ALL: [QrMode; 4] = [
        QrMode::Table,
        QrMode::DigitalMenu,
        QrMode::Wifi,
        QrMode::Custom,
    ];

    /// Wire name, also used in export file names
    pub fn as_str(&self) -> &'static str {
        match self {
            QrMode::Table => "table",
            QrMode::DigitalMenu => "digitalMenu",
            QrMode::Wifi => "wifi",
            QrMode::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QrMode::Table => "Mesa",
            QrMode::DigitalMenu => "Menú digital",
            QrMode::Wifi => "WiFi",
            QrMode::Custom => "Enlace personalizado",
        }
    }

    /// Parses a wire name; unknown names give `None`
    pub fn parse(value: &str) -> Option<QrMode> {
        QrMode::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl fmt::Display for QrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QrMode::parse(s).ok_or_else(|| format!("Unknown QR mode: {}", s))
    }
}

/// Form state of the QR generator.
///
/// All fields are opaque strings; nothing is validated. `mode == None`
/// stands for a mode the composer does not recognise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRequest {
    pub mode: Option<QrMode>,
    pub table_number: String,
    pub destination_url: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
}

impl Default for QrRequest {
    fn default() -> Self {
        Self {
            mode: Some(QrMode::Table),
            table_number: "1".to_string(),
            destination_url: String::new(),
            wifi_ssid: String::new(),
            wifi_password: String::new(),
        }
    }
}

impl QrRequest {
    pub fn with_mode(mode: QrMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }
}
