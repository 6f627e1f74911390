use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the binary
pub const DEFAULT_QR_CONFIG: &str = r#"
[chat]
phone = "5215512345678"

[menu]
fallback_url = "https://menu.turestaurante.com"

[render]
preview_size_px = 256
export_size_px = 1024
"#;

const PREVIEW_SIZE_RANGE: std::ops::RangeInclusive<u32> = 64..=1024;
const EXPORT_SIZE_RANGE: std::ops::RangeInclusive<u32> = 64..=4096;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid QR configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Chat phone must contain digits only, got {0:?}")]
    InvalidPhone(String),
    #[error("Fallback menu URL must not be empty")]
    EmptyFallbackUrl,
    #[error("Preview size {0}px is outside 64..=1024")]
    PreviewSizeOutOfRange(u32),
    #[error("Export size {0}px is outside 64..=4096")]
    ExportSizeOutOfRange(u32),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QrConfig {
    pub chat: ChatConfig,
    pub menu: MenuConfig,
    pub render: RenderConfig,
}

/// Chat account that receives the table messages
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    /// International number without `+` or separators
    pub phone: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MenuConfig {
    /// Used by the digital menu mode when no URL was entered
    pub fallback_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    pub preview_size_px: u32,
    /// Minimum edge of the exported PNG
    pub export_size_px: u32,
}

impl Default for QrConfig {
    /// The embedded `DEFAULT_QR_CONFIG`
    fn default() -> Self {
        Self::from_toml_str(DEFAULT_QR_CONFIG)
            .expect("DEFAULT_QR_CONFIG must be a valid QR configuration")
    }
}

impl QrConfig {
    /// Parses and validates a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: QrConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let phone = &self.chat.phone;
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidPhone(phone.clone()));
        }
        if self.menu.fallback_url.trim().is_empty() {
            return Err(ConfigError::EmptyFallbackUrl);
        }
        if !PREVIEW_SIZE_RANGE.contains(&self.render.preview_size_px) {
            return Err(ConfigError::PreviewSizeOutOfRange(
                self.render.preview_size_px,
            ));
        }
        if !EXPORT_SIZE_RANGE.contains(&self.render.export_size_px) {
            return Err(ConfigError::ExportSizeOutOfRange(
                self.render.export_size_px,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = QrConfig::default();
        assert_eq!(config.chat.phone, "5215512345678");
        assert_eq!(config.menu.fallback_url, "https://menu.turestaurante.com");
        assert_eq!(config.render.preview_size_px, 256);
        assert_eq!(config.render.export_size_px, 1024);
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let contents = DEFAULT_QR_CONFIG.replace("5215512345678", "+52 55 1234");
        assert!(matches!(
            QrConfig::from_toml_str(&contents),
            Err(ConfigError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_preview_size_range() {
        let contents = DEFAULT_QR_CONFIG.replace("preview_size_px = 256", "preview_size_px = 32");
        assert!(matches!(
            QrConfig::from_toml_str(&contents),
            Err(ConfigError::PreviewSizeOutOfRange(32))
        ));
    }

    #[test]
    fn test_export_size_range() {
        for size in [0u32, 4_000_000_000] {
            let contents = DEFAULT_QR_CONFIG
                .replace("export_size_px = 1024", &format!("export_size_px = {}", size));
            assert!(matches!(
                QrConfig::from_toml_str(&contents),
                Err(ConfigError::ExportSizeOutOfRange(s)) if s == size
            ));
        }

        let contents = DEFAULT_QR_CONFIG.replace("export_size_px = 1024", "export_size_px = 4096");
        assert!(QrConfig::from_toml_str(&contents).is_ok());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let contents = "[chat]\nphone = \"123\"\n";
        assert!(matches!(
            QrConfig::from_toml_str(contents),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let contents =
            DEFAULT_QR_CONFIG.replace("https://menu.turestaurante.com", "  ");
        assert!(matches!(
            QrConfig::from_toml_str(&contents),
            Err(ConfigError::EmptyFallbackUrl)
        ));
    }
}
