//! Runtime configuration of the QR generator.
//!
//! Search order:
//! 1. `<script type="application/toml" id="app-config">` in index.html
//! 2. Embedded default (`DEFAULT_QR_CONFIG`)

use contracts::usecases::u510_qr_generator::QrConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

pub fn load_qr_config() -> QrConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match inline {
        Some(contents) if !contents.trim().is_empty() => resolve_config(&contents),
        _ => {
            log::info!("Using default embedded QR configuration");
            QrConfig::default()
        }
    }
}

/// Parses page-supplied TOML, falling back to the defaults on error
fn resolve_config(contents: &str) -> QrConfig {
    match QrConfig::from_toml_str(contents) {
        Ok(config) => {
            log::info!("Loaded QR configuration from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("{}; using default embedded configuration", e);
            QrConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_valid_config() {
        let contents = r#"
[chat]
phone = "34600111222"

[menu]
fallback_url = "https://carta.example.com"

[render]
preview_size_px = 200
export_size_px = 800
"#;
        let config = resolve_config(contents);
        assert_eq!(config.chat.phone, "34600111222");
        assert_eq!(config.render.preview_size_px, 200);
    }

    #[test]
    fn test_resolve_invalid_config_falls_back() {
        assert_eq!(resolve_config("[chat]\nphone = 5"), QrConfig::default());
    }
}
