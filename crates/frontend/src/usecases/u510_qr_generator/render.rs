use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::QrCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrRenderError {
    #[error("Nothing to encode: the QR payload is empty")]
    EmptyPayload,
    #[error("Payload cannot be encoded as a QR code: {0}")]
    Encode(#[from] QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

fn encode(payload: &str) -> Result<QrCode, QrRenderError> {
    if payload.is_empty() {
        return Err(QrRenderError::EmptyPayload);
    }
    Ok(QrCode::new(payload.as_bytes())?)
}

/// Renders the payload as an inline `<svg>` element at least `size_px` wide
pub fn render_svg(payload: &str, size_px: u32) -> Result<String, QrRenderError> {
    let code = encode(payload)?;
    let document = code
        .render::<svg::Color>()
        .min_dimensions(size_px, size_px)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    // Drop the XML prolog so the markup can be embedded into HTML.
    Ok(match document.find("<svg") {
        Some(start) => document[start..].to_string(),
        None => document,
    })
}

/// Renders the payload as PNG bytes at least `size_px` wide
pub fn render_png(payload: &str, size_px: u32) -> Result<Vec<u8>, QrRenderError> {
    let code = encode(payload)?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size_px, size_px)
        .build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut bytes, ImageOutputFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_render_svg_is_embeddable() {
        let svg = render_svg("WIFI:T:WPA;S:Net;P:pass123;;", 256).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_render_png() {
        let bytes = render_png("https://menu.turestaurante.com", 512).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.width() >= 512);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert!(matches!(render_svg("", 256), Err(QrRenderError::EmptyPayload)));
        assert!(matches!(render_png("", 256), Err(QrRenderError::EmptyPayload)));
    }

    #[test]
    fn test_too_long_payload_fails() {
        let payload = "x".repeat(4_000);
        assert!(matches!(
            render_png(&payload, 256),
            Err(QrRenderError::Encode(_))
        ));
    }
}
