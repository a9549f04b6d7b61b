//! QR code rasterizing.

use egui::{Color32, ColorImage};
use thiserror::Error;

/// The QR renderer failed. Encoding errors come from the `qrcode` crate,
/// typically when the payload exceeds QR capacity.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Rasterize `data` into a QR code image of roughly `size` pixels.
///
/// Returns a `ColorImage` that can be loaded as a texture in egui.
pub fn render_qr_image(data: &str, size: usize) -> Result<ColorImage, RenderError> {
    let code = qrcode::QrCode::new(data.as_bytes())?;
    let qr_width = code.width();

    // Scale factor to fit the desired size (minimum scale of 1)
    let scale = (size / qr_width).max(1);
    let actual_size = qr_width * scale;

    let mut pixels = vec![Color32::WHITE; actual_size * actual_size];

    for (y, row) in code.to_colors().chunks(qr_width).enumerate() {
        for (x, color) in row.iter().enumerate() {
            let pixel_color = match color {
                qrcode::Color::Dark => Color32::BLACK,
                qrcode::Color::Light => Color32::WHITE,
            };

            // Fill scaled pixels
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = x * scale + dx;
                    let py = y * scale + dy;
                    if px < actual_size && py < actual_size {
                        pixels[py * actual_size + px] = pixel_color;
                    }
                }
            }
        }
    }

    Ok(ColorImage::new([actual_size, actual_size], pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_square_image_at_least_requested_size() {
        let image = render_qr_image("https://example.com", 200).expect("should encode");
        assert_eq!(image.size[0], image.size[1]);
        assert!(image.size[0] >= 21); // Smallest QR version is 21 modules.
    }

    #[test]
    fn small_payload_scales_up() {
        let image = render_qr_image("hi", 200).expect("should encode");
        assert!(image.size[0] >= 180, "expected scaled image, got {}", image.size[0]);
    }

    #[test]
    fn oversized_payload_fails_with_encode_error() {
        let payload = "x".repeat(8000); // Beyond max QR capacity.
        let err = render_qr_image(&payload, 200).expect_err("should exceed capacity");
        assert!(matches!(err, RenderError::Encode(_)));
    }
}
