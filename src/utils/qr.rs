//! QR code rendering for short links.
//!
//! Produces the PNG blob that `UrlService::create_url` uploads to the `qrs`
//! bucket. Kept as a free function so callers that already have a QR image
//! (e.g. one rendered client-side) can skip it entirely.

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};

use crate::error::AppError;

/// Pixels per QR module.
const MODULE_SIZE: u32 = 8;

/// Quiet-zone border, in modules, as required by the QR spec.
const QUIET_ZONE: u32 = 4;

/// Renders `data` as a black-on-white QR code and encodes it as PNG bytes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the data cannot be encoded as a QR
/// code (e.g. it exceeds the maximum QR payload) or the PNG encoder fails.
pub fn generate_png(data: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::validation(format!("QR encoding failed: {e}")))?;

    let width = code.width() as u32;
    let colors = code.to_colors();
    let side = (width + 2 * QUIET_ZONE) * MODULE_SIZE;

    let image = GrayImage::from_fn(side, side, |x, y| {
        let mx = x / MODULE_SIZE;
        let my = y / MODULE_SIZE;

        let dark = mx >= QUIET_ZONE
            && my >= QUIET_ZONE
            && mx - QUIET_ZONE < width
            && my - QUIET_ZONE < width
            && colors[((my - QUIET_ZONE) * width + (mx - QUIET_ZONE)) as usize] == Color::Dark;

        if dark { Luma([0u8]) } else { Luma([255u8]) }
    });

    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| AppError::validation(format!("QR PNG encoding failed: {e}")))?;

    Ok(buf)
}
