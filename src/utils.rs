use crate::errors::RenderError;
use crate::models::Rect;
use image::{ImageBuffer, Pixel};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Strokes the outline of `rect` onto the canvas, `width` pixels thick, growing inward.
/// Parts of the box outside the canvas are skipped.
pub fn stroke_rect<P: Pixel>(
    canvas: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    rect: Rect,
    width: u32,
    color: P,
) {
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if rect.on_stroke(x, y, width) {
            *pixel = color;
        }
    }
}

/// Calculates the SHA256 hash of a written file.
pub fn file_digest(path: &Path) -> Result<String, RenderError> {
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(io_err)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 8192]; // 8KB buffer
    loop {
        let bytes_read = file.read(&mut buffer).map_err(io_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
