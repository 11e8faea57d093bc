use crate::errors::RenderError;
use crate::models::{BRAND_BLUE, CLEAR, COLOR_ICON, IconSpec, OPAQUE_WHITE, OUTLINE_ICON, WHITE};
use crate::utils::{file_digest, stroke_rect};
use image::{ImageBuffer, ImageFormat, Pixel, RgbImage, RgbaImage};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Directory both icons are written to, relative to the working directory.
pub const OUTPUT_DIR: &str = "appPackage";

fn draw_icon<P: Pixel>(spec: &IconSpec, background: P, ink: P) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut canvas = ImageBuffer::from_pixel(spec.size, spec.size, background);
    stroke_rect(&mut canvas, spec.frame, spec.frame_width, ink);
    for button in spec.buttons() {
        debug!("{}: button {:?}", spec.file_name, button);
        stroke_rect(&mut canvas, button, spec.button_width, ink);
    }
    canvas
}

/// Opaque 192x192 calculator on the brand blue.
pub fn draw_color_icon() -> RgbImage {
    draw_icon(&COLOR_ICON, BRAND_BLUE, WHITE)
}

/// 32x32 white calculator outline on a transparent background.
pub fn draw_outline_icon() -> RgbaImage {
    draw_icon(&OUTLINE_ICON, CLEAR, OPAQUE_WHITE)
}

fn finish(spec: &IconSpec, path: &Path) -> Result<(), RenderError> {
    info!("wrote {} ({}x{})", path.display(), spec.size, spec.size);
    debug!("{} sha256 {}", spec.file_name, file_digest(path)?);
    println!("Created {}", spec.file_name);
    Ok(())
}

pub fn render_color_icon(out_dir: &Path) -> Result<PathBuf, RenderError> {
    let path = out_dir.join(COLOR_ICON.file_name);
    draw_color_icon()
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| RenderError::Image {
            path: path.clone(),
            source,
        })?;
    finish(&COLOR_ICON, &path)?;
    Ok(path)
}

pub fn render_outline_icon(out_dir: &Path) -> Result<PathBuf, RenderError> {
    let path = out_dir.join(OUTLINE_ICON.file_name);
    draw_outline_icon()
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| RenderError::Image {
            path: path.clone(),
            source,
        })?;
    finish(&OUTLINE_ICON, &path)?;
    Ok(path)
}

/// Renders the color icon, then the outline icon. The first failure stops the run.
pub fn run(out_dir: &Path) -> Result<(), RenderError> {
    render_color_icon(out_dir)?;
    render_outline_icon(out_dir)?;
    println!("Icons created successfully!");
    Ok(())
}
