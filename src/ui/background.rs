use std::path::Path;

use eframe::egui::ColorImage;
use log::warn;

/// Decodes the backdrop image file for upload as a texture. A missing
/// or undecodable file is not an error: the chat surface falls back to
/// its plain backdrop color.
pub fn load_background(path: &Path) -> Option<ColorImage> {
    let image = match image::open(path) {
        Ok(image) => image.to_rgba8(),
        Err(err) => {
            warn!(
                "Background image not found at path: {}. Using default background. ({err})",
                path.display()
            );
            return None;
        }
    };

    let (width, height) = image.dimensions();
    Some(ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        image.as_raw(),
    ))
}
