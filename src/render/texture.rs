//! Texture-Utilities: Feldbild als egui-Textur.

use crate::core::FieldImage;
use eframe::egui;

/// Lädt ein Feldbild als egui-Textur hoch.
pub fn create_texture_from_field_image(
    ctx: &egui::Context,
    image: &FieldImage,
) -> egui::TextureHandle {
    let [width, height] = image.size();
    log::debug!(
        "Erstelle Feldbild-Textur '{}': {}x{} Pixel",
        image.path(),
        width,
        height
    );

    let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), image.rgba());
    ctx.load_texture("field_image", color_image, egui::TextureOptions::LINEAR)
}
