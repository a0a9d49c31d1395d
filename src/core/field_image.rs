//! Feldbild-Loader für den Hintergrund der Zeichenfläche.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView};

/// Dekodiertes Feldbild als RGBA8-Puffer.
#[derive(Clone)]
pub struct FieldImage {
    /// Quellpfad (für Logging und Texturnamen)
    path: String,
    /// Breite und Höhe in Pixeln
    size: [usize; 2],
    /// RGBA8-Pixel, zeilenweise
    rgba: Vec<u8>,
}

impl FieldImage {
    /// Lädt ein Feldbild (PNG/JPEG) von der Platte.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Feldbild konnte nicht geladen werden: {}", path))?;
        let field_image = Self::from_image(image, path);
        log::info!(
            "Feldbild geladen: {} ({}x{})",
            path,
            field_image.size[0],
            field_image.size[1]
        );
        Ok(field_image)
    }

    /// Übernimmt ein bereits dekodiertes Bild.
    pub fn from_image(image: DynamicImage, path: &str) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.to_string(),
            size: [width as usize, height as usize],
            rgba: image.into_rgba8().into_raw(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Breite und Höhe in Pixeln.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// RGBA8-Pixeldaten.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

impl std::fmt::Debug for FieldImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldImage")
            .field("path", &self.path)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
