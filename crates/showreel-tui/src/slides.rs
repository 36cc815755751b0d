//! Slide images and their half-block rasters
//!
//! Images are decoded off the UI thread; until one arrives (or when it
//! fails) the slide is drawn as a tinted gradient with its caption.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};
use ratatui::style::Color;

use crate::content::PLACEHOLDER_SLIDES;
use crate::theme::mix;

const PLACEHOLDER_TINTS: [Color; 3] = [
    Color::Rgb(0x3a, 0x4a, 0x5c),
    Color::Rgb(0x5c, 0x4a, 0x3a),
    Color::Rgb(0x3a, 0x5c, 0x4a),
];

#[derive(Debug, Clone)]
pub enum SlideImage {
    /// No image configured; draw the placeholder
    None,
    Loading,
    Ready(DynamicImage),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub caption: String,
    pub path: Option<PathBuf>,
    pub image: SlideImage,
    pub tint: Color,
}

/// Cell colors for one rendered slide: `(top, bottom)` per cell, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u16,
    pub height: u16,
    cells: Vec<(Color, Color)>,
}

impl Raster {
    pub fn cell(&self, x: u16, y: u16) -> Option<(Color, Color)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// All slides shared by the carousels, hero and discover backgrounds
#[derive(Debug, Default)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    rasters: HashMap<(usize, u16, u16), Raster>,
}

impl SlideDeck {
    /// Build a deck from configured image paths, or the placeholder slides
    /// when none are configured
    pub fn from_paths(paths: &[PathBuf]) -> Self {
        let slides = if paths.is_empty() {
            PLACEHOLDER_SLIDES
                .iter()
                .enumerate()
                .map(|(i, caption)| Slide {
                    caption: caption.to_string(),
                    path: None,
                    image: SlideImage::None,
                    tint: PLACEHOLDER_TINTS[i % PLACEHOLDER_TINTS.len()],
                })
                .collect()
        } else {
            paths
                .iter()
                .enumerate()
                .map(|(i, path)| Slide {
                    caption: path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| format!("Slide {}", i + 1)),
                    path: Some(path.clone()),
                    image: SlideImage::Loading,
                    tint: PLACEHOLDER_TINTS[i % PLACEHOLDER_TINTS.len()],
                })
                .collect()
        };

        Self {
            slides,
            rasters: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slides still waiting for their image, with their paths
    pub fn pending_loads(&self) -> Vec<(usize, PathBuf)> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s.image, SlideImage::Loading))
            .filter_map(|(i, s)| s.path.clone().map(|p| (i, p)))
            .collect()
    }

    pub fn set_loaded(&mut self, index: usize, image: DynamicImage) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.image = SlideImage::Ready(image);
            self.rasters.retain(|(i, _, _), _| *i != index);
        }
    }

    pub fn set_failed(&mut self, index: usize, error: String) {
        if let Some(slide) = self.slides.get_mut(index) {
            tracing::warn!(slide = index, error = %error, "Slide image failed to load");
            slide.image = SlideImage::Failed(error);
        }
    }

    /// Raster of slide `index` filling `width` x `height` cells
    pub fn raster(&mut self, index: usize, width: u16, height: u16) -> Option<&Raster> {
        let slide = self.slides.get(index)?;
        let key = (index, width, height);
        if !self.rasters.contains_key(&key) {
            let raster = match &slide.image {
                SlideImage::Ready(image) => rasterize(image, width, height),
                _ => gradient(slide.tint, width, height),
            };
            self.rasters.insert(key, raster);
        }
        self.rasters.get(&key)
    }
}

/// Decode an image file. Runs on a blocking worker.
pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Scale `image` to cover the area (cropping the overflow) and pack two
/// vertical pixels into each cell
pub fn rasterize(image: &DynamicImage, width: u16, height: u16) -> Raster {
    let target_w = width.max(1) as u32;
    let target_h = (height.max(1) as u32) * 2;
    let (img_w, img_h) = image.dimensions();
    if img_w == 0 || img_h == 0 {
        return gradient(Color::Rgb(0, 0, 0), width, height);
    }

    let resized = image.resize_to_fill(target_w, target_h, image::imageops::FilterType::Triangle);
    let rgba = resized.to_rgba8();

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height as u32 {
        let y = row * 2;
        for x in 0..width as u32 {
            let top = rgba.get_pixel(x.min(rgba.width() - 1), y.min(rgba.height() - 1));
            let bottom = rgba.get_pixel(x.min(rgba.width() - 1), (y + 1).min(rgba.height() - 1));
            cells.push((
                Color::Rgb(top[0], top[1], top[2]),
                Color::Rgb(bottom[0], bottom[1], bottom[2]),
            ));
        }
    }

    Raster {
        width,
        height,
        cells,
    }
}

/// Vertical gradient from `tint` down to near-black
pub fn gradient(tint: Color, width: u16, height: u16) -> Raster {
    let rows = (height as u32 * 2).max(1) as f64;
    let shade = |y: u32| mix(tint, Color::Rgb(0x08, 0x08, 0x08), y as f64 / rows);

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height as u32 {
        let top = shade(row * 2);
        let bottom = shade(row * 2 + 1);
        cells.extend(std::iter::repeat((top, bottom)).take(width as usize));
    }

    Raster {
        width,
        height,
        cells,
    }
}
