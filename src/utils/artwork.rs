//! Album artwork download and palette quantization.

use crate::constants::{ARTWORK_QUANT_SHIFT, ARTWORK_SAMPLE_SIZE, PALETTE_SIZE};
use crate::utils::errors::ExtractionError;
use crate::visual::Rgb;
use image::DynamicImage;
use std::collections::HashMap;

/// Colors extracted from an image, most dominant first. Entries may be null.
pub type ExtractedColors = Vec<Option<Rgb>>;

/// Turns an image URL into a quantized palette
#[allow(async_fn_in_trait)]
pub trait ColorExtractor {
    async fn extract(&self, image_url: &str) -> Result<ExtractedColors, ExtractionError>;
}

/// Downloads artwork over HTTP and quantizes it locally
#[derive(Debug, Clone)]
pub struct ArtworkExtractor {
    http: reqwest::Client,
    color_count: usize,
}

impl Default for ArtworkExtractor {
    fn default() -> Self {
        Self::new(PALETTE_SIZE)
    }
}

impl ArtworkExtractor {
    pub fn new(color_count: usize) -> Self {
        Self {
            http: crate::utils::http::client(),
            color_count,
        }
    }
}

impl ColorExtractor for ArtworkExtractor {
    async fn extract(&self, image_url: &str) -> Result<ExtractedColors, ExtractionError> {
        log::debug!("[Artwork] Fetching {}", image_url);

        let response = self.http.get(image_url).send().await?;
        if !response.status().is_success() {
            return Err(ExtractionError::Status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;

        let colors = palette_from_bytes(&bytes, self.color_count)?;
        log::info!(
            "[Artwork] Extracted {} colors (dominant {})",
            colors.len(),
            colors.first().map(|c| c.to_hex()).unwrap_or_default()
        );
        Ok(colors.into_iter().map(Some).collect())
    }
}

/// Decode image bytes and quantize them
pub fn palette_from_bytes(bytes: &[u8], count: usize) -> Result<Vec<Rgb>, ExtractionError> {
    let img = image::load_from_memory(bytes)?;
    let colors = extract_palette(&img, count);
    if colors.is_empty() {
        return Err(ExtractionError::EmptyImage);
    }
    Ok(colors)
}

/// Most frequent color buckets (5 bits per channel), averaged, most common first.
/// Transparent pixels are ignored.
pub fn extract_palette(img: &DynamicImage, count: usize) -> Vec<Rgb> {
    let sample = if img.width() > ARTWORK_SAMPLE_SIZE || img.height() > ARTWORK_SAMPLE_SIZE {
        img.thumbnail(ARTWORK_SAMPLE_SIZE, ARTWORK_SAMPLE_SIZE).to_rgba8()
    } else {
        img.to_rgba8()
    };

    // bucket -> (pixel count, sum r, sum g, sum b)
    let mut buckets: HashMap<(u8, u8, u8), (u64, u64, u64, u64)> = HashMap::new();
    for pixel in sample.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < 125 {
            continue;
        }
        let key = (r >> ARTWORK_QUANT_SHIFT, g >> ARTWORK_QUANT_SHIFT, b >> ARTWORK_QUANT_SHIFT);
        let entry = buckets.entry(key).or_insert((0, 0, 0, 0));
        entry.0 += 1;
        entry.1 += u64::from(r);
        entry.2 += u64::from(g);
        entry.3 += u64::from(b);
    }

    let mut ranked: Vec<_> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .take(count)
        .map(|(_, (n, r, g, b))| Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
        .collect()
}

/// Single most common color
pub fn extract_dominant_color(img: &DynamicImage) -> Option<Rgb> {
    extract_palette(img, 1).into_iter().next()
}
