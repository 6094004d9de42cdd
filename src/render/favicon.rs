//! Waveform favicon tinted with the current palette.

use super::RenderBackend;
use crate::constants::{DEFAULT_THEME_COLOR, PALETTE_SIZE};
use crate::utils::errors::ColorError;
use crate::visual::{DerivedConfig, Palette, Rgb};
use base64::Engine as _;
use std::io::Write;

const GRADIENT_ID: &str = "waveGradient";
const WAVE_PATH: &str = "M2 13a2 2 0 0 0 2-2V7a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0V4a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0v-4a2 2 0 0 1 2-2";

pub const CONTENT_TYPE: &str = "image/svg+xml";
pub const CACHE_CONTROL: &str = "public, max-age=31536000";

/// 24x24 SVG: the wave path stroked with a diagonal gradient through `colors`
pub fn render_svg(colors: &[Rgb]) -> String {
    let last = colors.len().saturating_sub(1).max(1);
    let stops: String = colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            format!(
                "<stop offset=\"{}%\" style=\"stop-color:{}\" />",
                (i * 100) as f64 / last as f64,
                color.to_hex()
            )
        })
        .collect();

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\">",
            "<defs><linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">{stops}</linearGradient></defs>",
            "<path d=\"{path}\" fill=\"none\" stroke=\"url(#{id})\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            "</svg>"
        ),
        id = GRADIENT_ID,
        stops = stops,
        path = WAVE_PATH,
    )
}

/// Read `c1`..`c5` from a query string. Missing colors default to black;
/// anything that is not `#rrggbb` is rejected.
pub fn colors_from_query(query: &str) -> Result<[Rgb; PALETTE_SIZE], ColorError> {
    let pairs: Vec<(String, String)> = query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            let value = urlencoding::decode(v)
                .map(|d| d.into_owned())
                .unwrap_or_else(|_| v.to_string());
            (k.to_string(), value)
        })
        .collect();

    let mut colors = [Rgb::new(0, 0, 0); PALETTE_SIZE];
    for (i, slot) in colors.iter_mut().enumerate() {
        let key = format!("c{}", i + 1);
        let value = pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or(DEFAULT_THEME_COLOR);
        *slot = Rgb::from_hex(value)?;
    }
    Ok(colors)
}

/// `c1=%23rrggbb&...` for linking to a favicon endpoint
pub fn favicon_query(palette: &Palette) -> String {
    palette
        .hex_colors()
        .iter()
        .enumerate()
        .map(|(i, hex)| format!("c{}={}", i + 1, urlencoding::encode(hex)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Inline `data:` URI usable directly as a `<link rel="icon">` href
pub fn data_uri(svg: &str) -> String {
    format!(
        "data:{};base64,{}",
        CONTENT_TYPE,
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}

/// Writes the favicon as a data URI per update
pub struct FaviconBackend<W: Write> {
    out: W,
    current: Option<String>,
}

impl<W: Write> FaviconBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl<W: Write> RenderBackend for FaviconBackend<W> {
    fn name(&self) -> &'static str {
        "favicon"
    }

    fn apply(&mut self, config: &DerivedConfig) {
        let svg = render_svg(&config.palette.colors);
        if let Err(e) = writeln!(self.out, "{}", data_uri(&svg)) {
            log::error!("[Render] Failed to write favicon: {}", e);
        }
        self.current = Some(svg);
    }

    fn destroy(&mut self) {
        self.current = None;
        let _ = self.out.flush();
    }
}
