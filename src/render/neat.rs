use super::RenderBackend;
use crate::visual::DerivedConfig;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub color: String,
    pub enabled: bool,
}

/// Option set for the canvas/WebGL mesh gradient.
///
/// Motion parameters come from the seed; the remaining fields are fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeatOptions {
    pub colors: Vec<ColorStop>,
    pub speed: f64,
    pub horizontal_pressure: f64,
    pub vertical_pressure: f64,
    pub wave_frequency_x: f64,
    pub wave_frequency_y: f64,
    pub wave_amplitude: f64,
    pub shadows: f64,
    pub highlights: f64,
    pub color_saturation: f64,
    pub color_brightness: f64,
    pub wireframe: bool,
    pub color_blending: f64,
    pub background_alpha: f64,
    pub resolution: f64,
    pub grain_intensity: f64,
}

impl NeatOptions {
    pub fn from_config(config: &DerivedConfig) -> Self {
        let motion = &config.motion;
        Self {
            colors: config
                .palette
                .hex_colors()
                .into_iter()
                .map(|color| ColorStop { color, enabled: true })
                .collect(),
            speed: motion.speed,
            horizontal_pressure: motion.horizontal_pressure,
            vertical_pressure: motion.vertical_pressure,
            wave_frequency_x: motion.wave_frequency_x,
            wave_frequency_y: motion.wave_frequency_y,
            wave_amplitude: motion.wave_amplitude,
            shadows: 0.0,
            highlights: 1.0,
            color_saturation: 0.0,
            color_brightness: 1.0,
            wireframe: false,
            color_blending: 6.0,
            background_alpha: 0.0,
            resolution: 1.0 / 3.0,
            grain_intensity: 0.0,
        }
    }
}

/// Writes one JSON option set per update
pub struct NeatGradientBackend<W: Write> {
    out: W,
    current: Option<NeatOptions>,
}

impl<W: Write> NeatGradientBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    pub fn current(&self) -> Option<&NeatOptions> {
        self.current.as_ref()
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> RenderBackend for NeatGradientBackend<W> {
    fn name(&self) -> &'static str {
        "neat"
    }

    fn apply(&mut self, config: &DerivedConfig) {
        let options = NeatOptions::from_config(config);
        match serde_json::to_string(&options) {
            Ok(json) => {
                if let Err(e) = writeln!(self.out, "{}", json) {
                    log::error!("[Render] Failed to write gradient options: {}", e);
                }
            }
            Err(e) => log::error!("[Render] Failed to serialize gradient options: {}", e),
        }
        self.current = Some(options);
    }

    fn destroy(&mut self) {
        self.current = None;
        let _ = self.out.flush();
    }
}
