use super::RenderBackend;
use crate::visual::DerivedConfig;
use std::fmt::Write as _;
use std::io::Write;

/// Class the stylesheet targets
pub const CONTAINER_CLASS: &str = "gradient-container";

/// Five stacked radial gradients whose centers and stop sizes are driven by
/// `--x-i`, `--y-i`, `--s-start-i`, `--s-end-i` custom properties.
pub fn background_image(colors: &[String]) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            format!(
                "radial-gradient(circle at var(--x-{i}) var(--y-{i}), {color} var(--s-start-{i}), transparent var(--s-end-{i}))"
            )
        })
        .collect::<Vec<_>>()
        .join(",\n    ")
}

/// Complete rule: background layers plus motion parameters as custom properties
pub fn stylesheet(config: &DerivedConfig) -> String {
    let mut css = String::new();
    let _ = writeln!(css, ".{} {{", CONTAINER_CLASS);
    let _ = writeln!(
        css,
        "  background-image:\n    {};",
        background_image(&config.palette.css_colors())
    );
    if let Some(bg) = config.palette.background {
        let _ = writeln!(css, "  background-color: {};", bg.to_hex());
    }
    for (spec, value) in config.motion.entries() {
        let _ = writeln!(css, "  --{}: {:.4};", spec.name, value);
    }
    css.push_str("}\n");
    css
}

/// Writes a stylesheet per update
pub struct CssGradientBackend<W: Write> {
    out: W,
    current: Option<String>,
}

impl<W: Write> CssGradientBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl<W: Write> RenderBackend for CssGradientBackend<W> {
    fn name(&self) -> &'static str {
        "css"
    }

    fn apply(&mut self, config: &DerivedConfig) {
        let css = stylesheet(config);
        if let Err(e) = self.out.write_all(css.as_bytes()) {
            log::error!("[Render] Failed to write stylesheet: {}", e);
        }
        self.current = Some(css);
    }

    fn destroy(&mut self) {
        self.current = None;
        let _ = self.out.flush();
    }
}
