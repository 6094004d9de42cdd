// Visual parameter derivation: colors, palettes and hash-driven motion

pub mod color;
pub mod hash_params;
pub mod palette;

pub use color::{Hsl, Rgb};
pub use hash_params::{hash_string, parameter_from_hash, MotionParameters};
pub use palette::{Palette, PaletteSource, PaletteStrategy};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything a render backend needs for one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedConfig {
    pub seed: String,
    pub palette: Palette,
    pub motion: MotionParameters,
}

impl DerivedConfig {
    pub fn derive<R: Rng + ?Sized>(
        seed: &str,
        raw_colors: Option<&[Option<Rgb>]>,
        strategy: PaletteStrategy,
        rng: &mut R,
    ) -> Self {
        Self {
            seed: seed.to_string(),
            palette: strategy.derive(raw_colors, rng),
            motion: MotionParameters::from_seed(seed),
        }
    }
}
