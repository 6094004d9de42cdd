//! Palette derivation: raw extractor output -> exactly five gradient stops.

use super::color::{Hsl, Rgb};
use crate::constants::{
    BRIGHTNESS_MAX, BRIGHTNESS_MIN, FALLBACK_HUE_MAX, FALLBACK_LIGHTNESS, FALLBACK_RGB,
    FALLBACK_SATURATION, MIN_COLOR_DISTANCE, PALETTE_SIZE, VARIATION_ATTEMPTS, VARIATION_RANGE,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where the palette's colors came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteSource {
    Extracted,
    RandomFallback,
}

/// Five ordered gradient stops plus the optional page background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: [Rgb; PALETTE_SIZE],
    pub background: Option<Rgb>,
    pub source: PaletteSource,
}

impl Palette {
    pub fn hex_colors(&self) -> [String; PALETTE_SIZE] {
        self.colors.map(Rgb::to_hex)
    }

    pub fn css_colors(&self) -> [String; PALETTE_SIZE] {
        self.colors.map(|c| c.to_hsl().to_css())
    }

    /// Background hex, or `default` when the palette has none
    pub fn theme_color(&self, default: &str) -> String {
        self.background
            .map(Rgb::to_hex)
            .unwrap_or_else(|| default.to_string())
    }

    /// Five independent random HSL colors (h in [0,360), s and l in [60,90))
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let colors = std::array::from_fn(|_| random_hsl(rng).to_rgb());
        Self {
            colors,
            background: None,
            source: PaletteSource::RandomFallback,
        }
    }
}

pub fn random_hsl<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    let h = rng.random_range(0..FALLBACK_HUE_MAX);
    let s = rng.random_range(FALLBACK_SATURATION.0..FALLBACK_SATURATION.1);
    let l = rng.random_range(FALLBACK_LIGHTNESS.0..FALLBACK_LIGHTNESS.1);
    Hsl::new(f64::from(h), f64::from(s), f64::from(l))
}

/// Nudge each channel of `base` by up to +-25, clamped to [0, 255]
pub fn color_variation<R: Rng + ?Sized>(base: Rgb, rng: &mut R) -> Rgb {
    let mut jitter = |channel: u8| {
        let offset = (rng.random::<f64>() - 0.5) * VARIATION_RANGE;
        (f64::from(channel) + offset).round() as i32
    };
    let (r, g, b) = (jitter(base.r), jitter(base.g), jitter(base.b));
    Rgb::clamped(r, g, b)
}

/// Keeps colors that render well as gradient stops (neither near-black nor near-white)
pub fn passes_brightness_filter(color: Rgb) -> bool {
    let brightness = color.brightness();
    brightness > BRIGHTNESS_MIN && brightness < BRIGHTNESS_MAX
}

/// Policy for turning extracted colors into a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteStrategy {
    /// Entry 0 is the background; the rest are brightness-filtered and padded
    /// by repeating the first survivor.
    #[default]
    BrightnessFilter,
    /// Entry 0 is the dominant color; distinct colors are added greedily and
    /// the remainder filled with jittered variants of the dominant color.
    DominantDistance,
}

impl PaletteStrategy {
    pub fn name(self) -> &'static str {
        match self {
            PaletteStrategy::BrightnessFilter => "brightness",
            PaletteStrategy::DominantDistance => "dominant",
        }
    }

    /// Derive exactly five colors.
    ///
    /// `None`, an empty list, or a list of only null entries falls back to
    /// random HSL colors drawn from `rng`.
    pub fn derive<R: Rng + ?Sized>(self, raw: Option<&[Option<Rgb>]>, rng: &mut R) -> Palette {
        let entries = match raw {
            Some(entries) if entries.iter().any(Option::is_some) => entries,
            _ => {
                log::debug!("[Palette] No usable colors, using random fallback");
                return Palette::random(rng);
            }
        };

        match self {
            PaletteStrategy::BrightnessFilter => brightness_filtered(entries),
            PaletteStrategy::DominantDistance => dominant_distance(entries, rng),
        }
    }
}

impl std::str::FromStr for PaletteStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brightness" => Ok(PaletteStrategy::BrightnessFilter),
            "dominant" => Ok(PaletteStrategy::DominantDistance),
            other => Err(format!("unknown palette strategy: {}", other)),
        }
    }
}

fn brightness_filtered(entries: &[Option<Rgb>]) -> Palette {
    let background = entries.first().copied().flatten();

    let survivors: Vec<Rgb> = entries
        .iter()
        .skip(1)
        .flatten()
        .copied()
        .filter(|c| passes_brightness_filter(*c))
        .take(PALETTE_SIZE)
        .collect();

    let pad = survivors
        .first()
        .copied()
        .unwrap_or_else(|| Rgb::from(FALLBACK_RGB));

    log::debug!(
        "[Palette] {} of {} colors passed brightness filter",
        survivors.len(),
        entries.len().saturating_sub(1)
    );

    let colors = std::array::from_fn(|i| survivors.get(i).copied().unwrap_or(pad));
    Palette {
        colors,
        background,
        source: PaletteSource::Extracted,
    }
}

fn dominant_distance<R: Rng + ?Sized>(entries: &[Option<Rgb>], rng: &mut R) -> Palette {
    let mut present = entries.iter().flatten().copied();
    // Caller guarantees at least one entry is present
    let Some(dominant) = present.next() else {
        return Palette::random(rng);
    };

    let mut chosen = vec![dominant];
    for color in present {
        if chosen.len() >= PALETTE_SIZE {
            break;
        }
        if color.distance(dominant) > MIN_COLOR_DISTANCE {
            chosen.push(color);
        }
    }

    while chosen.len() < PALETTE_SIZE {
        let variant = (0..VARIATION_ATTEMPTS)
            .map(|_| color_variation(dominant, rng))
            .find(|v| chosen.iter().all(|c| v.distance(*c) >= MIN_COLOR_DISTANCE));

        match variant {
            Some(v) => chosen.push(v),
            None => {
                log::debug!(
                    "[Palette] No distinct variant after {} attempts, repeating dominant color",
                    VARIATION_ATTEMPTS
                );
                break;
            }
        }
    }

    let colors = std::array::from_fn(|i| chosen.get(i).copied().unwrap_or(dominant));
    Palette {
        colors,
        background: Some(dominant),
        source: PaletteSource::Extracted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rgb(r: u8, g: u8, b: u8) -> Option<Rgb> {
        Some(Rgb::new(r, g, b))
    }

    #[test]
    fn brightness_filter_scenario() {
        let raw = [rgb(10, 10, 10), rgb(200, 100, 50), rgb(230, 230, 230), rgb(50, 60, 70)];
        let mut rng = StdRng::seed_from_u64(1);
        let palette = PaletteStrategy::BrightnessFilter.derive(Some(&raw[..]), &mut rng);

        assert_eq!(palette.source, PaletteSource::Extracted);
        assert_eq!(palette.background.map(Rgb::to_hex).as_deref(), Some("#0a0a0a"));
        let first = Rgb::new(200, 100, 50);
        assert_eq!(
            palette.colors,
            [first, Rgb::new(50, 60, 70), first, first, first]
        );
    }

    #[test]
    fn brightness_filter_pads_with_fallback_when_nothing_survives() {
        let raw = [rgb(0, 0, 0), rgb(5, 5, 5), rgb(250, 250, 250)];
        let mut rng = StdRng::seed_from_u64(2);
        let palette = PaletteStrategy::BrightnessFilter.derive(Some(&raw[..]), &mut rng);
        assert_eq!(palette.colors, [Rgb::from(FALLBACK_RGB); PALETTE_SIZE]);
        assert_eq!(palette.background, Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn brightness_filter_skips_nulls_and_caps_at_five() {
        let raw = [
            rgb(1, 1, 1),
            None,
            rgb(150, 0, 0),
            rgb(0, 100, 0),
            None,
            rgb(100, 100, 100),
            rgb(120, 80, 0),
            rgb(0, 100, 100),
            rgb(100, 0, 100),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let palette = PaletteStrategy::BrightnessFilter.derive(Some(&raw[..]), &mut rng);
        assert_eq!(
            palette.colors,
            [
                Rgb::new(150, 0, 0),
                Rgb::new(0, 100, 0),
                Rgb::new(100, 100, 100),
                Rgb::new(120, 80, 0),
                Rgb::new(0, 100, 100),
            ]
        );
    }

    #[test]
    fn brightness_bounds_are_exclusive() {
        // 0.299*30 + 0.587*30 + 0.114*30 == 30
        assert!(!passes_brightness_filter(Rgb::new(30, 30, 30)));
        assert!(passes_brightness_filter(Rgb::new(31, 31, 31)));
        assert!(passes_brightness_filter(Rgb::new(219, 219, 219)));
        assert!(!passes_brightness_filter(Rgb::new(220, 220, 220)));
    }

    #[test]
    fn empty_or_null_input_uses_random_fallback() {
        let mut rng = StdRng::seed_from_u64(4);
        for raw in [None, Some(&[][..]), Some(&[None, None][..])] {
            for strategy in [PaletteStrategy::BrightnessFilter, PaletteStrategy::DominantDistance] {
                let palette = strategy.derive(raw, &mut rng);
                assert_eq!(palette.source, PaletteSource::RandomFallback);
                assert_eq!(palette.background, None);
            }
        }
    }

    #[test]
    fn random_fallback_draws_from_injected_rng() {
        let palette = PaletteStrategy::BrightnessFilter.derive(None, &mut StdRng::seed_from_u64(9));

        let mut rng = StdRng::seed_from_u64(9);
        let expected: Vec<Rgb> = (0..PALETTE_SIZE).map(|_| random_hsl(&mut rng).to_rgb()).collect();
        assert_eq!(palette.colors.to_vec(), expected);
    }

    #[test]
    fn random_hsl_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let hsl = random_hsl(&mut rng);
            assert!((0.0..360.0).contains(&hsl.h));
            assert!((60.0..=90.0).contains(&hsl.s));
            assert!((60.0..=90.0).contains(&hsl.l));
        }
    }

    #[test]
    fn dominant_distance_keeps_distinct_colors_in_order() {
        let raw = [
            rgb(200, 0, 0),
            rgb(205, 5, 5),
            rgb(0, 200, 0),
            rgb(0, 0, 200),
            rgb(200, 200, 0),
            rgb(0, 200, 200),
        ];
        let mut rng = StdRng::seed_from_u64(6);
        let palette = PaletteStrategy::DominantDistance.derive(Some(&raw[..]), &mut rng);
        assert_eq!(
            palette.colors,
            [
                Rgb::new(200, 0, 0),
                Rgb::new(0, 200, 0),
                Rgb::new(0, 0, 200),
                Rgb::new(200, 200, 0),
                Rgb::new(0, 200, 200),
            ]
        );
        assert_eq!(palette.background, Some(Rgb::new(200, 0, 0)));
    }

    #[test]
    fn dominant_distance_pads_with_variants_to_five() {
        let raw = [rgb(120, 120, 120)];
        let mut rng = StdRng::seed_from_u64(7);
        let palette = PaletteStrategy::DominantDistance.derive(Some(&raw[..]), &mut rng);
        assert_eq!(palette.colors[0], Rgb::new(120, 120, 120));
        for color in &palette.colors[1..] {
            for channel in [color.r, color.g, color.b] {
                assert!((95..=145).contains(&channel), "variant out of jitter range: {color}");
            }
        }
    }

    #[test]
    fn color_variation_clamps_at_edges() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let v = color_variation(Rgb::new(255, 0, 255), &mut rng);
            assert!(v.r >= 230 && v.g <= 25 && v.b >= 230);
        }
    }

    #[test]
    fn strategy_parses_from_name() {
        for strategy in [PaletteStrategy::BrightnessFilter, PaletteStrategy::DominantDistance] {
            assert_eq!(strategy.name().parse::<PaletteStrategy>(), Ok(strategy));
        }
        assert!("vibrant".parse::<PaletteStrategy>().is_err());
    }
}
