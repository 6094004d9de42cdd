//! Gradient orchestrator: owns the current seed and raw palette and
//! re-derives the render configuration when either changes.

use crate::visual::{DerivedConfig, PaletteStrategy, Rgb};
use rand::rngs::ThreadRng;
use rand::Rng;

pub struct GradientOrchestrator<R: Rng = ThreadRng> {
    strategy: PaletteStrategy,
    rng: R,
    seed: Option<String>,
    raw_colors: Option<Vec<Option<Rgb>>>,
    current: Option<DerivedConfig>,
    recomputations: usize,
}

impl GradientOrchestrator<ThreadRng> {
    /// Orchestrator with a non-deterministic fallback palette
    pub fn new(strategy: PaletteStrategy) -> Self {
        Self::with_rng(strategy, rand::rng())
    }
}

impl<R: Rng> GradientOrchestrator<R> {
    pub fn with_rng(strategy: PaletteStrategy, rng: R) -> Self {
        Self {
            strategy,
            rng,
            seed: None,
            raw_colors: None,
            current: None,
            recomputations: 0,
        }
    }

    pub fn strategy(&self) -> PaletteStrategy {
        self.strategy
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn current(&self) -> Option<&DerivedConfig> {
        self.current.as_ref()
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Whether `update(seed, ..)` would be a no-op for this seed
    pub fn is_current_seed(&self, seed: &str) -> bool {
        self.seed.as_deref() == Some(seed)
    }

    /// Feed a seed and its extracted colors (`None` when extraction was not
    /// possible). Returns `true` if the configuration was recomputed.
    pub fn update(&mut self, seed: &str, raw_colors: Option<Vec<Option<Rgb>>>) -> bool {
        if self.is_current_seed(seed) && self.raw_colors == raw_colors {
            log::debug!("[Orchestrator] Seed unchanged ({}), keeping configuration", seed);
            return false;
        }

        let config = DerivedConfig::derive(seed, raw_colors.as_deref(), self.strategy, &mut self.rng);
        log::info!(
            "[Orchestrator] Derived gradient for '{}' ({:?} palette, speed {:.2})",
            seed,
            config.palette.source,
            config.motion.speed
        );

        self.seed = Some(seed.to_string());
        self.raw_colors = raw_colors;
        self.current = Some(config);
        self.recomputations += 1;
        true
    }

    /// Forget the seed so the next update always recomputes
    pub fn reset(&mut self) {
        self.seed = None;
        self.raw_colors = None;
        self.current = None;
    }
}
