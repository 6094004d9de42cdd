//! Render backends: consumers of a [`DerivedConfig`].
//!
//! The crate never draws pixels; each backend turns the configuration into
//! the description a drawing engine consumes (canvas option set, CSS, SVG).

pub mod css;
pub mod favicon;
pub mod neat;

pub use css::CssGradientBackend;
pub use favicon::FaviconBackend;
pub use neat::NeatGradientBackend;

use crate::visual::DerivedConfig;

pub trait RenderBackend {
    fn name(&self) -> &'static str;

    /// Replace the rendered gradient with `config`
    fn apply(&mut self, config: &DerivedConfig);

    /// Release the drawing surface. Called exactly once by [`RenderSurface`].
    fn destroy(&mut self);
}

/// Owns a backend and guarantees `destroy` runs exactly once
pub struct RenderSurface<B: RenderBackend> {
    backend: B,
    destroyed: bool,
}

impl<B: RenderBackend> RenderSurface<B> {
    pub fn new(backend: B) -> Self {
        log::debug!("[Render] Surface created for {} backend", backend.name());
        Self { backend, destroyed: false }
    }

    pub fn apply(&mut self, config: &DerivedConfig) {
        if self.destroyed {
            log::warn!("[Render] Ignoring update after teardown");
            return;
        }
        self.backend.apply(config);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Tear down now instead of at drop
    pub fn teardown(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            log::debug!("[Render] Tearing down {} backend", self.backend.name());
            self.backend.destroy();
        }
    }
}

impl<B: RenderBackend> Drop for RenderSurface<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::PaletteStrategy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting {
        applied: Rc<Cell<usize>>,
        destroyed: Rc<Cell<usize>>,
    }

    impl RenderBackend for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }
        fn apply(&mut self, _config: &DerivedConfig) {
            self.applied.set(self.applied.get() + 1);
        }
        fn destroy(&mut self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[test]
    fn teardown_runs_once_across_explicit_call_and_drop() {
        let applied = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        let config = DerivedConfig::derive(
            "Kid A",
            None,
            PaletteStrategy::BrightnessFilter,
            &mut StdRng::seed_from_u64(1),
        );

        {
            let mut surface = RenderSurface::new(Counting {
                applied: Rc::clone(&applied),
                destroyed: Rc::clone(&destroyed),
            });
            surface.apply(&config);
            surface.teardown();
            surface.apply(&config);
            surface.teardown();
            assert!(surface.is_destroyed());
        }

        assert_eq!(applied.get(), 1);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn drop_tears_down() {
        let destroyed = Rc::new(Cell::new(0));
        drop(RenderSurface::new(Counting {
            applied: Rc::new(Cell::new(0)),
            destroyed: Rc::clone(&destroyed),
        }));
        assert_eq!(destroyed.get(), 1);
    }
}
