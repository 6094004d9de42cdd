//! Now-playing gradient session
//!
//! Wires the track lookup, artwork extraction, orchestrator and render
//! backend together and keeps them in sync with the refresh timer.

use super::orchestrator::GradientOrchestrator;
use super::refresh::RefreshTimer;
use crate::api::TrackLookup;
use crate::config::{Credentials, RequestParams, Settings};
use crate::models::{PageMeta, Track};
use crate::render::{RenderBackend, RenderSurface};
use crate::utils::artwork::{ColorExtractor, ExtractedColors};
use crate::utils::errors::LookupError;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

pub struct GradientSession<L, E, B, R = ThreadRng>
where
    L: TrackLookup,
    E: ColorExtractor,
    B: RenderBackend,
    R: Rng,
{
    lookup: L,
    extractor: E,
    credentials: Credentials,
    orchestrator: GradientOrchestrator<R>,
    surface: RenderSurface<B>,
    refresh_interval: Duration,
    last_track: Option<Track>,
}

impl<L, E, B, R> GradientSession<L, E, B, R>
where
    L: TrackLookup,
    E: ColorExtractor,
    B: RenderBackend,
    R: Rng,
{
    /// Resolve credentials and render the current track once.
    ///
    /// Configuration errors are returned before any network call is made;
    /// lookup errors from the first fetch are fatal.
    pub async fn connect(
        settings: &Settings,
        request: &RequestParams,
        lookup: L,
        extractor: E,
        backend: B,
        orchestrator: GradientOrchestrator<R>,
    ) -> Result<Self, LookupError> {
        let credentials = settings.resolve(request)?;
        log::info!("[Session] Watching Last.fm user {}", credentials.username);

        let mut session = Self {
            lookup,
            extractor,
            credentials,
            orchestrator,
            surface: RenderSurface::new(backend),
            refresh_interval: settings.refresh_interval,
            last_track: None,
        };
        session.refresh().await?;
        Ok(session)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn orchestrator(&self) -> &GradientOrchestrator<R> {
        &self.orchestrator
    }

    pub fn surface(&self) -> &RenderSurface<B> {
        &self.surface
    }

    pub fn last_track(&self) -> Option<&Track> {
        self.last_track.as_ref()
    }

    pub fn page_meta(&self) -> Option<PageMeta> {
        let track = self.last_track.as_ref()?;
        let palette = self.orchestrator.current().map(|c| &c.palette);
        Some(PageMeta::from_track(track, palette))
    }

    /// Fetch the current track and re-render if its album changed.
    /// Returns whether the configuration was recomputed.
    pub async fn refresh(&mut self) -> Result<bool, LookupError> {
        let track = self.lookup.current_track(&self.credentials).await?;
        let seed = track.album_name().to_string();

        if self.orchestrator.is_current_seed(&seed) {
            self.last_track = Some(track);
            return Ok(false);
        }

        let colors = self.extract_colors(&track).await;
        let changed = self.orchestrator.update(&seed, colors);
        if changed {
            if let Some(config) = self.orchestrator.current() {
                self.surface.apply(config);
            }
        }
        self.last_track = Some(track);
        Ok(changed)
    }

    /// Extraction failures degrade to `None` (random palette), never abort
    async fn extract_colors(&self, track: &Track) -> Option<ExtractedColors> {
        let Some(url) = track.cover_url() else {
            log::warn!("[Session] Track '{}' has no cover image", track.name);
            return None;
        };

        match self.extractor.extract(url).await {
            Ok(colors) => Some(colors),
            Err(e) => {
                log::warn!("[Session] Color extraction failed, using random palette: {}", e);
                None
            }
        }
    }

    /// Refresh on every timer tick until `shutdown` completes.
    ///
    /// Periodic lookup failures are logged and the next tick tries again.
    /// The timer is stopped and the render surface torn down on return.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let (mut timer, mut ticks) = RefreshTimer::channel(self.refresh_interval);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    log::info!("[Session] Shutdown requested");
                    break;
                }
                tick = ticks.recv() => {
                    let Some(tick) = tick else { break };
                    log::debug!("[Session] Refresh #{}", tick.seq);
                    if let Err(e) = self.refresh().await {
                        log::warn!("[Session] Refresh failed (status {}): {}", e.status(), e);
                    }
                }
            }
        }

        timer.stop();
        self.surface.teardown();
    }
}
