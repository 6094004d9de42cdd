// Last.fm API client modules

pub mod recent_tracks;

use crate::config::Credentials;
use crate::models::Track;
use crate::utils::errors::LookupError;

// Re-export commonly used functions
pub use recent_tracks::{parse_recent_tracks, recent_tracks_url, LastFmClient};

/// Source of the user's most recent track.
///
/// No retries: a failed lookup is returned to the caller as-is.
#[allow(async_fn_in_trait)]
pub trait TrackLookup {
    async fn current_track(&self, credentials: &Credentials) -> Result<Track, LookupError>;
}
