use super::track::{OneOrMany, Track};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecentTracksResponse {
    pub recenttracks: RecentTracks,
}

#[derive(Debug, Deserialize)]
pub struct RecentTracks {
    #[serde(default)]
    pub track: Option<OneOrMany<Track>>,
}

impl RecentTracksResponse {
    pub fn into_tracks(self) -> Vec<Track> {
        self.recenttracks
            .track
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}

/// Error body returned by the Last.fm API (often with HTTP 200)
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: u32,
    #[serde(default)]
    pub message: String,
}
