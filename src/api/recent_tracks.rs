// Last.fm recent-tracks endpoint
use super::TrackLookup;
use crate::config::Credentials;
use crate::constants::{
    LASTFM_ERROR_INVALID_API_KEY, LASTFM_ERROR_USER_NOT_FOUND, LASTFM_RECENT_TRACKS_METHOD,
};
use crate::models::{ApiErrorResponse, RecentTracksResponse, Track};
use crate::utils::errors::LookupError;

/// HTTP client for `user.getrecenttracks`
#[derive(Debug, Clone)]
pub struct LastFmClient {
    base_url: String,
    http: reqwest::Client,
}

impl LastFmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: crate::utils::http::client(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TrackLookup for LastFmClient {
    async fn current_track(&self, credentials: &Credentials) -> Result<Track, LookupError> {
        let url = recent_tracks_url(&self.base_url, credentials);
        log::debug!("[LastFm] Fetching recent tracks for {}", credentials.username);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let track = parse_recent_tracks(status.as_u16(), &body, &credentials.username)?;
        log::info!(
            "[LastFm] {} track: {} - {} ({})",
            if track.is_now_playing() { "Now playing" } else { "Last" },
            track.artist_name(),
            track.name,
            track.album_name()
        );
        Ok(track)
    }
}

pub fn recent_tracks_url(base_url: &str, credentials: &Credentials) -> String {
    format!(
        "{}/2.0/?method={}&user={}&api_key={}&format=json&limit=1",
        base_url.trim_end_matches('/'),
        LASTFM_RECENT_TRACKS_METHOD,
        urlencoding::encode(&credentials.username),
        urlencoding::encode(&credentials.api_key)
    )
}

/// Turn a raw response into the most recent track, classifying failures
pub fn parse_recent_tracks(status: u16, body: &str, username: &str) -> Result<Track, LookupError> {
    if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(body) {
        return Err(classify_api_error(api_error, username));
    }

    if !(200..300).contains(&status) {
        return Err(LookupError::Api {
            code: u32::from(status),
            message: format!("HTTP {}", status),
        });
    }

    let response: RecentTracksResponse = serde_json::from_str(body)?;
    let track = response
        .into_tracks()
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NoRecentTracks(username.to_string()))?;

    track.validate().map_err(LookupError::MalformedTrack)?;
    Ok(track)
}

fn classify_api_error(api_error: ApiErrorResponse, username: &str) -> LookupError {
    log::warn!(
        "[LastFm] API error {}: {}",
        api_error.error,
        api_error.message
    );

    if api_error.error == LASTFM_ERROR_INVALID_API_KEY
        || api_error.message.contains("Invalid API key")
    {
        LookupError::InvalidApiKey
    } else if api_error.error == LASTFM_ERROR_USER_NOT_FOUND
        || api_error.message.contains("User not found")
    {
        LookupError::UserNotFound(username.to_string())
    } else {
        LookupError::Api {
            code: api_error.error,
            message: api_error.message,
        }
    }
}
