use thiserror::Error;

/// Missing or contradictory credentials; always a user error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is required")]
    MissingApiKey,
    #[error("Username is required")]
    MissingUsername,
    #[error("API key is required when providing a username")]
    UsernameWithoutApiKey,
}

impl ConfigError {
    pub fn status(&self) -> u16 {
        400
    }
}

/// Failures fetching the current track; fatal to the page-level request
#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid Last.fm API key")]
    InvalidApiKey,
    #[error("Last.fm user '{0}' not found. Please check the username.")]
    UserNotFound(String),
    #[error("No recent tracks found for user: {0}")]
    NoRecentTracks(String),
    #[error("Invalid track data received from Last.fm: {0}")]
    MalformedTrack(String),
    #[error("Last.fm API error {code}: {message}")]
    Api { code: u32, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to decode Last.fm response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// HTTP-style status for surfacing the failure to a caller
    pub fn status(&self) -> u16 {
        match self {
            LookupError::Config(e) => e.status(),
            LookupError::InvalidApiKey => 401,
            LookupError::UserNotFound(_) | LookupError::NoRecentTracks(_) => 404,
            LookupError::MalformedTrack(_) => 500,
            LookupError::Api { .. } | LookupError::Network(_) | LookupError::Decode(_) => 502,
        }
    }
}

/// Artwork download/decode failures; recovered locally with the random palette
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Artwork request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Artwork server returned status {0}")]
    Status(u16),
    #[error("Failed to decode artwork: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Artwork has no pixels")]
    EmptyImage,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color format: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_distinguish_error_classes() {
        assert_eq!(LookupError::from(ConfigError::MissingApiKey).status(), 400);
        assert_eq!(LookupError::InvalidApiKey.status(), 401);
        assert_eq!(LookupError::UserNotFound("rj".into()).status(), 404);
        assert_eq!(LookupError::NoRecentTracks("rj".into()).status(), 404);
        assert_eq!(LookupError::MalformedTrack("no image".into()).status(), 500);
    }

    #[test]
    fn config_errors_have_distinct_messages() {
        assert_ne!(
            ConfigError::MissingApiKey.to_string(),
            ConfigError::UsernameWithoutApiKey.to_string()
        );
    }
}
