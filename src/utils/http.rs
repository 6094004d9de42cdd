use crate::constants::HTTP_TIMEOUT_SECS;
use once_cell::sync::Lazy;
use std::time::Duration;

const USER_AGENT: &str = concat!("lastfm-gradient/", env!("CARGO_PKG_VERSION"));

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("[Http] Failed to build configured client, using defaults: {}", e);
            reqwest::Client::new()
        })
});

/// Shared HTTP client (connection pool reused across lookups and artwork fetches)
pub fn client() -> reqwest::Client {
    CLIENT.clone()
}
