//! Runtime configuration: environment (optionally from `.env`) plus
//! per-request overrides.

use crate::constants::{LASTFM_API_BASE, REFRESH_INTERVAL_SECS};
use crate::utils::errors::ConfigError;
use std::time::Duration;

pub const ENV_API_KEY: &str = "LASTFM_API_KEY";
pub const ENV_USERS: &str = "LASTFM_USERS";
pub const ENV_API_BASE: &str = "LASTFM_API_BASE";
pub const ENV_REFRESH_SECS: &str = "LASTFM_REFRESH_SECS";

/// Environment-level defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    /// Candidate usernames; the first one is used by default
    pub usernames: Vec<String>,
    pub api_base: String,
    pub refresh_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            usernames: Vec::new(),
            api_base: LASTFM_API_BASE.to_string(),
            refresh_interval: Duration::from_secs(REFRESH_INTERVAL_SECS),
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read settings from the process environment
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("[Config] Loaded {}", path.display()),
            Err(e) if e.not_found() => log::debug!("[Config] No .env file found"),
            Err(e) => log::warn!("[Config] Failed to load .env file: {}", e),
        }
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build settings from any key/value source (the environment in production)
    pub fn from_source<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let usernames = non_empty(ENV_USERS)
            .map(|users| {
                users
                    .split(',')
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let refresh_interval = match non_empty(ENV_REFRESH_SECS).map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                log::warn!(
                    "[Config] Ignoring invalid {}, using {}s",
                    ENV_REFRESH_SECS,
                    REFRESH_INTERVAL_SECS
                );
                defaults.refresh_interval
            }
            None => defaults.refresh_interval,
        };

        Self {
            api_key: non_empty(ENV_API_KEY),
            usernames,
            api_base: non_empty(ENV_API_BASE).unwrap_or(defaults.api_base),
            refresh_interval,
        }
    }

    pub fn default_username(&self) -> Option<&str> {
        self.usernames.first().map(String::as_str)
    }

    /// Combine request overrides with environment defaults.
    ///
    /// A username supplied in the request without an API key in the same
    /// request is rejected even when the environment has a key.
    pub fn resolve(&self, request: &RequestParams) -> Result<Credentials, ConfigError> {
        if request.username.is_some() && request.api_key.is_none() {
            return Err(ConfigError::UsernameWithoutApiKey);
        }

        let api_key = request
            .api_key
            .clone()
            .or_else(|| self.api_key.clone())
            .ok_or(ConfigError::MissingApiKey)?;

        let username = request
            .username
            .clone()
            .or_else(|| self.default_username().map(String::from))
            .ok_or(ConfigError::MissingUsername)?;

        Ok(Credentials { api_key, username })
    }
}

/// Per-request overrides (`apiKey`, `username`). Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub api_key: Option<String>,
    pub username: Option<String>,
}

impl RequestParams {
    pub fn new(api_key: Option<String>, username: Option<String>) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            api_key: keep(api_key),
            username: keep(username),
        }
    }

    /// Parse a URL query string such as `apiKey=abc&username=rj`
    pub fn from_query(query: &str) -> Self {
        let mut api_key = None;
        let mut username = None;

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(&value.replace('+', " "))
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            match key {
                "apiKey" => api_key = Some(value),
                "username" => username = Some(value),
                _ => {}
            }
        }

        Self::new(api_key, username)
    }
}

/// Fully resolved credentials for one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_source(|key| map.get(key).cloned())
    }

    #[test]
    fn reads_environment_with_defaults() {
        let s = settings(&[(ENV_API_KEY, "key"), (ENV_USERS, "alice, bob ,")]);
        assert_eq!(s.api_key.as_deref(), Some("key"));
        assert_eq!(s.usernames, vec!["alice", "bob"]);
        assert_eq!(s.default_username(), Some("alice"));
        assert_eq!(s.api_base, LASTFM_API_BASE);
        assert_eq!(s.refresh_interval, Duration::from_secs(5));
    }

    #[test]
    fn invalid_refresh_interval_falls_back() {
        assert_eq!(
            settings(&[(ENV_REFRESH_SECS, "0")]).refresh_interval,
            Duration::from_secs(REFRESH_INTERVAL_SECS)
        );
        assert_eq!(
            settings(&[(ENV_REFRESH_SECS, "soon")]).refresh_interval,
            Duration::from_secs(REFRESH_INTERVAL_SECS)
        );
        assert_eq!(
            settings(&[(ENV_REFRESH_SECS, "12")]).refresh_interval,
            Duration::from_secs(12)
        );
    }

    #[test]
    fn request_overrides_environment() {
        let s = settings(&[(ENV_API_KEY, "env-key"), (ENV_USERS, "alice")]);
        let creds = s
            .resolve(&RequestParams::new(Some("req-key".into()), Some("bob".into())))
            .unwrap();
        assert_eq!(creds.api_key, "req-key");
        assert_eq!(creds.username, "bob");
    }

    #[test]
    fn environment_used_without_request_params() {
        let s = settings(&[(ENV_API_KEY, "env-key"), (ENV_USERS, "alice,bob")]);
        let creds = s.resolve(&RequestParams::default()).unwrap();
        assert_eq!(
            creds,
            Credentials { api_key: "env-key".into(), username: "alice".into() }
        );
    }

    #[test]
    fn username_without_api_key_is_rejected() {
        let s = settings(&[(ENV_API_KEY, "env-key")]);
        let err = s.resolve(&RequestParams::new(None, Some("bob".into()))).unwrap_err();
        assert_eq!(err, ConfigError::UsernameWithoutApiKey);
    }

    #[test]
    fn missing_key_and_username_are_distinct() {
        let empty = settings(&[]);
        assert_eq!(
            empty.resolve(&RequestParams::default()).unwrap_err(),
            ConfigError::MissingApiKey
        );
        let key_only = settings(&[(ENV_API_KEY, "k")]);
        assert_eq!(
            key_only.resolve(&RequestParams::default()).unwrap_err(),
            ConfigError::MissingUsername
        );
    }

    #[test]
    fn query_string_parsing() {
        let params = RequestParams::from_query("?apiKey=abc%20123&username=rj&x=1");
        assert_eq!(params.api_key.as_deref(), Some("abc 123"));
        assert_eq!(params.username.as_deref(), Some("rj"));

        let blank = RequestParams::from_query("apiKey=&username=");
        assert_eq!(blank, RequestParams::default());
    }
}
