//! Application constants and configuration values

// === Last.fm API ===
pub const LASTFM_API_BASE: &str = "https://ws.audioscrobbler.com";
pub const LASTFM_RECENT_TRACKS_METHOD: &str = "user.getrecenttracks";
pub const LASTFM_ERROR_USER_NOT_FOUND: u32 = 6; // "User not found" / invalid parameters
pub const LASTFM_ERROR_INVALID_API_KEY: u32 = 10;
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Image size convention in track records
pub const IMAGE_INDEX_ICON: usize = 1;
pub const IMAGE_INDEX_COVER: usize = 3;

// === Refresh ===
pub const REFRESH_INTERVAL_SECS: u64 = 5;

// === Palette ===
pub const PALETTE_SIZE: usize = 5;
pub const BRIGHTNESS_MIN: f64 = 30.0; // exclusive
pub const BRIGHTNESS_MAX: f64 = 220.0; // exclusive
pub const FALLBACK_RGB: (u8, u8, u8) = (255, 100, 100);
pub const MIN_COLOR_DISTANCE: f64 = 30.0;
pub const VARIATION_RANGE: f64 = 50.0; // +-25 per channel
pub const VARIATION_ATTEMPTS: usize = 32;

// Random fallback HSL bounds (hue degrees, saturation/lightness percent)
pub const FALLBACK_HUE_MAX: u16 = 360;
pub const FALLBACK_SATURATION: (u8, u8) = (60, 90);
pub const FALLBACK_LIGHTNESS: (u8, u8) = (60, 90);

// === Artwork extraction ===
pub const ARTWORK_SAMPLE_SIZE: u32 = 64;
pub const ARTWORK_QUANT_SHIFT: u8 = 3; // 5 bits per channel

// === Page defaults ===
pub const DEFAULT_THEME_COLOR: &str = "#000000";
