use super::Track;
use crate::constants::DEFAULT_THEME_COLOR;
use crate::visual::Palette;
use serde::Serialize;

/// Document metadata for the now-playing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub favicon: Option<String>,
    pub theme_color: String,
}

impl PageMeta {
    pub fn from_track(track: &Track, palette: Option<&Palette>) -> Self {
        Self {
            title: format!("{} - {}", track.name, track.artist_name()),
            description: format!(
                "Currently playing: {} by {} from the album {}",
                track.name,
                track.artist_name(),
                track.album_name()
            ),
            image: track.cover_url().map(String::from),
            favicon: track.icon_url().map(String::from),
            theme_color: palette
                .map(|p| p.theme_color(DEFAULT_THEME_COLOR))
                .unwrap_or_else(|| DEFAULT_THEME_COLOR.to_string()),
        }
    }
}
