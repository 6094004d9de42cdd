use crate::constants::{IMAGE_INDEX_COVER, IMAGE_INDEX_ICON};
use serde::{Deserialize, Serialize};

/// Last.fm wraps plain strings as `{"#text": "..."}`
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    #[serde(rename = "#text", default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbid: Option<String>,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), mbid: None }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TrackImage {
    #[serde(default)]
    pub size: String,
    #[serde(rename = "#text", default)]
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TrackAttr {
    #[serde(default)]
    pub nowplaying: Option<String>,
}

/// One entry of `user.getrecenttracks`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: TextField,
    #[serde(default)]
    pub album: TextField,
    #[serde(default)]
    pub image: Vec<TrackImage>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "@attr", default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<TrackAttr>,
}

impl Track {
    pub fn artist_name(&self) -> &str {
        &self.artist.text
    }

    /// Album display name, used as the gradient seed
    pub fn album_name(&self) -> &str {
        &self.album.text
    }

    pub fn is_now_playing(&self) -> bool {
        self.attr
            .as_ref()
            .and_then(|a| a.nowplaying.as_deref())
            .is_some_and(|v| v == "true")
    }

    fn image_url(&self, index: usize) -> Option<&str> {
        self.image
            .get(index)
            .map(|img| img.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Large cover image (index 3)
    pub fn cover_url(&self) -> Option<&str> {
        self.image_url(IMAGE_INDEX_COVER)
    }

    /// Small icon-sized image (index 1)
    pub fn icon_url(&self) -> Option<&str> {
        self.image_url(IMAGE_INDEX_ICON)
    }

    /// Reason the record is unusable, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("missing track name".to_string());
        }
        if self.artist.text.trim().is_empty() {
            return Err("missing artist".to_string());
        }
        if self.image.is_empty() {
            return Err("missing image list".to_string());
        }
        Ok(())
    }
}

/// `track` is an array normally but a bare object when only one is returned
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "artist": {"mbid": "", "#text": "The Beatles"},
            "name": "Come Together",
            "album": {"mbid": "", "#text": "Abbey Road"},
            "image": [
                {"size": "small", "#text": "https://img/34s.png"},
                {"size": "medium", "#text": "https://img/64s.png"},
                {"size": "large", "#text": "https://img/174s.png"},
                {"size": "extralarge", "#text": "https://img/300x300.png"}
            ],
            "url": "https://www.last.fm/music/The+Beatles/_/Come+Together",
            "@attr": {"nowplaying": "true"}
        })
    }

    #[test]
    fn parses_lastfm_track() {
        let track: Track = serde_json::from_value(sample()).unwrap();
        assert_eq!(track.name, "Come Together");
        assert_eq!(track.artist_name(), "The Beatles");
        assert_eq!(track.album_name(), "Abbey Road");
        assert_eq!(track.icon_url(), Some("https://img/64s.png"));
        assert_eq!(track.cover_url(), Some("https://img/300x300.png"));
        assert!(track.is_now_playing());
        assert!(track.validate().is_ok());
    }

    #[test]
    fn empty_image_urls_are_absent() {
        let mut value = sample();
        value["image"][3]["#text"] = json!("");
        let track: Track = serde_json::from_value(value).unwrap();
        assert_eq!(track.cover_url(), None);
    }

    #[test]
    fn validate_reports_missing_fields() {
        let mut value = sample();
        value["image"] = json!([]);
        let track: Track = serde_json::from_value(value).unwrap();
        assert_eq!(track.validate().unwrap_err(), "missing image list");

        let bare: Track = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(bare.validate().unwrap_err(), "missing artist");
    }

    #[test]
    fn one_or_many_accepts_object_or_array() {
        let one: OneOrMany<Track> = serde_json::from_value(sample()).unwrap();
        assert_eq!(one.into_vec().len(), 1);
        let many: OneOrMany<Track> = serde_json::from_value(json!([sample(), sample()])).unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }
}
