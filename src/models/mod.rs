// Data models for Last.fm API entities and page output

pub mod page;
pub mod responses;
pub mod track;

// Re-export commonly used types
pub use page::PageMeta;
pub use responses::{ApiErrorResponse, RecentTracksResponse};
pub use track::{OneOrMany, TextField, Track, TrackAttr, TrackImage};
