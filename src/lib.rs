//! Now-playing gradient: turns a Last.fm user's current track into an
//! animated-gradient configuration (five-color palette plus motion
//! parameters) and keeps it in sync on a fixed refresh interval.

pub mod api;
pub mod config;
pub mod constants;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;
pub mod visual;
