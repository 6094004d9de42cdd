pub mod artwork;
pub mod error_handling;
pub mod errors;
pub mod http;

// Re-export commonly used types
pub use artwork::{ArtworkExtractor, ColorExtractor, ExtractedColors};
pub use error_handling::{create_runtime, exit_code};
pub use errors::{ColorError, ConfigError, ExtractionError, LookupError};
