/// Services module - orchestration layer
///
/// Services hold the stateful glue between the Last.fm lookup, the visual
/// derivation pipeline and the render backends.

pub mod orchestrator;
pub mod refresh;
pub mod session;

// Re-export commonly used types
pub use orchestrator::GradientOrchestrator;
pub use refresh::{RefreshTick, RefreshTimer};
pub use session::GradientSession;
