use crate::utils::errors::LookupError;
use tokio::runtime::Runtime;

/// Creates a lightweight single-threaded Tokio runtime
///
/// All derivation work is synchronous and cheap; the only async work is the
/// track lookup, artwork download and refresh timer, so one thread is enough.
///
/// Returns `Ok(Runtime)` if successful, or `Err(String)` with error message
pub fn create_runtime() -> Result<Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create runtime: {}", e))
}

/// Process exit code for a fatal lookup failure
///
/// Configuration errors map to 2 (usage), everything else to 1.
pub fn exit_code(err: &LookupError) -> i32 {
    match err {
        LookupError::Config(_) => 2,
        _ => 1,
    }
}
