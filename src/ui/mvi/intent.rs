//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent changes the coordinator has already decided to
/// apply:
/// - User edits and toggles
/// - Query completions that passed the liveness and staleness checks
pub trait Intent: Send + 'static {}
