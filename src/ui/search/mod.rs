//! Search view-model feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - View model read by renderers
//! - `intent.rs` - Accepted changes
//! - `reducer.rs` - State transitions
//! - `definition.rs` - Definition display parsing

mod definition;
mod intent;
mod reducer;
mod state;

pub use definition::Definition;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::ViewState;
