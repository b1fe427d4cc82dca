//! Model-View-Intent (MVI) architecture primitives.
//!
//! The view model is only ever changed by running a reducer over an
//! intent. The coordinator owns the state and dispatches intents; the
//! rendering side only reads published snapshots.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── Coordinator ─────────┘
//! ```
//!
//! - **State**: Immutable representation of the view model
//! - **Intent**: Accepted user actions or query completions
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
