//! Word backend access.
//!
//! The coordinator only depends on the [`WordService`] trait; the HTTP
//! implementation talks to the `/closest`, `/definitions` and
//! `/associations` endpoints.

mod client;
mod error;
mod types;

pub use client::{HttpWordService, WordService};
pub use error::BackendError;
pub use types::{
    AdvancedConfig, Association, AssociationResult, ClosestWord, DictionaryEntry, WordSplit,
    DEFAULT_ASSOCIATIONS_LIMIT,
};
