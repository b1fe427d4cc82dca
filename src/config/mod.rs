//! Configuration model and loading.
//!
//! Settings live in a TOML file under the platform config directory.
//! A missing file means "use defaults"; CLI flags may override fields
//! after loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, SearchConfig};
