pub mod backend;
pub mod config;
pub mod coordinator;
pub mod logging;
pub mod ui;
