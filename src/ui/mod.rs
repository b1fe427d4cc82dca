pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
