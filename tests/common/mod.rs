//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_service;
pub mod mock_backend;

use memorizer::backend::{Association, AssociationResult, DictionaryEntry, WordSplit};
use memorizer::config::{BackendConfig, Config};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn backend_config(base_url: &str) -> BackendConfig {
    BackendConfig {
        base_url: base_url.to_string(),
        ..Config::default().backend
    }
}

pub fn entry(word: &str, definitions: &[&str]) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        definitions: definitions.iter().map(|d| d.to_string()).collect(),
    }
}

/// Single-split association result.
pub fn associations(word: &str, names: &[&str]) -> AssociationResult {
    AssociationResult {
        splits: vec![WordSplit {
            word: word.to_string(),
            associations: names
                .iter()
                .map(|name| Association {
                    name: name.to_string(),
                })
                .collect(),
        }],
    }
}
