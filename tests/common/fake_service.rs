//! Scripted in-process `WordService`.
//!
//! Each (query, term) pair can be given a delay and a reply. Delays use
//! `tokio::time::sleep`, so paused-time tests control completion order.
//! Unscripted terms answer immediately with an echo of the term.

#![allow(dead_code)]

use async_trait::async_trait;
use memorizer::backend::{
    AdvancedConfig, AssociationResult, BackendError, ClosestWord, DictionaryEntry, WordService,
};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Closest(String),
    Definitions(String),
    Associations(String, AdvancedConfig),
}

#[derive(Clone)]
struct Reply<T> {
    delay: Duration,
    result: Result<T, u16>,
}

#[derive(Default)]
pub struct FakeWordService {
    closest: Mutex<HashMap<String, Reply<ClosestWord>>>,
    definitions: Mutex<HashMap<String, Reply<DictionaryEntry>>>,
    associations: Mutex<HashMap<String, Reply<AssociationResult>>>,
    definitions_panicking: Mutex<HashSet<String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeWordService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn closest_replies(&self, term: &str, word: &str, delay: Duration) {
        self.closest.lock().insert(
            term.to_string(),
            Reply {
                delay,
                result: Ok(ClosestWord {
                    word: word.to_string(),
                }),
            },
        );
    }

    pub fn closest_fails(&self, term: &str, delay: Duration) {
        self.closest.lock().insert(
            term.to_string(),
            Reply {
                delay,
                result: Err(500),
            },
        );
    }

    pub fn definitions_reply(&self, term: &str, entry: DictionaryEntry, delay: Duration) {
        self.definitions.lock().insert(
            term.to_string(),
            Reply {
                delay,
                result: Ok(entry),
            },
        );
    }

    pub fn definitions_fail(&self, term: &str, delay: Duration) {
        self.definitions.lock().insert(
            term.to_string(),
            Reply {
                delay,
                result: Err(500),
            },
        );
    }

    /// Make the definitions call for `term` panic instead of answering.
    pub fn definitions_panic(&self, term: &str) {
        self.definitions_panicking.lock().insert(term.to_string());
    }

    pub fn associations_reply(&self, term: &str, result: AssociationResult, delay: Duration) {
        self.associations.lock().insert(
            term.to_string(),
            Reply {
                delay,
                result: Ok(result),
            },
        );
    }

    pub fn associations_fail(&self, term: &str, delay: Duration) {
        self.associations.lock().insert(
            term.to_string(),
            Reply {
                delay,
                result: Err(503),
            },
        );
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn closest_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Closest(term) => Some(term),
                _ => None,
            })
            .collect()
    }

    async fn answer<T: Clone>(
        endpoint: &str,
        scripted: Option<Reply<T>>,
        fallback: T,
    ) -> Result<T, BackendError> {
        let reply = scripted.unwrap_or(Reply {
            delay: Duration::ZERO,
            result: Ok(fallback),
        });
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result.map_err(|status| BackendError::Status {
            endpoint: endpoint.to_string(),
            status,
        })
    }
}

#[async_trait]
impl WordService for FakeWordService {
    async fn closest(&self, word: &str) -> Result<ClosestWord, BackendError> {
        self.calls.lock().push(Call::Closest(word.to_string()));
        let scripted = self.closest.lock().get(word).cloned();
        let fallback = ClosestWord {
            word: word.to_string(),
        };
        Self::answer("/closest", scripted, fallback).await
    }

    async fn definitions(&self, word: &str) -> Result<DictionaryEntry, BackendError> {
        self.calls.lock().push(Call::Definitions(word.to_string()));
        if self.definitions_panicking.lock().contains(word) {
            panic!("definitions backend crashed for {word}");
        }
        let scripted = self.definitions.lock().get(word).cloned();
        let fallback = DictionaryEntry {
            word: word.to_string(),
            definitions: Vec::new(),
        };
        Self::answer("/definitions", scripted, fallback).await
    }

    async fn associations(
        &self,
        word: &str,
        config: AdvancedConfig,
    ) -> Result<AssociationResult, BackendError> {
        self.calls
            .lock()
            .push(Call::Associations(word.to_string(), config));
        let scripted = self.associations.lock().get(word).cloned();
        Self::answer("/associations", scripted, AssociationResult::default()).await
    }
}
