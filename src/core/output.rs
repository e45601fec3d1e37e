//! Outcome tallies shared by the batch stages of the renamer.
//!
//! Each stage walks a list of items, records what happened to every one of
//! them, and keeps going on failure. The tally is the stage's return value.

use serde::{Deserialize, Serialize};

/// Summary of a batch stage (moves, reference rewrites, metadata removal).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub succeeded: u32,
    pub skipped: u32,
    pub errors: u32,
    pub items: Vec<BatchResultItem>,
}

/// Individual item result within a batch stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResultItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, id: String, target: Option<String>, status: &str) {
        self.succeeded += 1;
        self.items.push(BatchResultItem {
            id,
            target,
            status: status.to_string(),
            error: None,
        });
    }

    pub fn record_skipped(&mut self, id: String, target: Option<String>) {
        self.skipped += 1;
        self.items.push(BatchResultItem {
            id,
            target,
            status: "skipped".to_string(),
            error: None,
        });
    }

    pub fn record_error(&mut self, id: String, target: Option<String>, error: String) {
        self.errors += 1;
        self.items.push(BatchResultItem {
            id,
            target,
            status: "error".to_string(),
            error: Some(error),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Items that failed, in the order they were recorded.
    pub fn failures(&self) -> impl Iterator<Item = &BatchResultItem> {
        self.items.iter().filter(|item| item.error.is_some())
    }

    /// Items with the given success status, in the order they were recorded.
    pub fn with_status<'a>(&'a self, status: &'a str) -> impl Iterator<Item = &'a BatchResultItem> {
        self.items.iter().filter(move |item| item.status == status)
    }
}
