//! Shared request state.

use pnsearch_core::{Pipeline, QueryDefaults};
use std::sync::Arc;

/// Everything a handler needs, built once before the listener is bound.
/// Cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub defaults: Arc<QueryDefaults>,
    /// Columns offered in the sort dropdown.
    pub sort_choices: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, defaults: QueryDefaults, sort_choices: Vec<String>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            defaults: Arc::new(defaults),
            sort_choices: Arc::new(sort_choices),
        }
    }
}
