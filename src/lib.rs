//! pnsearch: fuzzy multi-field search over an in-memory parts-order table.
//!
//! The binary loads one table at startup and serves it over HTTP. This crate
//! re-exports the workspace crates so that integration tests and benches can
//! reach every layer from one place.
//!
//! # Architecture
//!
//! ```text
//! load ──► Dataset ──► Pipeline ──► web
//!                        │
//!             AliasTable ┘
//! ```

pub use pnsearch_core::config::Config;
pub use pnsearch_core::*;
pub use pnsearch_load as load;
pub use pnsearch_web as web;

use anyhow::Context;
use std::sync::Arc;

/// Load the dataset named by `config` and build the shared request state.
pub fn bootstrap(config: &Config) -> anyhow::Result<web::AppState> {
    let dataset = load::load(&config.dataset.path, &config.dataset.query)
        .with_context(|| format!("loading dataset {}", config.dataset.path.display()))?;
    let aliases = config.alias_table().context("building alias table")?;
    aliases
        .check_columns(&dataset.column_names())
        .context("checking aliases against the dataset")?;
    let presorted = load::presorted(&config.dataset.path, &config.dataset.query);
    tracing::info!(
        rows = dataset.len(),
        columns = dataset.width(),
        aliases = aliases.len(),
        "dataset ready"
    );

    let pipeline = Pipeline::new(
        Arc::new(dataset),
        Arc::new(aliases),
        config.search.natural_order.clone(),
        config.limits(),
    )
    .presorted(presorted);
    Ok(web::AppState::new(
        pipeline,
        config.query_defaults(),
        config.search.sort_choices.clone(),
    ))
}
