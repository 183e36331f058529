//! pnsearch-core: the search pipeline behind pnsearch.
//!
//! This crate holds everything between "raw request parameters" and "rows to
//! render": the in-memory dataset, the alias table, the predicate compiler,
//! filter assembly, sorting, projection and materialization.
//!
//! # Architecture
//!
//! ```text
//! params ──► Query ──► FilterSet ──► View (filter ─► sort ─► select) ──► MaterializedView
//!                          │                                   │
//!                          └─────────── AliasTable ────────────┘
//! ```
//!
//! The [`Dataset`] and [`AliasTable`] are built once and shared read-only;
//! everything else is created per request.

pub mod alias;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod materialize;
pub mod pattern;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod schema;

pub use alias::{AliasError, AliasTable, Label};
pub use dataset::{Column, Dataset, DatasetError, SortDirection, View};
pub use error::{BindError, SearchError};
pub use filter::{FilterClause, FilterSet, Predicate, Presence};
pub use materialize::{DisplayTable, Limits, MaterializedView, Output};
pub use pattern::{Combinator, FuzzyPattern};
pub use pipeline::Pipeline;
pub use query::{Query, QueryDefaults, Terms};
pub use record::Record;
