//! Error types shared by the search pipeline.
//!
//! Every failure a request can hit is a value. The web layer picks the status
//! code and message from [`SearchError::kind`] / [`BindError`], so the
//! variants here must stay distinguishable.

use thiserror::Error;

/// Pipeline errors, from filter assembly through record conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Every term empty and every presence filter set to "any".
    #[error("no search keywords were given")]
    NoCriteria,
    /// The criteria were well formed but matched nothing.
    #[error("no rows matched the search")]
    NoResults,
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("search term could not be compiled: {0}")]
    InvalidPattern(String),
    /// The view's shape disagrees with the fixed [`Record`](crate::Record)
    /// schema. This is a server-side contract failure, not bad input.
    #[error("record schema mismatch: {0}")]
    SchemaMismatch(String),
}

impl SearchError {
    /// Stable machine-readable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::NoCriteria => "no_criteria",
            SearchError::NoResults => "no_results",
            SearchError::UnknownColumn(_) => "unknown_column",
            SearchError::InvalidPattern(_) => "invalid_pattern",
            SearchError::SchemaMismatch(_) => "schema_mismatch",
        }
    }

    /// True when the error points at the server, not the request.
    pub fn is_internal(&self) -> bool {
        matches!(self, SearchError::SchemaMismatch(_))
    }
}

/// Raw request parameters that could not be coerced into a
/// [`Query`](crate::Query).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("parameter `{param}`: `{value}` is not a boolean")]
    InvalidBool { param: String, value: String },
    #[error("parameter `{param}`: unknown state `{value}`")]
    InvalidPresence { param: String, value: String },
}

impl BindError {
    pub fn kind(&self) -> &'static str {
        "bad_query"
    }
}
