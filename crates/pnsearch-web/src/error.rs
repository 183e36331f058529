//! Request failures and how they map onto HTTP.
//!
//! Bad input (binding errors and the user-facing pipeline errors) is a 400;
//! a record schema mismatch or an encoding failure is a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pnsearch_core::{BindError, Query, SearchError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

impl Failure {
    pub fn status(&self) -> StatusCode {
        match self {
            Failure::Bind(_) => StatusCode::BAD_REQUEST,
            Failure::Search(e) if e.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            Failure::Search(_) => StatusCode::BAD_REQUEST,
            Failure::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Bind(e) => e.kind(),
            Failure::Search(e) => e.kind(),
            Failure::Csv(_) => "encoding",
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> String {
        match self {
            Failure::Bind(e) => format!("不正なクエリです: {e}"),
            Failure::Search(SearchError::NoCriteria) => "検索キーワードがありません".to_string(),
            Failure::Search(SearchError::NoResults) => "検索結果がありません".to_string(),
            Failure::Search(SearchError::UnknownColumn(column)) => {
                format!("選択した列名がありません: {column}")
            }
            other => other.to_string(),
        }
    }

    /// JSON body carrying the message, the kind and, when binding got that
    /// far, the query.
    pub fn into_json(self, query: Option<&Query>) -> Response {
        self.log();
        let status = self.status();
        let body = ErrorBody {
            msg: self.message(),
            kind: self.kind(),
            query,
        };
        (status, Json(body)).into_response()
    }

    pub fn log(&self) {
        if self.status().is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "request rejected");
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        self.into_json(None)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    msg: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a Query>,
}
