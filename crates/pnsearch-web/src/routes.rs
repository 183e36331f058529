//! Route table and handlers.
//!
//! Every search route binds the raw query string with [`Query::bind`] and
//! then runs the shared pipeline. Query strings are extracted as a list of
//! pairs so that `select` can repeat.

use crate::error::Failure;
use crate::export::{to_csv, ColumnsJson};
use crate::html::{Form, Page};
use crate::state::AppState;
use axum::extract::{Query as Params, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pnsearch_core::{Label, MaterializedView, Output, Query};
use tower_http::trace::TraceLayer;

type RawParams = Params<Vec<(String, String)>>;

/// Rows matched before capping, on every successful search response.
pub const MATCHED_HEADER: &str = "x-matched";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/search", get(search_page))
        .route("/search/", get(search_page))
        .route("/search/ui", get(search_ui))
        .route("/search/json", get(search_json))
        .route("/search/json/columns", get(search_columns))
        .route("/search/csv", get(search_csv))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

async fn index(State(state): State<AppState>) -> Response {
    let pipeline = &state.pipeline;
    let cap = pipeline.limits().display_rows;
    let preview = pipeline.preview(Output::Display);
    let table = preview.to_display_table(pipeline.aliases(), cap);
    let query = Query::new(&state.defaults);
    let labels = pipeline.labels();

    let page = Page::new(format!("トップから{}件を表示", table.rows.len()))
        .form(Some(form(&state, &query, &labels)))
        .table(&table)
        .render();
    Html(page).into_response()
}

async fn search_page(State(state): State<AppState>, Params(params): RawParams) -> Response {
    html_search(&state, &params, false)
}

async fn search_ui(State(state): State<AppState>, Params(params): RawParams) -> Response {
    html_search(&state, &params, true)
}

fn html_search(state: &AppState, params: &[(String, String)], with_form: bool) -> Response {
    let query = match Query::bind(params, &state.defaults) {
        Ok(query) => query,
        Err(e) => {
            let failure = Failure::from(e);
            failure.log();
            let fallback = Query::new(&state.defaults);
            return error_page(state, &failure, with_form.then_some(&fallback));
        }
    };
    // An empty form is a first visit, not a mistake.
    if with_form && query.is_blank() {
        let labels = state.pipeline.labels();
        let page = Page::new("").form(Some(form(state, &query, &labels))).render();
        return Html(page).into_response();
    }

    let pipeline = &state.pipeline;
    let result = match pipeline.search(&query, Output::Display) {
        Ok(result) => result,
        Err(e) => {
            let failure = Failure::from(e);
            failure.log();
            return error_page(state, &failure, with_form.then_some(&query));
        }
    };

    let table = result.to_display_table(pipeline.aliases(), pipeline.limits().display_rows);
    let message = format!("検索結果: {}件中{}件を表示", table.matched, table.rows.len());
    let labels = pipeline.labels();
    let page = Page::new(message)
        .form(with_form.then(|| form(state, &query, &labels)))
        .table(&table)
        .render();
    with_matched(Html(page).into_response(), &result)
}

fn error_page(state: &AppState, failure: &Failure, query: Option<&Query>) -> Response {
    let labels = state.pipeline.labels();
    let page = Page::new(failure.message())
        .form(query.map(|q| form(state, q, &labels)))
        .render();
    (failure.status(), Html(page)).into_response()
}

fn form<'a>(state: &'a AppState, query: &'a Query, labels: &'a [Label]) -> Form<'a> {
    Form {
        query,
        sort_choices: &state.sort_choices,
        labels,
    }
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

async fn search_json(State(state): State<AppState>, Params(params): RawParams) -> Response {
    export(&state, &params, |result, _| {
        let records = result.to_records()?;
        Ok(Json(records).into_response())
    })
}

async fn search_columns(State(state): State<AppState>, Params(params): RawParams) -> Response {
    export(&state, &params, |result, state| {
        Ok(Json(ColumnsJson::new(result, state.pipeline.aliases())).into_response())
    })
}

async fn search_csv(State(state): State<AppState>, Params(params): RawParams) -> Response {
    export(&state, &params, |result, state| {
        let body = to_csv(result, state.pipeline.aliases())?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"pnsearch.csv\""),
            ],
            body,
        )
            .into_response())
    })
}

/// Bind, search under the export cap and encode. Failures become JSON bodies.
fn export<F>(state: &AppState, params: &[(String, String)], encode: F) -> Response
where
    F: FnOnce(&MaterializedView, &AppState) -> Result<Response, Failure>,
{
    let query = match Query::bind(params, &state.defaults) {
        Ok(query) => query,
        Err(e) => return Failure::from(e).into_json(None),
    };
    let result = match state.pipeline.search(&query, Output::Export) {
        Ok(result) => result,
        Err(e) => return Failure::from(e).into_json(Some(&query)),
    };
    match encode(&result, state) {
        Ok(response) => with_matched(response, &result),
        Err(failure) => failure.into_json(Some(&query)),
    }
}

fn with_matched(mut response: Response, result: &MaterializedView) -> Response {
    response
        .headers_mut()
        .insert(MATCHED_HEADER, HeaderValue::from(result.matched()));
    response
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
