//! pnsearch-web: axum front end.
//!
//! Routes bind the request parameters, run the shared [`Pipeline`] and render
//! the result as HTML, JSON or CSV.
//!
//! | route | output |
//! |-------|--------|
//! | `GET /` | first rows of the whole dataset |
//! | `GET /search/` | result table |
//! | `GET /search/ui` | result table with the search form |
//! | `GET /search/json` | array of [`Record`](pnsearch_core::Record)s |
//! | `GET /search/json/columns` | object of column arrays, any projection |
//! | `GET /search/csv` | CSV |
//! | `GET /health` | liveness |

pub mod error;
pub mod export;
pub mod html;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use tokio::net::TcpListener;

pub use routes::router;
pub use state::AppState;

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "pnsearch listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
