//! The query-to-result pipeline.
//!
//! ```text
//! Query ──► FilterSet ──► filter ──► sort ──► select ──► MaterializedView
//!             │                                 │
//!             └──────────── AliasTable ─────────┘
//! ```
//!
//! A [`Pipeline`] owns the shared, read-only dataset and alias table. It is
//! built once at startup and then used concurrently by every request; all of
//! the per-request state lives on the stack of [`Pipeline::search`].

use crate::alias::{AliasTable, Label};
use crate::dataset::{Dataset, SortDirection, View};
use crate::error::SearchError;
use crate::filter::FilterSet;
use crate::materialize::{Limits, MaterializedView, Output};
use crate::query::Query;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Pipeline {
    dataset: Arc<Dataset>,
    aliases: Arc<AliasTable>,
    natural_order: String,
    presorted: bool,
    limits: Limits,
}

impl Pipeline {
    /// `natural_order` is the column the dataset was loaded in, descending.
    /// Use [`Pipeline::presorted`] when the source does not guarantee that.
    pub fn new(
        dataset: Arc<Dataset>,
        aliases: Arc<AliasTable>,
        natural_order: impl Into<String>,
        limits: Limits,
    ) -> Self {
        Self {
            dataset,
            aliases,
            natural_order: natural_order.into(),
            presorted: true,
            limits,
        }
    }

    /// Whether the dataset rows already follow the natural order. When they
    /// do not, a descending natural-order sort is carried out like any other.
    pub fn presorted(mut self, presorted: bool) -> Self {
        self.presorted = presorted;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn natural_order(&self) -> &str {
        &self.natural_order
    }

    /// Run `query` and materialize the result under the cap for `output`.
    pub fn search(&self, query: &Query, output: Output) -> Result<MaterializedView, SearchError> {
        let view = self.view(query)?;
        let result = MaterializedView::from_view(&view, self.limits.cap(output));
        tracing::debug!(
            matched = result.matched(),
            returned = result.len(),
            columns = result.width(),
            "search materialized"
        );
        Ok(result)
    }

    /// Filter, sort and project without materializing.
    pub fn view(&self, query: &Query) -> Result<View<'_>, SearchError> {
        let filters = FilterSet::assemble(query)?;
        let filtered = self.dataset.filter(&filters)?;
        tracing::debug!(rows = filtered.len(), of = self.dataset.len(), "filtered");
        if filtered.is_empty() {
            return Err(SearchError::NoResults);
        }

        let sorted = self.sort(filtered, &query.sort_column, query.direction)?;
        self.project(sorted, &query.select)
    }

    /// Sort by `column` (display or storage name). Descending on the natural
    /// order column of a presorted dataset is the load order already, so the
    /// rows are left alone.
    pub fn sort<'a>(
        &self,
        view: View<'a>,
        column: &str,
        direction: SortDirection,
    ) -> Result<View<'a>, SearchError> {
        let column = self.aliases.to_storage(column);
        if !view.contains(column) {
            return Err(SearchError::UnknownColumn(column.to_string()));
        }
        if self.presorted
            && column == self.natural_order
            && direction == SortDirection::Descending
        {
            return Ok(view);
        }
        let sorted = view.sort(column, direction)?;
        tracing::debug!(column, ?direction, "sorted");
        Ok(sorted)
    }

    /// Restrict to the display names in `select`; an empty list keeps every
    /// column.
    pub fn project<'a, S: AsRef<str>>(
        &self,
        view: View<'a>,
        select: &[S],
    ) -> Result<View<'a>, SearchError> {
        if select.is_empty() {
            return Ok(view);
        }
        view.select(&self.aliases.storage_names(select))
    }

    /// The leading rows of the whole dataset, for the landing page.
    pub fn preview(&self, output: Output) -> MaterializedView {
        MaterializedView::from_view(&self.dataset.view(), self.limits.cap(output))
    }

    /// Display/storage label for every dataset column, in load order.
    pub fn labels(&self) -> Vec<Label> {
        self.aliases.labels(&self.dataset.column_names())
    }
}
