//! Builders for datasets, queries and pipelines.
//!
//! ```rust
//! let ds = DatasetBuilder::new()
//!     .column("品名", &[Some("Alpha"), Some("beta")])
//!     .build();
//! let q = query().part_name("alpha").build();
//! ```

use pnsearch::{
    AliasTable, Column, Combinator, Config, Dataset, Limits, Pipeline, Presence, Query,
    QueryDefaults, SortDirection,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, name: &str, cells: &[Option<&str>]) -> Self {
        let cells = cells.iter().map(|c| c.map(str::to_string)).collect();
        self.columns.push(Column::new(name, cells));
        self
    }

    /// A column with every cell present.
    pub fn filled(self, name: &str, cells: &[&str]) -> Self {
        let cells: Vec<Option<&str>> = cells.iter().copied().map(Some).collect();
        self.column(name, &cells)
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.columns).expect("fixture dataset must be rectangular")
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

pub fn defaults() -> QueryDefaults {
    QueryDefaults {
        sort_column: "登録日".into(),
        select: Vec::new(),
    }
}

/// Start a query with empty criteria, natural order and no projection.
pub fn query() -> QueryBuilder {
    QueryBuilder {
        query: Query::new(&defaults()),
    }
}

pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn product_no(mut self, term: &str) -> Self {
        self.query.terms.product_no = term.into();
        self
    }

    pub fn request_no(mut self, term: &str) -> Self {
        self.query.terms.request_no = term.into();
        self
    }

    pub fn part_no(mut self, term: &str) -> Self {
        self.query.terms.part_no = term.into();
        self
    }

    pub fn part_name(mut self, term: &str) -> Self {
        self.query.terms.part_name = term.into();
        self
    }

    pub fn model(mut self, term: &str) -> Self {
        self.query.terms.model = term.into();
        self
    }

    pub fn maker(mut self, term: &str) -> Self {
        self.query.terms.maker = term.into();
        self
    }

    pub fn or(mut self) -> Self {
        self.query.combinator = Combinator::Or;
        self
    }

    pub fn ordered(mut self, presence: Presence) -> Self {
        self.query.ordered = presence;
        self
    }

    pub fn delivered(mut self, presence: Presence) -> Self {
        self.query.delivered = presence;
        self
    }

    pub fn sort(mut self, column: &str, direction: SortDirection) -> Self {
        self.query.sort_column = column.into();
        self.query.direction = direction;
        self
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.query.select = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Pipeline over `dataset` with the shipped alias table.
pub fn pipeline(dataset: Dataset) -> Pipeline {
    pipeline_with(dataset, Config::defaults().alias_table().unwrap(), Limits::default())
}

pub fn pipeline_with(dataset: Dataset, aliases: AliasTable, limits: Limits) -> Pipeline {
    Pipeline::new(Arc::new(dataset), Arc::new(aliases), "登録日", limits)
}

// ---------------------------------------------------------------------------
// Request URIs
// ---------------------------------------------------------------------------

/// `path?k=v&...` with every key and value percent-encoded.
pub fn uri(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.~".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
