//! Filter assembler: builds the per-field clauses for a [`Query`] and combines
//! them with AND or OR.
//!
//! One fuzzy clause is emitted per non-empty search term and one null-presence
//! clause per presence filter that is not [`Presence::Any`]. A query that
//! produces no clause at all is rejected with [`SearchError::NoCriteria`]; it
//! must never turn into a scan that matches everything.

use crate::dataset::Dataset;
use crate::error::SearchError;
use crate::pattern::{Combinator, FuzzyPattern, PatternError};
use crate::query::Query;
use crate::schema::{PRESENCE_FIELDS, SEARCH_FIELDS};
use serde::Serialize;

/// Tri-state null-presence filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    #[default]
    Any,
    Present,
    Absent,
}

/// A test over one cell.
#[derive(Debug, Clone)]
pub enum Predicate {
    Matches(FuzzyPattern),
    IsPresent,
    IsAbsent,
}

impl Predicate {
    pub fn test(&self, cell: Option<&str>) -> bool {
        match self {
            Predicate::Matches(pattern) => pattern.is_match(cell),
            Predicate::IsPresent => cell.is_some(),
            Predicate::IsAbsent => cell.is_none(),
        }
    }

    /// The clause for `presence`, or `None` for [`Presence::Any`].
    pub fn for_presence(presence: Presence) -> Option<Self> {
        match presence {
            Presence::Any => None,
            Presence::Present => Some(Predicate::IsPresent),
            Presence::Absent => Some(Predicate::IsAbsent),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterClause {
    pub column: String,
    pub predicate: Predicate,
}

impl FilterClause {
    pub fn new(column: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            column: column.into(),
            predicate,
        }
    }
}

/// Clauses plus the combinator that joins them.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    clauses: Vec<FilterClause>,
    combinator: Combinator,
}

impl FilterSet {
    pub fn new(clauses: Vec<FilterClause>, combinator: Combinator) -> Self {
        Self {
            clauses,
            combinator,
        }
    }

    /// Build the clause set for `query`.
    pub fn assemble(query: &Query) -> Result<Self, SearchError> {
        let mode = query.combinator;
        let mut clauses = Vec::new();

        for field in SEARCH_FIELDS {
            let term = (field.term)(&query.terms);
            if term.is_empty() {
                continue;
            }
            match FuzzyPattern::compile(term, mode) {
                Ok(pattern) => {
                    clauses.push(FilterClause::new(field.column, Predicate::Matches(pattern)))
                }
                Err(PatternError::Empty) => continue,
                Err(PatternError::Regex(e)) => {
                    return Err(SearchError::InvalidPattern(e.to_string()))
                }
            }
        }

        for field in PRESENCE_FIELDS {
            if let Some(predicate) = Predicate::for_presence((field.state)(query)) {
                clauses.push(FilterClause::new(field.column, predicate));
            }
        }

        if clauses.is_empty() {
            return Err(SearchError::NoCriteria);
        }
        tracing::debug!(clauses = clauses.len(), mode = ?mode, "filters assembled");
        Ok(Self::new(clauses, mode))
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Resolve clause columns against `dataset`.
    pub fn bind<'a>(&'a self, dataset: &'a Dataset) -> Result<BoundFilter<'a>, SearchError> {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| {
                dataset
                    .column(&clause.column)
                    .map(|column| (column, &clause.predicate))
                    .ok_or_else(|| SearchError::UnknownColumn(clause.column.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BoundFilter {
            clauses,
            combinator: self.combinator,
        })
    }
}

/// A [`FilterSet`] whose columns have been looked up in a dataset.
pub struct BoundFilter<'a> {
    clauses: Vec<(&'a crate::dataset::Column, &'a Predicate)>,
    combinator: Combinator,
}

impl BoundFilter<'_> {
    /// Evaluate against dataset row `row`. An empty AND set accepts every row,
    /// an empty OR set rejects every row.
    pub fn matches(&self, row: usize) -> bool {
        let mut results = self
            .clauses
            .iter()
            .map(|(column, predicate)| predicate.test(column.get(row)));
        match self.combinator {
            Combinator::And => results.all(|hit| hit),
            Combinator::Or => results.any(|hit| hit),
        }
    }
}
