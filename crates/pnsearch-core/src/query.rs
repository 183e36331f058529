//! Query: the sparse search criteria for one request, and [`Query::bind`],
//! which coerces raw request parameters into it.
//!
//! Binding is structural only: booleans and presence states are parsed, every
//! other value is taken as-is. Whether the criteria are empty, or name columns
//! that exist, is decided later by the pipeline.

use crate::dataset::SortDirection;
use crate::error::BindError;
use crate::filter::Presence;
use crate::pattern::Combinator;
use crate::schema::{PARAM_ASC, PARAM_OR, PARAM_SELECT, PARAM_SORT, PRESENCE_FIELDS, SEARCH_FIELDS};
use serde::Serialize;
use std::collections::HashSet;

/// One optional fuzzy term per searchable field. Empty means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Terms {
    pub product_no: String,
    pub request_no: String,
    pub part_no: String,
    pub part_name: String,
    pub model: String,
    pub maker: String,
    pub vendor: String,
}

/// Values a fresh [`Query`] starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDefaults {
    pub sort_column: String,
    pub select: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub terms: Terms,
    pub combinator: Combinator,
    /// Sort column, display or storage name.
    pub sort_column: String,
    pub direction: SortDirection,
    /// Order-placed filter.
    pub ordered: Presence,
    /// Delivery filter.
    pub delivered: Presence,
    /// Display names to project, in order. Empty keeps every column.
    pub select: Vec<String>,
}

impl Query {
    pub fn new(defaults: &QueryDefaults) -> Self {
        Self {
            terms: Terms::default(),
            combinator: Combinator::And,
            sort_column: defaults.sort_column.clone(),
            direction: SortDirection::Descending,
            ordered: Presence::Any,
            delivered: Presence::Any,
            select: defaults.select.clone(),
        }
    }

    /// Bind raw `(name, value)` parameters.
    ///
    /// Scalar parameters take their first occurrence. `select` may repeat;
    /// giving it at all replaces the default projection. Unknown parameters
    /// are ignored.
    pub fn bind<K, V>(params: &[(K, V)], defaults: &QueryDefaults) -> Result<Self, BindError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::new(defaults);
        let mut seen = HashSet::new();
        let mut select: Option<Vec<String>> = None;

        for (name, value) in params {
            let (name, value) = (name.as_ref(), value.as_ref());

            if name == PARAM_SELECT {
                let list = select.get_or_insert_with(Vec::new);
                if !value.is_empty() {
                    list.push(value.to_string());
                }
                continue;
            }
            if !seen.insert(name) {
                continue;
            }

            if let Some(field) = SEARCH_FIELDS.iter().find(|f| f.param == name) {
                *(field.term_mut)(&mut query.terms) = value.to_string();
            } else if let Some(field) = PRESENCE_FIELDS.iter().find(|f| f.param == name) {
                let state = field.parse(value).ok_or_else(|| BindError::InvalidPresence {
                    param: name.to_string(),
                    value: value.to_string(),
                })?;
                *(field.state_mut)(&mut query) = state;
            } else {
                match name {
                    PARAM_SORT if !value.is_empty() => query.sort_column = value.to_string(),
                    PARAM_ASC => {
                        query.direction = SortDirection::from_ascending(parse_bool(name, value)?)
                    }
                    PARAM_OR => {
                        query.combinator = if parse_bool(name, value)? {
                            Combinator::Or
                        } else {
                            Combinator::And
                        }
                    }
                    _ => {}
                }
            }
        }

        if let Some(list) = select {
            query.select = list;
        }
        Ok(query)
    }

    /// True when no term is set and every presence filter is "any".
    pub fn is_blank(&self) -> bool {
        SEARCH_FIELDS
            .iter()
            .all(|f| (f.term)(&self.terms).trim().is_empty())
            && PRESENCE_FIELDS
                .iter()
                .all(|f| (f.state)(self) == Presence::Any)
    }

    /// Back to `(name, value)` parameters, e.g. for links that repeat a search.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        for field in SEARCH_FIELDS {
            let term = (field.term)(&self.terms);
            if !term.is_empty() {
                params.push((field.param.to_string(), term.to_string()));
            }
        }
        for field in PRESENCE_FIELDS {
            let state = (field.state)(self);
            if state != Presence::Any {
                params.push((field.param.to_string(), field.value_of(state).to_string()));
            }
        }
        params.push((PARAM_SORT.to_string(), self.sort_column.clone()));
        if self.direction == SortDirection::Ascending {
            params.push((PARAM_ASC.to_string(), "true".to_string()));
        }
        if self.combinator == Combinator::Or {
            params.push((PARAM_OR.to_string(), "true".to_string()));
        }
        for column in &self.select {
            params.push((PARAM_SELECT.to_string(), column.clone()));
        }
        params
    }
}

/// Boolean spellings accepted by form binding. Empty means false.
fn parse_bool(param: &str, value: &str) -> Result<bool, BindError> {
    match value {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        _ => Err(BindError::InvalidBool {
            param: param.to_string(),
            value: value.to_string(),
        }),
    }
}
