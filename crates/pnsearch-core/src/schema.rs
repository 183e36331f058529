//! Declarative field tables for the parts-order dataset.
//!
//! Each searchable request parameter is one row here: the parameter name, the
//! storage column it filters, and accessors into [`Terms`]. Binding and filter
//! assembly both iterate these tables instead of naming fields one by one.

use crate::filter::Presence;
use crate::query::{Query, Terms};

/// A fuzzy-term field.
#[derive(Debug, Clone, Copy)]
pub struct SearchField {
    /// Request parameter name.
    pub param: &'static str,
    /// Storage column the term filters.
    pub column: &'static str,
    pub term: fn(&Terms) -> &str,
    pub term_mut: fn(&mut Terms) -> &mut String,
}

pub const SEARCH_FIELDS: &[SearchField] = &[
    SearchField {
        param: "製番",
        column: "製番",
        term: |t| &t.product_no,
        term_mut: |t| &mut t.product_no,
    },
    SearchField {
        param: "要求番号",
        column: "ユニットNo",
        term: |t| &t.request_no,
        term_mut: |t| &mut t.request_no,
    },
    SearchField {
        param: "品番",
        column: "品番",
        term: |t| &t.part_no,
        term_mut: |t| &mut t.part_no,
    },
    SearchField {
        param: "品名",
        column: "品名",
        term: |t| &t.part_name,
        term_mut: |t| &mut t.part_name,
    },
    SearchField {
        param: "型式",
        column: "形式寸法",
        term: |t| &t.model,
        term_mut: |t| &mut t.model,
    },
    SearchField {
        param: "メーカ",
        column: "メーカ",
        term: |t| &t.maker,
        term_mut: |t| &mut t.maker,
    },
    SearchField {
        param: "仕入先",
        column: "仕入先略称",
        term: |t| &t.vendor,
        term_mut: |t| &mut t.vendor,
    },
];

/// A tri-state null-presence filter over a date-like column.
#[derive(Debug, Clone, Copy)]
pub struct PresenceField {
    pub param: &'static str,
    pub column: &'static str,
    pub state: fn(&Query) -> Presence,
    pub state_mut: fn(&mut Query) -> &mut Presence,
    /// Form values accepted for any / absent / present, in that order.
    pub values: [&'static str; 3],
    /// Human labels for the same three states.
    pub labels: [&'static str; 3],
}

impl PresenceField {
    /// Parse a form value. English state names are accepted as well.
    pub fn parse(&self, value: &str) -> Option<Presence> {
        let [any, absent, present] = self.values;
        match value {
            v if v == any || v == "any" || v.is_empty() => Some(Presence::Any),
            v if v == absent || v == "absent" => Some(Presence::Absent),
            v if v == present || v == "present" => Some(Presence::Present),
            _ => None,
        }
    }

    pub fn value_of(&self, presence: Presence) -> &'static str {
        match presence {
            Presence::Any => self.values[0],
            Presence::Absent => self.values[1],
            Presence::Present => self.values[2],
        }
    }
}

pub const PRESENCE_FIELDS: &[PresenceField] = &[
    PresenceField {
        param: "発注",
        column: "発注日",
        state: |q| q.ordered,
        state_mut: |q| &mut q.ordered,
        values: ["全て", "未発注", "発注済"],
        labels: ["全て", "発注日無し(未発注)", "発注日有り(発注済)"],
    },
    PresenceField {
        param: "納入",
        column: "納入日",
        state: |q| q.delivered,
        state_mut: |q| &mut q.delivered,
        values: ["全て", "未納入", "納入済"],
        labels: ["全て", "納入日 無し(未納入)", "納入日 有り(納入済)"],
    },
];

pub const PARAM_SORT: &str = "orderby";
pub const PARAM_ASC: &str = "asc";
pub const PARAM_OR: &str = "or";
pub const PARAM_SELECT: &str = "select";
