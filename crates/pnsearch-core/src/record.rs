//! Fixed-schema record for structured JSON output.
//!
//! A [`Record`] has one field per column of the default result projection.
//! Conversion from a materialized view only succeeds when the view has exactly
//! that many columns and every one of them is present; anything else is a
//! [`SearchError::SchemaMismatch`], never a partially filled record.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// Storage columns a [`Record`] is built from, in field order.
pub const RECORD_COLUMNS: [&str; Record::WIDTH] = [
    "発注日",
    "納入日",
    "ユニットNo",
    "メーカ",
    "材質",
    "品名",
    "形式寸法",
    "必要数",
    "部品発注数",
    "発注単価",
    "発注金額",
    "工程名",
    "納入場所名",
];

/// One result row, serialized under the display names users see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "発注日")]
    pub order_date: String,
    #[serde(rename = "納入日")]
    pub delivery_date: String,
    #[serde(rename = "要求番号")]
    pub request_no: String,
    #[serde(rename = "メーカ")]
    pub maker: String,
    #[serde(rename = "装置名")]
    pub equipment: String,
    #[serde(rename = "品名")]
    pub part_name: String,
    #[serde(rename = "型式")]
    pub model: String,
    #[serde(rename = "必要数")]
    pub required_qty: String,
    #[serde(rename = "発注数")]
    pub order_qty: String,
    #[serde(rename = "発注単価")]
    pub unit_price: String,
    #[serde(rename = "発注金額")]
    pub amount: String,
    #[serde(rename = "工程名")]
    pub process: String,
    #[serde(rename = "納入場所")]
    pub delivery_place: String,
}

impl Record {
    pub const WIDTH: usize = 13;

    /// Map each [`RECORD_COLUMNS`] entry to its position in `columns`.
    pub fn layout<S: AsRef<str>>(columns: &[S]) -> Result<[usize; Record::WIDTH], SearchError> {
        if columns.len() != Self::WIDTH {
            return Err(SearchError::SchemaMismatch(format!(
                "expected {} columns, view has {}",
                Self::WIDTH,
                columns.len()
            )));
        }
        let mut layout = [0; Self::WIDTH];
        for (slot, wanted) in layout.iter_mut().zip(RECORD_COLUMNS) {
            *slot = columns
                .iter()
                .position(|c| c.as_ref() == wanted)
                .ok_or_else(|| {
                    SearchError::SchemaMismatch(format!("column {wanted} missing from view"))
                })?;
        }
        Ok(layout)
    }

    /// Build from one row laid out by [`Record::layout`].
    pub fn from_row(layout: &[usize; Record::WIDTH], row: &[String]) -> Self {
        let cell = |i: usize| row.get(layout[i]).cloned().unwrap_or_default();
        Self {
            order_date: cell(0),
            delivery_date: cell(1),
            request_no: cell(2),
            maker: cell(3),
            equipment: cell(4),
            part_name: cell(5),
            model: cell(6),
            required_qty: cell(7),
            order_qty: cell(8),
            unit_price: cell(9),
            amount: cell(10),
            process: cell(11),
            delivery_place: cell(12),
        }
    }
}
