//! CSV and column-oriented JSON encodings of a [`MaterializedView`].
//!
//! Both use display names for headers/keys and keep the view's column order.

use pnsearch_core::{AliasTable, MaterializedView};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Encode `view` as CSV with a header row of display names.
pub fn to_csv(view: &MaterializedView, aliases: &AliasTable) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(aliases.display_names(view.columns()))?;
    for row in view.rows() {
        writer.write_record(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// `{"display name": [cells...], ...}` in column order.
pub struct ColumnsJson<'a> {
    view: &'a MaterializedView,
    aliases: &'a AliasTable,
}

impl<'a> ColumnsJson<'a> {
    pub fn new(view: &'a MaterializedView, aliases: &'a AliasTable) -> Self {
        Self { view, aliases }
    }
}

impl Serialize for ColumnsJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.view.width()))?;
        for (pos, column) in self.view.columns().iter().enumerate() {
            let cells: Vec<&str> = self.view.column(pos).collect();
            map.serialize_entry(self.aliases.to_display(column), &cells)?;
        }
        map.end()
    }
}
