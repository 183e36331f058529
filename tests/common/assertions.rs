//! Domain-specific assertion macros for pnsearch harnesses.
//!
//! These wrap `pretty_assertions` and print the whole result table when a
//! check fails, so the failing row is visible without re-running.

use pnsearch::MaterializedView;

/// Cells of the named storage column, top to bottom.
pub fn column_of(view: &MaterializedView, name: &str) -> Vec<String> {
    let pos = view
        .columns()
        .iter()
        .position(|c| c == name)
        .unwrap_or_else(|| panic!("column {name:?} not in {:?}", view.columns()));
    view.column(pos).map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Column assertions
// ---------------------------------------------------------------------------

/// Assert the cells of one column of a `MaterializedView`.
///
/// ```rust
/// assert_column!(result, "品名", ["Alpha", "ALPHA-2"]);
/// ```
#[macro_export]
macro_rules! assert_column {
    ($view:expr, $name:expr, [$($cell:expr),* $(,)?]) => {{
        let view: &pnsearch::MaterializedView = &$view;
        let expected: Vec<String> = vec![$($cell.to_string()),*];
        let actual = $crate::common::column_of(view, $name);
        if actual != expected {
            panic!(
                "assert_column! failed for {:?}\n  expected: {:?}\n  actual:   {:?}\n  rows: {:#?}",
                $name,
                expected,
                actual,
                view.rows()
            );
        }
    }};
}

/// Assert the storage column names of a `MaterializedView`, in order.
#[macro_export]
macro_rules! assert_columns {
    ($view:expr, [$($name:expr),* $(,)?]) => {{
        let view: &pnsearch::MaterializedView = &$view;
        let expected: Vec<String> = vec![$($name.to_string()),*];
        pretty_assertions::assert_eq!(view.columns(), expected.as_slice());
    }};
}

// ---------------------------------------------------------------------------
// Error assertions
// ---------------------------------------------------------------------------

/// Assert that a search failed with the given `SearchError` pattern.
///
/// ```rust
/// assert_search_err!(pipeline.search(&q, Output::Display), SearchError::NoCriteria);
/// ```
#[macro_export]
macro_rules! assert_search_err {
    ($result:expr, $pattern:pat) => {{
        match $result {
            Err($pattern) => {}
            Err(other) => panic!(
                "assert_search_err! failed:\n  expected: {}\n  actual:   {:?}",
                stringify!($pattern),
                other
            ),
            Ok(view) => panic!(
                "assert_search_err! failed: search succeeded with {} rows {:?}",
                view.len(),
                view.rows()
            ),
        }
    }};
}
