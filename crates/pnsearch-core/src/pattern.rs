//! Predicate compiler: turns one raw search term into a fuzzy, case-insensitive
//! pattern.
//!
//! Terms are normalised before compilation: full-width spaces and tabs become
//! plain spaces, the ends are trimmed and runs of whitespace split the term into
//! tokens. Tokens are regex-escaped, so user input is always matched literally.
//!
//! | mode  | tokens `ab cd` compile to |
//! |-------|---------------------------|
//! | `And` | `(?i).*ab.*cd.*`          |
//! | `Or`  | `(?i)(ab\|cd)`            |

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const FULL_WIDTH_SPACE: char = '\u{3000}';

/// How per-term tokens, and per-field clauses, are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

#[derive(Debug, Error)]
pub enum PatternError {
    /// The term normalised to zero tokens. Callers skip the field.
    #[error("empty search term")]
    Empty,
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Split a raw term into its tokens.
pub fn tokens(term: &str) -> Vec<String> {
    term.replace(FULL_WIDTH_SPACE, " ")
        .replace('\t', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The pattern source for `tokens`, without compiling it.
pub fn pattern_source<S: AsRef<str>>(tokens: &[S], mode: Combinator) -> String {
    let escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t.as_ref())).collect();
    match mode {
        Combinator::And => format!("(?i).*{}.*", escaped.join(".*")),
        Combinator::Or => format!("(?i)({})", escaped.join("|")),
    }
}

/// A compiled fuzzy-match predicate for one field.
#[derive(Debug, Clone)]
pub struct FuzzyPattern {
    regex: Regex,
}

impl FuzzyPattern {
    /// Compile `term` for `mode`.
    ///
    /// Returns [`PatternError::Empty`] when the term holds nothing but
    /// whitespace; an OR pattern built from zero tokens would be `()`, which
    /// matches every row.
    pub fn compile(term: &str, mode: Combinator) -> Result<Self, PatternError> {
        let tokens = tokens(term);
        if tokens.is_empty() {
            return Err(PatternError::Empty);
        }
        let regex = Regex::new(&pattern_source(&tokens, mode))?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Absent cells are matched as the empty string.
    pub fn is_match(&self, cell: Option<&str>) -> bool {
        self.regex.is_match(cell.unwrap_or(""))
    }
}
