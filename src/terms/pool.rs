//! The ordered pool of candidate phrases.
//!
//! A pool is built by concatenating managed (dynamic) terms with the
//! built-in list, dynamic terms first. Concatenation keeps duplicates;
//! [`TermPool::deduplicated`] removes them when the session asks for it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN_TERMS;

/// One stored term as the term inventory returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub term: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TermRecord {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            id: None,
            term: term.into(),
            created_at: None,
        }
    }
}

/// Ordered candidate phrases. Duplicates are possible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPool {
    terms: Vec<String>,
}

impl TermPool {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// The built-in list on its own.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TERMS.iter().map(|term| term.to_string()).collect())
    }

    /// Dynamic terms first, then the built-in list.
    ///
    /// Dynamic terms are trimmed and blank ones are skipped, matching what
    /// the inventory accepts on insert.
    pub fn merged<I, S>(dynamic: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = dynamic
            .into_iter()
            .filter_map(|term| {
                let trimmed = term.as_ref().trim();
                if trimmed.is_empty() {
                    log::debug!("Skipping blank dynamic term");
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            })
            .collect();
        terms.extend(BUILTIN_TERMS.iter().map(|term| term.to_string()));
        Self { terms }
    }

    /// Same as [`TermPool::merged`], taking inventory records.
    pub fn from_records(records: &[TermRecord]) -> Self {
        Self::merged(records.iter().map(|record| record.term.as_str()))
    }

    /// Order-preserving copy with repeats removed (first occurrence wins).
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut seen = FxHashSet::default();
        let terms = self
            .terms
            .iter()
            .filter(|term| seen.insert(term.as_str()))
            .cloned()
            .collect();
        Self { terms }
    }

    /// Number of entries that repeat an earlier entry.
    pub fn duplicate_count(&self) -> usize {
        let unique: FxHashSet<&str> = self.terms.iter().map(String::as_str).collect();
        self.terms.len() - unique.len()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The term at `index` in pool order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }
}

impl From<Vec<String>> for TermPool {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl<'a> FromIterator<&'a str> for TermPool {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(str::to_owned).collect())
    }
}
