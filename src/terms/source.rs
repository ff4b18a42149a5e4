//! Term sources and pool resolution.
//!
//! The game only ever sees a resolved [`TermPool`]. Whatever goes wrong
//! while fetching managed terms, [`resolve_pool`] falls back to the
//! built-in list so a card can always be dealt.

use serde::Deserialize;

use super::pool::{TermPool, TermRecord};
use crate::core::{BingoError, Result};

/// Supplier of managed (dynamic) terms.
pub trait TermSource {
    /// Fetch every stored term, newest first.
    fn fetch_terms(&mut self) -> Result<Vec<TermRecord>>;
}

/// A fixed list of records, mainly for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct StaticTermSource {
    records: Vec<TermRecord>,
}

impl StaticTermSource {
    pub fn new(records: Vec<TermRecord>) -> Self {
        Self { records }
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(terms.into_iter().map(TermRecord::new).collect())
    }
}

impl TermSource for StaticTermSource {
    fn fetch_terms(&mut self) -> Result<Vec<TermRecord>> {
        Ok(self.records.clone())
    }
}

/// Body returned by the terms endpoint.
///
/// Either `{"data": [...]}` or `{"error": "...", "details": "..."}`.
#[derive(Debug, Deserialize)]
struct TermsResponse {
    #[serde(default)]
    data: Option<Vec<TermRecord>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Terms read from a JSON response body of the terms endpoint.
#[derive(Clone, Debug)]
pub struct JsonTermSource {
    payload: String,
}

impl JsonTermSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl TermSource for JsonTermSource {
    fn fetch_terms(&mut self) -> Result<Vec<TermRecord>> {
        let response: TermsResponse = serde_json::from_str(&self.payload)?;

        if let Some(error) = response.error {
            let message = match response.details {
                Some(details) => format!("{error}: {details}"),
                None => error,
            };
            return Err(BingoError::SourceUnavailable(message));
        }

        Ok(response.data.unwrap_or_default())
    }
}

/// Build the pool for a new game from `source`.
///
/// Managed terms go first, followed by the built-in list. If the source
/// fails or returns nothing, the built-in list is used alone.
pub fn resolve_pool<S: TermSource + ?Sized>(source: &mut S) -> TermPool {
    match source.fetch_terms() {
        Ok(records) if !records.is_empty() => {
            let pool = TermPool::from_records(&records);
            log::debug!(
                "Resolved term pool: {} managed records, {} terms total",
                records.len(),
                pool.len()
            );
            pool
        }
        Ok(_) => {
            log::debug!("No managed terms, using built-in list");
            TermPool::builtin()
        }
        Err(err) => {
            log::warn!("Failed to fetch terms, using built-in list: {}", err);
            TermPool::builtin()
        }
    }
}
