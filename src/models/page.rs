use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// CatalogPage — One page of `/cards` results
// ---------------------------------------------------------------------------

/// A page of card records as returned by `/cards`.
///
/// Card records are opaque and passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub data: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_count: u64,
}

impl CatalogPage {
    /// The fallback page: no cards, zero counts.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            page: None,
            page_size: None,
            count: 0,
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::empty()
    }
}

// ---------------------------------------------------------------------------
// Listing — Flat payload of `/sets`, `/rarities`, `/types`, ...
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T = Value> {
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    /// The fallback listing: `{ data: [] }`.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::empty()
    }
}
