//! Card queries against the `/cards` endpoint.

use serde_json::Value;

use crate::config;
use crate::connection::Connection;
use crate::error::{Result, TcgError};
use crate::models::{CatalogPage, SearchCardsParams};
use crate::query_builder::QueryBuilder;

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for cards.
pub struct CardQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    // -- Search ------------------------------------------------------------

    /// Search cards, falling back to an empty page on any failure.
    ///
    /// The failure is logged; callers that need to tell "no results" apart
    /// from "request failed" should use [`try_search`](Self::try_search).
    pub fn search(&self, params: &SearchCardsParams) -> CatalogPage {
        self.try_search(params).unwrap_or_else(|_| CatalogPage::empty())
    }

    /// Search cards using a combination of filters.
    ///
    /// - `name`, `set`, `rarity`: prefix match (`field:value*`)
    /// - `card_type`: exact token match on `types`
    ///
    /// Spaces in any filter become wildcards. Specified filters are recorded
    /// into the filter echo before the request is sent.
    pub fn try_search(&self, params: &SearchCardsParams) -> Result<CatalogPage> {
        let filters = params.specified();

        let mut qb = QueryBuilder::new();
        qb.page(params.page).page_size(params.page_size);

        if let Some(ref name) = filters.name {
            qb.where_prefix("name", name);
        }

        if let Some(ref set) = filters.set {
            qb.where_prefix("set.name", set);
        }

        if let Some(ref rarity) = filters.rarity {
            qb.where_prefix("rarity", rarity);
        }

        if let Some(ref card_type) = filters.card_type {
            qb.where_exact("types", card_type);
        }

        self.conn.state().record_filters(filters);

        let (_, query) = qb.build();
        self.conn.get(config::CARDS_PATH, &query)
    }

    // -- Single card lookup ------------------------------------------------

    /// Retrieve a single card by its id (e.g. `"xy1-1"`).
    ///
    /// Returns `Ok(None)` when the API answers 404. Ids that are not a single
    /// URL path segment are rejected before any request is made.
    pub fn get(&self, id: &str) -> Result<Option<Value>> {
        let id = id.trim();
        if id.is_empty() {
            return Err(TcgError::InvalidArgument("card id must not be empty".into()));
        }
        if id.contains(['/', '?', '#', '%']) || id == ".." || id == "." {
            return Err(TcgError::InvalidArgument(format!(
                "card id must be a single path segment: {id:?}"
            )));
        }

        let path = format!("{}/{}", config::CARDS_PATH, id);
        Ok(self.conn.get_optional(&path)?.and_then(extract_data))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Extract the `"data"` field from a response wrapper.
fn extract_data(value: Value) -> Option<Value> {
    match value {
        Value::Object(mut map) => map.remove("data").filter(|d| !d.is_null()),
        _ => None,
    }
}
