//! Set queries against the `/sets` endpoint.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Listing;

// ---------------------------------------------------------------------------
// SetQuery
// ---------------------------------------------------------------------------

/// Query interface for card sets.
pub struct SetQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SetQuery<'a> {
    /// Create a new `SetQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List all sets, or `{ data: [] }` if the request fails.
    pub fn list(&self) -> Listing {
        self.try_list().unwrap_or_default()
    }

    /// List all sets, returning the failure to the caller.
    pub fn try_list(&self) -> Result<Listing> {
        self.conn.get(config::SETS_PATH, &[])
    }
}
