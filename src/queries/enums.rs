//! Flat reference listings: rarities, types, subtypes and supertypes.
//!
//! Each listing has a fallback form returning `{ data: [] }` on failure and a
//! `try_` form that returns the error instead.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Listing;

// ---------------------------------------------------------------------------
// EnumQuery
// ---------------------------------------------------------------------------

/// Query interface for the catalogue's reference listings.
pub struct EnumQuery<'a> {
    conn: &'a Connection,
}

impl<'a> EnumQuery<'a> {
    /// Create a new `EnumQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All card rarities (e.g. `"Rare Holo"`).
    pub fn rarities(&self) -> Listing {
        self.try_rarities().unwrap_or_default()
    }

    pub fn try_rarities(&self) -> Result<Listing> {
        self.conn.get(config::RARITIES_PATH, &[])
    }

    /// All energy types (e.g. `"Lightning"`).
    pub fn types(&self) -> Listing {
        self.try_types().unwrap_or_default()
    }

    pub fn try_types(&self) -> Result<Listing> {
        self.conn.get(config::TYPES_PATH, &[])
    }

    /// All card subtypes (e.g. `"Stage 1"`, `"VMAX"`).
    pub fn subtypes(&self) -> Listing {
        self.try_subtypes().unwrap_or_default()
    }

    pub fn try_subtypes(&self) -> Result<Listing> {
        self.conn.get(config::SUBTYPES_PATH, &[])
    }

    /// All card supertypes (`"Pokémon"`, `"Trainer"`, `"Energy"`).
    pub fn supertypes(&self) -> Listing {
        self.try_supertypes().unwrap_or_default()
    }

    pub fn try_supertypes(&self) -> Result<Listing> {
        self.conn.get(config::SUPERTYPES_PATH, &[])
    }
}
