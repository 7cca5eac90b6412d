//! Query builder for the catalogue's `q` search dialect.
//!
//! The remote API filters with `field:value` clauses joined by ` AND `, where
//! `*` acts as a wildcard. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use pokemontcg_sdk::QueryBuilder;
//! let (path, params) = QueryBuilder::new()
//!     .page(2)
//!     .page_size(20)
//!     .where_prefix("rarity", "Rare Holo")
//!     .build();
//! assert_eq!(path, "page=2&pageSize=20&q=rarity:Rare*Holo*");
//! assert_eq!(params.len(), 3);
//! ```

/// Wildcard token in the remote query language.
pub const WILDCARD: char = '*';

/// Connective placed between clauses.
pub const AND: &str = " AND ";

/// Builds paginated, filtered catalogue queries.
///
/// Empty filter values are skipped, so an unspecified filter never reaches
/// the outgoing query.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    page: u32,
    page_size: u32,
    clauses: Vec<String>,
}

impl QueryBuilder {
    /// Create a builder with `page` and `pageSize` both set to 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested page. 0 leaves the choice to the remote API.
    pub fn page(&mut self, page: u32) -> &mut Self {
        self.page = page;
        self
    }

    /// Set the requested page size. 0 leaves the choice to the remote API.
    pub fn page_size(&mut self, page_size: u32) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Add a prefix-match clause: `{field}:{value}*`.
    ///
    /// Spaces in `value` become wildcards so multi-word partial matches work.
    pub fn where_prefix(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.clauses
                .push(format!("{}:{}{}", field, wildcard_spaces(value), WILDCARD));
        }
        self
    }

    /// Add an exact-token clause: `{field}:{value}` (no trailing wildcard).
    pub fn where_exact(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.clauses
                .push(format!("{}:{}", field, wildcard_spaces(value)));
        }
        self
    }

    /// The joined `q` value, or `None` if no clause was added.
    pub fn clause_set(&self) -> Option<String> {
        if self.clauses.is_empty() {
            None
        } else {
            Some(self.clauses.join(AND))
        }
    }

    /// Build the raw query path and the parameter list.
    ///
    /// The path always ends in `&` after the pagination pair, followed by
    /// `q=...` only when at least one clause exists. The parameters are the
    /// same values as `(name, value)` pairs for the HTTP layer to encode.
    pub fn build(&self) -> (String, Vec<(String, String)>) {
        let mut path = format!("page={}&pageSize={}&", self.page, self.page_size);
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];

        if let Some(q) = self.clause_set() {
            path.push_str("q=");
            path.push_str(&q);
            params.push(("q".to_string(), q));
        }

        (path, params)
    }
}

fn wildcard_spaces(value: &str) -> String {
    value.replace(' ', &WILDCARD.to_string())
}
