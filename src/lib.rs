//! Pokemon TCG SDK for Rust.
//!
//! Provides a high-level client for browsing the Pokemon TCG card catalogue.
//! Filters are translated into the API's `q` search dialect, every request
//! carries the static `X-Api-Key` header, and a shared [`ServiceState`]
//! exposes the loading flag and the last-applied filters to the UI.
//!
//! # Quick start
//!
//! ```no_run
//! use pokemontcg_sdk::{PokemonTcgSdk, SearchCardsParams};
//!
//! let sdk = PokemonTcgSdk::builder().api_key("my-key").build().unwrap();
//!
//! // Search cards; failures fall back to an empty page
//! let page = sdk.cards().search(&SearchCardsParams {
//!     name: Some("pikachu".into()),
//!     page_size: 20,
//!     ..Default::default()
//! });
//!
//! // Or keep the error
//! let sets = sdk.sets().try_list().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod query_builder;
pub mod state;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncPokemonTcgSdk;
pub use config::TcgConfig;
pub use connection::Connection;
pub use error::{Result, TcgError};
pub use models::{CatalogPage, FilterEcho, Listing, SearchCardsParams};
pub use query_builder::QueryBuilder;
pub use state::{RequestId, ServiceState};
pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PokemonTcgSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PokemonTcgSdk`] instance.
///
/// Use [`PokemonTcgSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PokemonTcgSdkBuilder::build) to create the SDK.
pub struct PokemonTcgSdkBuilder {
    config: TcgConfig,
    timeout: Option<Duration>,
    state: Option<ServiceState>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for PokemonTcgSdkBuilder {
    fn default() -> Self {
        Self {
            config: TcgConfig::default(),
            timeout: None,
            state: None,
            transport: None,
        }
    }
}

impl PokemonTcgSdkBuilder {
    /// Start from a loaded configuration instead of the defaults.
    pub fn config(mut self, config: TcgConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key sent in the `X-Api-Key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the base URL. Defaults to [`config::API_BASE`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Takes precedence over `timeout_secs` from the config. If neither is
    /// set, the HTTP client's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Share an existing [`ServiceState`] with the SDK.
    ///
    /// The presentation layer keeps a clone and reads the loading flag and
    /// filter echo from it.
    pub fn state(mut self, state: ServiceState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the HTTP transport. The endpoint, key and timeout are then
    /// ignored.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the SDK.
    ///
    /// No request is made here; the HTTP client is only constructed.
    pub fn build(self) -> Result<PokemonTcgSdk> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::from_config(&self.config, self.timeout)?),
        };
        let state = self.state.unwrap_or_default();
        Ok(PokemonTcgSdk {
            conn: Connection::new(transport, state),
            endpoint: self.config.endpoint,
        })
    }
}

// ---------------------------------------------------------------------------
// PokemonTcgSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Pokemon TCG SDK.
///
/// Wraps a [`Connection`] (which owns the transport and [`ServiceState`])
/// and exposes domain-specific query interfaces as lightweight borrowing
/// wrappers.
///
/// Created via [`PokemonTcgSdk::builder()`] or [`PokemonTcgSdk::from_env()`].
pub struct PokemonTcgSdk {
    conn: Connection,
    endpoint: String,
}

impl PokemonTcgSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PokemonTcgSdkBuilder {
        PokemonTcgSdkBuilder::default()
    }

    /// Build an SDK from `POKEMONTCG_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::builder().config(TcgConfig::from_env()?).build()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// connection and provides methods for searching cards.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.conn)
    }

    /// Access the set query interface.
    pub fn sets(&self) -> queries::sets::SetQuery<'_> {
        queries::sets::SetQuery::new(&self.conn)
    }

    /// Access the rarity/type listing interface.
    pub fn enums(&self) -> queries::enums::EnumQuery<'_> {
        queries::enums::EnumQuery::new(&self.conn)
    }

    // -- Shortcuts ---------------------------------------------------------

    /// Search cards, falling back to an empty page on failure.
    pub fn search(&self, params: &SearchCardsParams) -> CatalogPage {
        self.cards().search(params)
    }

    /// List all sets, falling back to `{ data: [] }` on failure.
    pub fn list_sets(&self) -> Listing {
        self.sets().list()
    }

    /// List all rarities, falling back to `{ data: [] }` on failure.
    pub fn list_rarities(&self) -> Listing {
        self.enums().rarities()
    }

    /// List all types, falling back to `{ data: [] }` on failure.
    pub fn list_types(&self) -> Listing {
        self.enums().types()
    }

    // -- State -------------------------------------------------------------

    /// The shared loading flag and filter echo.
    pub fn state(&self) -> &ServiceState {
        self.conn.state()
    }

    /// `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.conn.state().is_loading()
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PokemonTcgSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.conn.state();
        write!(
            f,
            "PokemonTcgSdk(endpoint={}, in_flight={}, latest_request={})",
            self.endpoint,
            state.in_flight(),
            state.latest_request()
        )
    }
}
