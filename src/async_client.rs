//! Async wrapper around [`PokemonTcgSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use pokemontcg_sdk::{AsyncPokemonTcgSdk, SearchCardsParams};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncPokemonTcgSdk::from_env().await.unwrap();
//!
//!     let page = sdk
//!         .search(SearchCardsParams {
//!             rarity: Some("Rare Holo".into()),
//!             ..Default::default()
//!         })
//!         .await;
//!
//!     // Run any sync SDK method via closure
//!     let card = sdk.run(|s| s.cards().get("xy1-1")).await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{Result, TcgError};
use crate::models::{CatalogPage, Listing, SearchCardsParams};
use crate::state::ServiceState;
use crate::{PokemonTcgSdk, PokemonTcgSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncPokemonTcgSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PokemonTcgSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The SDK is `Sync`, so concurrent calls
/// share it through an [`Arc`] without further locking.
#[derive(Clone)]
pub struct AsyncPokemonTcgSdk {
    inner: Arc<PokemonTcgSdk>,
}

impl AsyncPokemonTcgSdk {
    /// Build the async SDK from a configured sync builder.
    ///
    /// Construction runs on the blocking thread pool so the HTTP client is
    /// never created on an async worker.
    pub async fn build(builder: PokemonTcgSdkBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(Self::from_sdk(sdk))
        })
        .await
        .map_err(join_error)?
    }

    /// Build the async SDK from `POKEMONTCG_*` environment variables.
    pub async fn from_env() -> Result<Self> {
        tokio::task::spawn_blocking(|| Ok(Self::from_sdk(PokemonTcgSdk::from_env()?)))
            .await
            .map_err(join_error)?
    }

    /// Wrap an already built SDK.
    pub fn from_sdk(sdk: PokemonTcgSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&PokemonTcgSdk` reference and its return
    /// value is passed back unchanged.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PokemonTcgSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(join_error)?
    }

    /// Search cards asynchronously, falling back to an empty page.
    pub async fn search(&self, params: SearchCardsParams) -> CatalogPage {
        self.run(move |s| Ok(s.cards().search(&params)))
            .await
            .unwrap_or_default()
    }

    /// Search cards asynchronously, returning the failure.
    pub async fn try_search(&self, params: SearchCardsParams) -> Result<CatalogPage> {
        self.run(move |s| s.cards().try_search(&params)).await
    }

    pub async fn list_sets(&self) -> Listing {
        self.run(|s| Ok(s.list_sets())).await.unwrap_or_default()
    }

    pub async fn list_rarities(&self) -> Listing {
        self.run(|s| Ok(s.list_rarities())).await.unwrap_or_default()
    }

    pub async fn list_types(&self) -> Listing {
        self.run(|s| Ok(s.list_types())).await.unwrap_or_default()
    }

    /// The shared loading flag and filter echo.
    pub fn state(&self) -> &ServiceState {
        self.inner.state()
    }
}

fn join_error(e: tokio::task::JoinError) -> TcgError {
    TcgError::InvalidArgument(format!("Task join error: {e}"))
}
