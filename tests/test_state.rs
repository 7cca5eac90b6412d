//! Shared state behaviour across overlapping requests.

mod common;

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use pokemontcg_sdk::{
    PokemonTcgSdk, RequestId, Result, SearchCardsParams, ServiceState, Transport,
};
use serde_json::{json, Value};

/// Transport that blocks each call until the test releases it.
struct GatedTransport {
    started: Mutex<mpsc::Sender<String>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl Transport for GatedTransport {
    fn get(&self, path: &str, _params: &[(String, String)]) -> Result<Value> {
        let release = self.release.lock().unwrap();
        self.started.lock().unwrap().send(path.to_string()).unwrap();
        release.recv().unwrap();
        Ok(json!({ "data": [], "count": 0, "totalCount": 0 }))
    }
}

#[test]
fn overlapping_searches_keep_loading_until_both_resolve() {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let state = ServiceState::new();
    let sdk = Arc::new(
        PokemonTcgSdk::builder()
            .state(state.clone())
            .transport(GatedTransport {
                started: Mutex::new(started_tx),
                release: Mutex::new(release_rx),
            })
            .build()
            .unwrap(),
    );

    let first = {
        let sdk = sdk.clone();
        thread::spawn(move || sdk.search(&SearchCardsParams::default()))
    };
    started_rx.recv().unwrap();

    // The second call waits on the transport lock held by the first, but it
    // has already raised its own guard by then.
    let second = {
        let sdk = sdk.clone();
        thread::spawn(move || sdk.list_sets())
    };
    while state.in_flight() < 2 {
        thread::yield_now();
    }
    assert_eq!(state.latest_request(), RequestId(2));

    release_tx.send(()).unwrap();
    first.join().unwrap();
    assert!(state.is_loading());

    started_rx.recv().unwrap();
    release_tx.send(()).unwrap();
    second.join().unwrap();
    assert!(!state.is_loading());
}

#[test]
fn request_ids_increase_per_call() {
    let (sdk, _transport, state) = common::setup_sdk();

    sdk.list_types();
    sdk.list_rarities();
    sdk.search(&SearchCardsParams::default());

    assert_eq!(state.latest_request(), RequestId(3));
    assert!(state.is_latest(RequestId(3)));
    assert!(!state.is_latest(RequestId(2)));
}

#[test]
fn injected_state_is_shared_with_the_sdk() {
    let (sdk, _transport, state) = common::setup_sdk();

    sdk.search(&SearchCardsParams {
        rarity: Some("Rare".into()),
        ..Default::default()
    });

    assert_eq!(sdk.state().filters(), state.filters());
    assert_eq!(state.filters().rarity.as_deref(), Some("Rare"));
}
