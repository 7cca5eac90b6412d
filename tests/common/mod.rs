//! Shared test fixtures for the Pokemon TCG SDK integration tests.
//!
//! Provides `ScriptedTransport`, an in-memory [`Transport`] that answers from
//! a table of canned responses, records every request it receives, and
//! samples the shared loading flag while each request is in flight, plus
//! `with_logs()` for capturing the `tracing` output of a closure.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use pokemontcg_sdk::{PokemonTcgSdk, Result, ServiceState, TcgError, Transport};
use serde_json::{json, Value};

/// One request seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub params: Vec<(String, String)>,
    pub loading: bool,
}

impl Recorded {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Canned outcome for a path.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
}

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    log: Arc<Mutex<Vec<Recorded>>>,
    state: Arc<Mutex<Option<ServiceState>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, path: &str, reply: Reply) -> &Self {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }

    fn watch(&self, state: ServiceState) {
        *self.state.lock().unwrap() = Some(state);
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let loading = self
            .state
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.is_loading())
            .unwrap_or(false);
        self.log.lock().unwrap().push(Recorded {
            path: path.to_string(),
            params: params.to_vec(),
            loading,
        });

        // Unscripted paths behave like an unreachable host.
        match self.replies.lock().unwrap().get(path).cloned() {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(status, body)) => Err(TcgError::Status {
                endpoint: path.to_string(),
                status,
                body: body.to_string(),
            }),
            None => Err(TcgError::NotFound(format!("connection refused: {path}"))),
        }
    }
}

/// Build an SDK over a fresh scripted transport sharing a fresh state.
pub fn setup_sdk() -> (PokemonTcgSdk, ScriptedTransport, ServiceState) {
    let transport = ScriptedTransport::new();
    let state = ServiceState::new();
    transport.watch(state.clone());
    let sdk = PokemonTcgSdk::builder()
        .state(state.clone())
        .transport(transport.clone())
        .build()
        .unwrap();
    (sdk, transport, state)
}

pub fn sample_page() -> Value {
    json!({
        "data": [
            {
                "id": "base1-58",
                "name": "Pikachu",
                "supertype": "Pokémon",
                "types": ["Lightning"],
                "rarity": "Common",
                "set": { "id": "base1", "name": "Base" }
            },
            {
                "id": "swsh4-44",
                "name": "Pikachu VMAX",
                "supertype": "Pokémon",
                "types": ["Lightning"],
                "rarity": "Rare Holo VMAX",
                "set": { "id": "swsh4", "name": "Vivid Voltage" }
            }
        ],
        "page": 1,
        "pageSize": 250,
        "count": 2,
        "totalCount": 2
    })
}

pub fn sample_sets() -> Value {
    json!({
        "data": [
            { "id": "base1", "name": "Base", "series": "Base", "total": 102 },
            { "id": "swsh4", "name": "Vivid Voltage", "series": "Sword & Shield", "total": 203 }
        ],
        "page": 1,
        "pageSize": 250,
        "count": 2,
        "totalCount": 2
    })
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

/// In-memory sink for formatted `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Lines at `level` mentioning `endpoint` as the endpoint field.
    pub fn events(&self, level: &str, endpoint: &str) -> Vec<String> {
        let field = format!("endpoint=\"{endpoint}\"");
        self.lines()
            .into_iter()
            .filter(|l| l.contains(level) && l.contains(&field))
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber installed on this thread.
pub fn with_logs<T>(f: impl FnOnce() -> T) -> (T, LogBuffer) {
    let buf = LogBuffer::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buf)
}
