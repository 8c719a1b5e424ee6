use std::sync::Mutex;

use serde::Serialize;
use vartok_core::model::VariableSnapshot;
use vartok_core::session::ExportSession;
use vartok_protocol::UiRequest;
use wasm_bindgen::prelude::*;

static SESSIONS: Mutex<Vec<(VariableSnapshot, ExportSession)>> = Mutex::new(Vec::new());

/// Parse a variables snapshot from bytes (JSON, either supported format) and
/// open an export session over it. Returns a handle (index) for later use.
#[wasm_bindgen]
pub fn open_session(data: &[u8]) -> Result<usize, JsError> {
    let snapshot =
        vartok_core::parsers::parse_auto(data).map_err(|e| JsError::new(&e.to_string()))?;
    let mut sessions = SESSIONS.lock().unwrap();
    let idx = sessions.len();
    sessions.push((snapshot, ExportSession::new()));
    Ok(idx)
}

/// Feed one UI request (JSON) to a session. Returns the emitted messages as
/// a JSON array, empty once the session has been cancelled.
#[wasm_bindgen]
pub fn post_message(session_index: usize, request: &str) -> Result<String, JsError> {
    let request: UiRequest =
        serde_json::from_str(request).map_err(|e| JsError::new(&e.to_string()))?;

    let mut sessions = SESSIONS.lock().unwrap();
    let (snapshot, session) = sessions
        .get_mut(session_index)
        .ok_or_else(|| JsError::new("invalid session index"))?;

    let messages = session
        .handle_request(snapshot, request)
        .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&messages).map_err(|e| JsError::new(&e.to_string()))
}

#[derive(Serialize)]
struct SessionStats {
    collections: usize,
    variables: usize,
    closed: bool,
}

/// Get session metadata as JSON.
#[wasm_bindgen]
pub fn session_stats(session_index: usize) -> Result<String, JsError> {
    let sessions = SESSIONS.lock().unwrap();
    let (snapshot, session) = sessions
        .get(session_index)
        .ok_or_else(|| JsError::new("invalid session index"))?;

    let stats = SessionStats {
        collections: snapshot.collection_count(),
        variables: snapshot.variable_count(),
        closed: session.is_closed(),
    };
    serde_json::to_string(&stats).map_err(|e| JsError::new(&e.to_string()))
}
