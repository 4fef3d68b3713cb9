//! In-process stub of the portal API for integration tests.
//!
//! Serves the tag and profile endpoints over a real TCP socket so the crate
//! under test talks to it exactly as it would to the production portal. The
//! shared state handle lets tests seed the remote hierarchy, inspect it
//! after calls, and flip `reject` to force application-level failures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Default)]
pub struct PortalState {
    pub primary: Vec<String>,
    pub secondary: HashMap<String, Vec<String>>,
    /// When set, every mutating endpoint answers `success: false` with this
    /// message.
    pub reject: Option<String>,
}

pub type SharedState = Arc<Mutex<PortalState>>;

/// A portal pre-populated with a small hierarchy.
pub fn seeded_state() -> SharedState {
    let mut state = PortalState::default();
    state.primary = vec!["心脏".to_string(), "肝脏".to_string(), "耳鼻喉".to_string()];
    state.secondary.insert(
        "心脏".to_string(),
        vec!["心悸".to_string(), "胸闷".to_string()],
    );
    state
        .secondary
        .insert("肝脏".to_string(), vec!["肝郁气滞".to_string()]);
    state
        .secondary
        .insert("耳鼻喉".to_string(), vec!["左耳".to_string()]);
    Arc::new(Mutex::new(state))
}

/// Bind the stub to an ephemeral port and return its base URL.
pub async fn spawn_portal(state: SharedState) -> String {
    let app = Router::new()
        .route("/api/tags", get(get_tags))
        .route("/api/tags/primary", post(add_primary))
        .route(
            "/api/tags/primary/{name}",
            put(rename_primary).delete(delete_primary),
        )
        .route("/api/tags/secondary", post(add_secondary))
        .route(
            "/api/tags/secondary/{primary}/{name}",
            put(rename_secondary).delete(delete_secondary),
        )
        .route("/api/profile/settings", post(update_settings))
        .route("/api/profile/avatar", post(upload_avatar))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub portal");
    let addr = listener.local_addr().expect("stub portal address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub portal serve");
    });
    format!("http://{addr}")
}

fn ok() -> Json<Value> {
    Json(json!({ "success": true }))
}

fn fail(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "message": message }))
}

async fn get_tags(State(state): State<SharedState>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(json!({ "primary": state.primary, "secondary": state.secondary }))
}

async fn add_primary(State(state): State<SharedState>, Json(body): Json<Value>) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    let tag = body["tag"].as_str().unwrap_or_default().to_string();
    if tag.is_empty() {
        return fail("标签名称不能为空");
    }
    if state.primary.contains(&tag) {
        return fail("标签已存在");
    }
    state.secondary.insert(tag.clone(), Vec::new());
    state.primary.push(tag);
    ok()
}

async fn rename_primary(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    let new_tag = body["newTag"].as_str().unwrap_or_default().to_string();
    let Some(index) = state.primary.iter().position(|t| *t == name) else {
        return fail("标签不存在");
    };
    state.primary[index] = new_tag.clone();
    if let Some(items) = state.secondary.remove(&name) {
        state.secondary.insert(new_tag, items);
    }
    ok()
}

async fn delete_primary(State(state): State<SharedState>, Path(name): Path<String>) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    let Some(index) = state.primary.iter().position(|t| *t == name) else {
        return fail("标签不存在");
    };
    state.primary.remove(index);
    state.secondary.remove(&name);
    ok()
}

async fn add_secondary(State(state): State<SharedState>, Json(body): Json<Value>) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    let primary = body["primaryTag"].as_str().unwrap_or_default().to_string();
    let tag = body["secondaryTag"].as_str().unwrap_or_default().to_string();
    if !state.primary.contains(&primary) {
        return fail("一级标签不存在");
    }
    state.secondary.entry(primary).or_default().push(tag);
    ok()
}

async fn rename_secondary(
    State(state): State<SharedState>,
    Path((primary, name)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    let new_tag = body["newTag"].as_str().unwrap_or_default().to_string();
    let Some(index) = state
        .secondary
        .get(&primary)
        .and_then(|items| items.iter().position(|t| *t == name))
    else {
        return fail("标签不存在");
    };
    state.secondary.get_mut(&primary).unwrap()[index] = new_tag;
    ok()
}

async fn delete_secondary(
    State(state): State<SharedState>,
    Path((primary, name)): Path<(String, String)>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    let Some(index) = state
        .secondary
        .get(&primary)
        .and_then(|items| items.iter().position(|t| *t == name))
    else {
        return fail("标签不存在");
    };
    state.secondary.get_mut(&primary).unwrap().remove(index);
    ok()
}

async fn update_settings(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    Json(json!({ "success": true, "username": body["username"] }))
}

async fn upload_avatar(State(state): State<SharedState>) -> Json<Value> {
    let state = state.lock().unwrap();
    if let Some(message) = state.reject.clone() {
        return fail(&message);
    }
    Json(json!({ "success": true, "avatarUrl": "/uploads/avatar.png" }))
}
