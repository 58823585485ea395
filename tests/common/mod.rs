#![allow(dead_code)]
/// Shared scripted stand-in for the remote gacha-log endpoint
///
/// Serves pages by page number and records every request's query parameters
/// so tests can assert on pagination and request-layer behavior.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub struct MockService {
    pages: Vec<Vec<Value>>,
    endless: bool,
    expired: bool,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

impl MockService {
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Arc<Self> {
        Arc::new(Self {
            pages,
            endless: false,
            expired: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always answers with the expiry sentinel
    pub fn expired() -> Arc<Self> {
        Arc::new(Self {
            pages: Vec::new(),
            endless: false,
            expired: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Never runs out of pages, for exercising the pagination safety bound
    pub fn endless() -> Arc<Self> {
        Arc::new(Self {
            pages: Vec::new(),
            endless: true,
            expired: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn gacha_log_handler(
    State(service): State<Arc<MockService>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    service.requests.lock().unwrap().push(params.clone());

    if service.expired {
        return Json(json!({ "retcode": -101, "message": "authkey timeout", "data": null }));
    }

    let page: u64 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    let list = if service.endless {
        // two fresh records per page, ids strictly increasing
        vec![draw(page * 100, "3"), draw(page * 100 + 1, "3")]
    } else {
        service
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default()
    };

    Json(json!({ "retcode": 0, "message": "OK", "data": { "list": list } }))
}

/// Bind the mock on an ephemeral port and return a base query URL for it
pub async fn spawn_mock(service: Arc<MockService>) -> String {
    let app = Router::new()
        .route("/gacha/log", get(gacha_log_handler))
        .with_state(service);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/gacha/log?authkey=test-key&region=os_asia", addr)
}

/// One draw in the shape the real endpoint serves, extra fields included
pub fn draw(id: u64, rank: &str) -> Value {
    json!({
        "uid": "100000001",
        "gacha_type": "301",
        "item_id": "",
        "count": "1",
        "time": "2024-03-01 12:00:00",
        "name": if rank == "5" { "刻晴" } else { "弹弓" },
        "lang": "zh-cn",
        "item_type": if rank == "5" { "角色" } else { "武器" },
        "rank_type": rank,
        "id": id.to_string(),
    })
}

pub fn draws(start_id: u64, count: u64) -> Vec<Value> {
    (0..count).map(|i| draw(start_id + i, "3")).collect()
}
