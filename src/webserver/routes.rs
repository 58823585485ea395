/// Route handlers for the gacha analysis API
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::arguments::is_debug_webserver_enabled;
use crate::config::GachaPool;
use crate::errors::FetchError;
use crate::logger::{self, LogTag};
use crate::stats;
use crate::types::{GachaRecord, PoolReport, TaskProgress};
use crate::webserver::state::AppState;

/// Request body of POST /api/gachaLog
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
}

/// Simple health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    pub uptime_seconds: i64,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/gachaLog", post(analyze_gacha_log))
        .route("/api/getPage", get(get_task_page))
        .route("/api/health", get(health_check))
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// GET /api/health
async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    let now = Utc::now();
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: now,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.startup_time).num_seconds(),
    };
    Json(response).into_response()
}

/// GET /api/getPage?task_id=<id>
///
/// Polls advisory fetch progress. An unknown or missing task id answers the
/// zero-value record; a poller cannot distinguish "never started" from
/// "finished".
async fn get_task_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match params.get("task_id") {
        Some(task_id) => Json(state.progress.get(task_id)).into_response(),
        None => Json(TaskProgress::default()).into_response(),
    }
}

/// POST /api/gachaLog
///
/// Fetches and analyzes all pools for one gacha-log URL. Pools run strictly
/// sequentially; the task's progress entry is deleted on every exit path.
async fn analyze_gacha_log(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let url = match request.url.filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => return error_response(StatusCode::BAD_REQUEST, "请提供抽卡链接"),
    };
    let task_id = match request.task_id.filter(|t| !t.is_empty()) {
        Some(task_id) => task_id,
        None => return error_response(StatusCode::BAD_REQUEST, "缺少任务ID"),
    };

    if is_debug_webserver_enabled() {
        logger::debug(
            LogTag::Webserver,
            &format!("Analysis started for task {}", task_id),
        );
    }

    state.progress.create(&task_id);
    let result = run_analysis(&state, &url, &task_id).await;
    // cleanup must happen on success, expiry and fetch failure alike
    state.progress.delete(&task_id);

    match result {
        Ok(data) => Json(json!({ "success": true, "data": data })).into_response(),
        Err(err) if err.is_expired() => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "抽卡记录链接已过期！")
        }
        Err(err) => {
            logger::error(LogTag::Webserver, &format!("Analysis failed: {}", err));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

async fn run_analysis(
    state: &AppState,
    url: &str,
    task_id: &str,
) -> Result<BTreeMap<&'static str, PoolReport>, FetchError> {
    let mut data = BTreeMap::new();
    for pool in GachaPool::ALL {
        let records = state.fetcher.fetch_pool(url, pool, Some(task_id)).await?;
        data.insert(pool.id(), build_pool_report(pool, records, state));
    }
    Ok(data)
}

fn build_pool_report(pool: GachaPool, records: Vec<GachaRecord>, state: &AppState) -> PoolReport {
    let resolve = |name: &str, item_type: &str| state.avatars.resolve(name, item_type);

    PoolReport {
        name: pool.display_name().to_string(),
        pulls: stats::five_star_pulls(&records, pool, &resolve),
        four_star_pulls: stats::four_star_pulls(&records, &resolve),
        stats: stats::aggregate_stats(&records),
        raw_data: records,
    }
}
