use serde::{Deserialize, Serialize};

/// One gacha draw as served by the remote log endpoint
///
/// Field values are strings exactly as the API emits them; `id` is
/// monotonically non-decreasing within a pool and doubles as the pagination
/// cursor. Unknown response fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GachaRecord {
    pub id: String,
    pub time: String,
    pub name: String,
    /// Rarity tier: "3" | "4" | "5"
    pub rank_type: String,
    /// Category label: 角色 (character) or 武器 (weapon)
    pub item_type: String,
    /// Pool identifier this draw belongs to
    pub gacha_type: String,
}

/// Envelope of a gacha-log page response: `{retcode, message, data: {list}}`
#[derive(Debug, Clone, Deserialize)]
pub struct GachaLogResponse {
    pub retcode: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<GachaLogData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GachaLogData {
    #[serde(default)]
    pub list: Vec<GachaRecord>,
}

/// Advisory per-task progress, polled by the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProgress {
    /// Display name of the pool currently being fetched
    pub name: String,
    /// Human-readable page label, e.g. 第3页
    pub page: String,
}

impl Default for TaskProgress {
    fn default() -> Self {
        Self {
            name: String::new(),
            page: "第1页".to_string(),
        }
    }
}

/// A pull-distance record, one per rare (or near-rare) drop
///
/// `pulls_before` counts draws since the previous drop of the same rarity,
/// inclusive of the drop itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRecord {
    pub name: String,
    pub rank_type: String,
    pub item_type: String,
    pub time: String,
    pub pulls_before: u64,
    pub primogems_cost: u64,
    pub avatar_url: String,
    /// Only set for five-star records; off-banner is undefined below that tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_off_banner: Option<bool>,
}

/// Aggregate counts over one pool's full transaction list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoolStats {
    pub total_pulls: u64,
    pub total_primogems: u64,
    pub five_star_count: u64,
    pub four_star_count: u64,
    pub three_star_count: u64,
}

/// Full per-pool analysis result returned by the gachaLog endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PoolReport {
    pub name: String,
    pub pulls: Vec<PullRecord>,
    pub four_star_pulls: Vec<PullRecord>,
    pub stats: PoolStats,
    pub raw_data: Vec<GachaRecord>,
}
