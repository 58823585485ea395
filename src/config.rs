/// Static configuration tables for the gacha log service
///
/// Pool identifiers, display names and off-banner name sets are fixed data
/// from the remote service. Everything here is immutable and built once;
/// runtime knobs live in `arguments`.
use once_cell::sync::Lazy;
use std::collections::HashSet;

// ============================================================================
// REMOTE API CONSTANTS
// ============================================================================

/// Maximum page size accepted by the gacha-log endpoint
pub const PAGE_SIZE: u32 = 20;

/// Safety bound on pages per pool, defends against runaway pagination
pub const MAX_PAGES: u32 = 9999;

/// Delay between page requests (undocumented remote rate limit)
pub const PAGE_DELAY_MS: u64 = 500;

/// Language sent with every page request
pub const API_LANG: &str = "zh-cn";

/// Retcode returned when the query authkey has expired
pub const RETCODE_AUTHKEY_EXPIRED: i64 = -101;

/// Request timeout for gacha-log page requests
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Browser-like UA, the endpoint rejects some default client UAs
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// ============================================================================
// CURRENCY
// ============================================================================

/// Primogem cost of a single pull
pub const PRIMOGEMS_PER_PULL: u64 = 160;

// ============================================================================
// RARITY / ITEM TYPE LABELS (as served with lang=zh-cn)
// ============================================================================

pub const RANK_FIVE_STAR: &str = "5";
pub const RANK_FOUR_STAR: &str = "4";
pub const RANK_THREE_STAR: &str = "3";

pub const ITEM_TYPE_CHARACTER: &str = "角色";
pub const ITEM_TYPE_WEAPON: &str = "武器";

// ============================================================================
// POOLS
// ============================================================================

/// The fixed set of gacha pools the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GachaPool {
    /// 200 - standard/permanent banner
    Permanent,
    /// 301 - character event banner
    Character,
    /// 302 - weapon event banner
    Weapon,
    /// 500 - chronicled/mixed banner
    Mixed,
}

impl GachaPool {
    /// All pools, in the order the analysis endpoint walks them
    pub const ALL: [GachaPool; 4] = [
        GachaPool::Permanent,
        GachaPool::Character,
        GachaPool::Weapon,
        GachaPool::Mixed,
    ];

    /// The `gacha_type` query value for this pool
    pub fn id(&self) -> &'static str {
        match self {
            GachaPool::Permanent => "200",
            GachaPool::Character => "301",
            GachaPool::Weapon => "302",
            GachaPool::Mixed => "500",
        }
    }

    /// Human-readable pool name, matches the zh-cn service language
    pub fn display_name(&self) -> &'static str {
        match self {
            GachaPool::Permanent => "常驻",
            GachaPool::Character => "角色",
            GachaPool::Weapon => "武器",
            GachaPool::Mixed => "混池",
        }
    }

    pub fn from_id(id: &str) -> Option<GachaPool> {
        match id {
            "200" => Some(GachaPool::Permanent),
            "301" => Some(GachaPool::Character),
            "302" => Some(GachaPool::Weapon),
            "500" => Some(GachaPool::Mixed),
            _ => None,
        }
    }
}

// ============================================================================
// OFF-BANNER NAME SETS
// ============================================================================

/// Five-star characters that are never the featured item on an event banner
pub static OFF_BANNER_CHARACTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "七七",
        "迪卢克",
        "琴",
        "梦见月瑞希",
        "莫娜",
        "提纳里",
        "迪希雅",
        "刻晴",
    ])
});

/// Five-star weapons that are never the featured item on an event banner
pub static OFF_BANNER_WEAPONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "天空之卷",
        "天空之翼",
        "天空之刃",
        "天空之脊",
        "天空之傲",
        "狼的末路",
        "和璞鸢",
        "四风原典",
        "阿莫斯之弓",
        "风鹰剑",
    ])
});

/// Classify a five-star drop as off-banner ("lost the 50/50")
///
/// The permanent pool has no featured item, so nothing there counts as
/// off-banner. Item types other than character/weapon never match.
pub fn is_off_banner(name: &str, item_type: &str, pool: GachaPool) -> bool {
    if pool == GachaPool::Permanent {
        return false;
    }
    match item_type {
        ITEM_TYPE_CHARACTER => OFF_BANNER_CHARACTERS.contains(name),
        ITEM_TYPE_WEAPON => OFF_BANNER_WEAPONS.contains(name),
        _ => false,
    }
}
