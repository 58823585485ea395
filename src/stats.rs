/// Streak and aggregate statistics over one pool's transaction list
///
/// Pure functions: no network, no shared state, same input always produces
/// the same output. Input is the list exactly as the fetcher accumulated it
/// (newest first); the streak extractors reverse to oldest-first internally
/// before walking it.
use crate::config::{
    is_off_banner, GachaPool, PRIMOGEMS_PER_PULL, RANK_FIVE_STAR, RANK_FOUR_STAR, RANK_THREE_STAR,
};
use crate::types::{GachaRecord, PoolStats, PullRecord};

/// Pull-distance records for every five-star drop, oldest first.
///
/// `pulls_before` is the number of draws since the previous five-star,
/// inclusive of the five-star itself; the counter is unaffected by four-star
/// draws in between. Off-banner classification applies only at this tier.
/// `resolve_avatar` maps (name, item_type) to a display URL and must be
/// infallible.
pub fn five_star_pulls<F>(records: &[GachaRecord], pool: GachaPool, resolve_avatar: F) -> Vec<PullRecord>
where
    F: Fn(&str, &str) -> String,
{
    pull_streaks(records, RANK_FIVE_STAR, Some(pool), resolve_avatar)
}

/// Pull-distance records for every four-star drop, oldest first.
/// Same algorithm as [`five_star_pulls`] without the off-banner field.
pub fn four_star_pulls<F>(records: &[GachaRecord], resolve_avatar: F) -> Vec<PullRecord>
where
    F: Fn(&str, &str) -> String,
{
    pull_streaks(records, RANK_FOUR_STAR, None, resolve_avatar)
}

fn pull_streaks<F>(
    records: &[GachaRecord],
    rank: &str,
    off_banner_pool: Option<GachaPool>,
    resolve_avatar: F,
) -> Vec<PullRecord>
where
    F: Fn(&str, &str) -> String,
{
    let mut results = Vec::new();
    let mut counter: u64 = 0;

    // newest-first input, walk oldest-first
    for record in records.iter().rev() {
        counter += 1;
        if record.rank_type != rank {
            continue;
        }

        results.push(PullRecord {
            name: record.name.clone(),
            rank_type: record.rank_type.clone(),
            item_type: record.item_type.clone(),
            time: record.time.clone(),
            pulls_before: counter,
            primogems_cost: counter * PRIMOGEMS_PER_PULL,
            avatar_url: resolve_avatar(&record.name, &record.item_type),
            is_off_banner: off_banner_pool
                .map(|pool| is_off_banner(&record.name, &record.item_type, pool)),
        });
        counter = 0;
    }

    results
}

/// Aggregate counts over the full list; order-independent.
/// An empty list yields all-zero stats, never an error.
pub fn aggregate_stats(records: &[GachaRecord]) -> PoolStats {
    let total_pulls = records.len() as u64;
    let mut stats = PoolStats {
        total_pulls,
        total_primogems: total_pulls * PRIMOGEMS_PER_PULL,
        ..PoolStats::default()
    };

    for record in records {
        match record.rank_type.as_str() {
            RANK_FIVE_STAR => stats.five_star_count += 1,
            RANK_FOUR_STAR => stats.four_star_count += 1,
            RANK_THREE_STAR => stats.three_star_count += 1,
            _ => {}
        }
    }

    stats
}
