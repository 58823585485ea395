/// Fetcher behavior against a local stand-in for the gacha-log endpoint
///
/// Covers pagination termination, cursor propagation, the expired-authkey
/// hard stop, the page safety bound and progress reporting, without touching
/// the real service.
mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{draws, spawn_mock, MockService};
use wishtracker::config::GachaPool;
use wishtracker::errors::FetchError;
use wishtracker::fetcher::GachaLogClient;
use wishtracker::progress::ProgressStore;
use wishtracker::types::TaskProgress;

fn client(progress: &Arc<ProgressStore>) -> GachaLogClient {
    GachaLogClient::new(Arc::clone(progress))
        .unwrap()
        .with_page_delay(Duration::ZERO)
}

#[tokio::test]
async fn terminates_on_first_empty_page() {
    // pages 1 and 2 have records, page 3 is empty
    let service = MockService::with_pages(vec![draws(1000, 20), draws(1020, 5)]);
    let base_url = spawn_mock(Arc::clone(&service)).await;

    let progress = Arc::new(ProgressStore::new());
    let records = client(&progress)
        .fetch_pool(&base_url, GachaPool::Character, None)
        .await
        .unwrap();

    assert_eq!(records.len(), 25);

    // exactly three requests: two full pages plus the terminating empty one
    let requests = service.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].get("page").map(String::as_str), Some("3"));
}

#[tokio::test]
async fn cursor_and_fixed_params_are_sent_per_page() {
    let service = MockService::with_pages(vec![draws(1000, 20), draws(1020, 3)]);
    let base_url = spawn_mock(Arc::clone(&service)).await;

    let progress = Arc::new(ProgressStore::new());
    client(&progress)
        .fetch_pool(&base_url, GachaPool::Weapon, None)
        .await
        .unwrap();

    let requests = service.requests();
    assert_eq!(requests.len(), 3);

    for (i, request) in requests.iter().enumerate() {
        assert_eq!(request.get("size").map(String::as_str), Some("20"));
        assert_eq!(request.get("gacha_type").map(String::as_str), Some("302"));
        assert_eq!(request.get("lang").map(String::as_str), Some("zh-cn"));
        // caller-supplied authkey survives the override
        assert_eq!(request.get("authkey").map(String::as_str), Some("test-key"));
        assert_eq!(
            request.get("page").map(String::as_str),
            Some(format!("{}", i + 1).as_str())
        );
    }

    // end_id starts at 0 and follows the last id of the previous page
    assert_eq!(requests[0].get("end_id").map(String::as_str), Some("0"));
    assert_eq!(requests[1].get("end_id").map(String::as_str), Some("1019"));
    assert_eq!(requests[2].get("end_id").map(String::as_str), Some("1022"));
}

#[tokio::test]
async fn expired_authkey_aborts_with_nothing_accumulated() {
    let service = MockService::expired();
    let base_url = spawn_mock(Arc::clone(&service)).await;

    let progress = Arc::new(ProgressStore::new());
    let result = client(&progress)
        .fetch_pool(&base_url, GachaPool::Character, None)
        .await;

    assert!(matches!(result, Err(FetchError::AuthkeyExpired)));
    // hard stop on page 1, no retry
    assert_eq!(service.requests().len(), 1);
}

#[tokio::test]
async fn page_bound_is_treated_as_completion_not_error() {
    // a service that never runs out of pages must be cut off at the bound
    let service = MockService::endless();
    let base_url = spawn_mock(Arc::clone(&service)).await;

    let progress = Arc::new(ProgressStore::new());
    let records = client(&progress)
        .with_max_pages(4)
        .fetch_pool(&base_url, GachaPool::Character, None)
        .await
        .unwrap();

    // two records per page, the bound ends the fetch cleanly
    assert_eq!(service.requests().len(), 4);
    assert_eq!(records.len(), 8);
}

#[tokio::test]
async fn progress_reflects_most_recent_page_attempted() {
    let service = MockService::with_pages(vec![draws(1000, 20), draws(1020, 2)]);
    let base_url = spawn_mock(Arc::clone(&service)).await;

    let progress = Arc::new(ProgressStore::new());
    progress.create("task-1");

    client(&progress)
        .fetch_pool(&base_url, GachaPool::Permanent, Some("task-1"))
        .await
        .unwrap();

    // the fetcher updated before every request; the last attempt was page 3
    let seen = progress.get("task-1");
    assert_eq!(seen.name, "常驻");
    assert_eq!(seen.page, "第3页");
}

#[tokio::test]
async fn progress_is_not_auto_created_for_unknown_tasks() {
    let service = MockService::with_pages(vec![draws(1000, 1)]);
    let base_url = spawn_mock(Arc::clone(&service)).await;

    let progress = Arc::new(ProgressStore::new());
    client(&progress)
        .fetch_pool(&base_url, GachaPool::Mixed, Some("never-created"))
        .await
        .unwrap();

    assert_eq!(progress.get("never-created"), TaskProgress::default());
}
