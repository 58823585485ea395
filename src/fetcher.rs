/// Paginated gacha-log fetcher
///
/// Turns one opaque query URL into the complete transaction list for a pool
/// by walking the cursor-based endpoint page by page. Progress is reported
/// through the shared `ProgressStore` before every page request so a poller
/// can follow along.
///
/// Pagination is cursor-driven: the service keys on `end_id` (the id of the
/// last record of the previous page) and ignores the raw page number, but it
/// still expects `page` to be present and incrementing, so both are sent.
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::arguments::is_debug_fetcher_enabled;
use crate::config::{
    GachaPool, API_LANG, MAX_PAGES, PAGE_DELAY_MS, PAGE_SIZE, REQUEST_TIMEOUT_SECS,
    RETCODE_AUTHKEY_EXPIRED, USER_AGENT,
};
use crate::errors::FetchError;
use crate::logger::{self, LogTag};
use crate::progress::ProgressStore;
use crate::types::{GachaLogResponse, GachaRecord};

/// Query keys the fetcher owns; caller-supplied values for these are dropped
const OVERRIDDEN_KEYS: [&str; 5] = ["size", "gacha_type", "page", "lang", "end_id"];

pub struct GachaLogClient {
    http: Client,
    progress: Arc<ProgressStore>,
    page_delay: Duration,
    max_pages: u32,
}

impl GachaLogClient {
    pub fn new(progress: Arc<ProgressStore>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            progress,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
            max_pages: MAX_PAGES,
        })
    }

    /// Override the inter-page delay; tests use zero to avoid real waits
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Lower the per-pool page bound so runaway-pagination handling can be
    /// exercised without thousands of requests
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch the full transaction log for one pool.
    ///
    /// Returns every record the service has for `pool`, in fetch order
    /// (newest first, as emitted page by page). `AuthkeyExpired` aborts the
    /// fetch immediately; any transport or decode failure is fatal and no
    /// partial list is returned. An exhausted log yields an empty Vec, not
    /// an error.
    pub async fn fetch_pool(
        &self,
        base_url: &str,
        pool: GachaPool,
        task_id: Option<&str>,
    ) -> Result<Vec<GachaRecord>, FetchError> {
        let base = Url::parse(base_url)?;
        let carried: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| !OVERRIDDEN_KEYS.contains(&key.as_ref()))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut records: Vec<GachaRecord> = Vec::new();
        let mut end_id = "0".to_string();

        for page in 1..=self.max_pages {
            if let Some(task) = task_id {
                self.progress
                    .update(task, pool.display_name(), &format!("第{}页", page));
            }

            let url = build_page_url(&base, &carried, pool, page, &end_id);
            if is_debug_fetcher_enabled() {
                logger::debug(
                    LogTag::Fetcher,
                    &format!(
                        "Requesting pool {} page {} (end_id={})",
                        pool.id(),
                        page,
                        end_id
                    ),
                );
            }

            let response = self.http.get(url).send().await?;
            let body: GachaLogResponse = response.json().await?;

            if body.retcode == RETCODE_AUTHKEY_EXPIRED {
                logger::warning(
                    LogTag::Fetcher,
                    &format!("Authkey expired while fetching pool {}", pool.id()),
                );
                return Err(FetchError::AuthkeyExpired);
            }

            let page_items = body
                .data
                .map(|data| data.list)
                .ok_or_else(|| {
                    FetchError::InvalidResponse(format!(
                        "retcode {} with no data ({})",
                        body.retcode,
                        body.message.unwrap_or_default()
                    ))
                })?;

            if page_items.is_empty() {
                break;
            }

            if let Some(last) = page_items.last() {
                end_id = last.id.clone();
            }
            records.extend(page_items);

            tokio::time::sleep(self.page_delay).await;
        }

        logger::info(
            LogTag::Fetcher,
            &format!(
                "Pool {} ({}) complete: {} records",
                pool.display_name(),
                pool.id(),
                records.len()
            ),
        );

        Ok(records)
    }
}

/// Rebuild the page URL: caller's surviving query params plus the five
/// fetcher-owned ones
fn build_page_url(
    base: &Url,
    carried: &[(String, String)],
    pool: GachaPool,
    page: u32,
    end_id: &str,
) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in carried {
            query.append_pair(key, value);
        }
        query.append_pair("size", &PAGE_SIZE.to_string());
        query.append_pair("gacha_type", pool.id());
        query.append_pair("page", &page.to_string());
        query.append_pair("lang", API_LANG);
        query.append_pair("end_id", end_id);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn page_url_overrides_fetcher_owned_keys() {
        let base =
            Url::parse("https://example.com/gacha/log?authkey=abc&size=6&page=99&lang=en").unwrap();
        let carried: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| !OVERRIDDEN_KEYS.contains(&key.as_ref()))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let url = build_page_url(&base, &carried, GachaPool::Character, 3, "12345");
        let query = query_map(&url);

        assert_eq!(query.get("authkey").map(String::as_str), Some("abc"));
        assert_eq!(query.get("size").map(String::as_str), Some("20"));
        assert_eq!(query.get("gacha_type").map(String::as_str), Some("301"));
        assert_eq!(query.get("page").map(String::as_str), Some("3"));
        assert_eq!(query.get("lang").map(String::as_str), Some("zh-cn"));
        assert_eq!(query.get("end_id").map(String::as_str), Some("12345"));
    }

    #[test]
    fn first_page_cursor_is_zero() {
        let base = Url::parse("https://example.com/gacha/log?authkey=abc").unwrap();
        let url = build_page_url(&base, &[], GachaPool::Permanent, 1, "0");
        let query = query_map(&url);
        assert_eq!(query.get("end_id").map(String::as_str), Some("0"));
        assert_eq!(query.get("page").map(String::as_str), Some("1"));
    }
}
