/// Avatar URL resolver for characters and weapons
///
/// Preloads icon maps from the miHoYo blackboard endpoints at startup and
/// answers `(name, item_type)` lookups with a mapped icon URL, falling back
/// to a deterministic generated placeholder for unknown items. Resolution is
/// infallible; only the preload can fail, and the service keeps running on
/// placeholders if it does.
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::arguments::is_debug_avatars_enabled;
use crate::config::{ITEM_TYPE_CHARACTER, ITEM_TYPE_WEAPON};
use crate::logger::{self, LogTag};

/// Character icon list (channel_id=25)
const CHARACTER_AVATAR_URL: &str = "https://act-api-takumi-static.mihoyo.com/common/blackboard/ys_obc/v1/home/content/list?app_sn=ys_obc&channel_id=25";

/// Weapon icon list (channel_id=5)
const WEAPON_AVATAR_URL: &str = "https://act-api-takumi-static.mihoyo.com/common/blackboard/ys_obc/v1/home/content/list?app_sn=ys_obc&channel_id=5";

/// Preload timeout; the blackboard endpoint can be slow
const PRELOAD_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default)]
pub struct AvatarResolver {
    characters: RwLock<HashMap<String, String>>,
    weapons: RwLock<HashMap<String, String>>,
}

impl AvatarResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch both icon maps. Call once at startup; a failure leaves the
    /// resolver on placeholder URLs.
    pub async fn preload(&self) -> Result<(), reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PRELOAD_TIMEOUT_SECS))
            .build()?;

        let characters = fetch_icon_map(&client, CHARACTER_AVATAR_URL).await?;
        let weapons = fetch_icon_map(&client, WEAPON_AVATAR_URL).await?;

        logger::info(
            LogTag::Avatars,
            &format!(
                "Preloaded {} character and {} weapon icons",
                characters.len(),
                weapons.len()
            ),
        );

        if let Ok(mut map) = self.characters.write() {
            *map = characters;
        }
        if let Ok(mut map) = self.weapons.write() {
            *map = weapons;
        }
        Ok(())
    }

    /// Resolve a display URL for any (name, item_type) pair. Unknown items
    /// get a generated placeholder, so this never fails.
    pub fn resolve(&self, name: &str, item_type: &str) -> String {
        let mapped = match item_type {
            ITEM_TYPE_CHARACTER => self
                .characters
                .read()
                .ok()
                .and_then(|map| map.get(name).cloned()),
            ITEM_TYPE_WEAPON => self
                .weapons
                .read()
                .ok()
                .and_then(|map| map.get(name).cloned()),
            _ => None,
        };

        mapped.unwrap_or_else(|| placeholder_url(name))
    }
}

/// Deterministic placeholder for items missing from the icon maps
fn placeholder_url(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&size=128",
        encoded
    )
}

/// Parse the blackboard response: `{retcode, data: {list: [{list: [{title, icon}]}]}}`
async fn fetch_icon_map(
    client: &Client,
    url: &str,
) -> Result<HashMap<String, String>, reqwest::Error> {
    let json: Value = client.get(url).send().await?.json().await?;

    let mut icons = HashMap::new();
    if json["retcode"].as_i64() == Some(0) {
        if let Some(entries) = json["data"]["list"][0]["list"].as_array() {
            for entry in entries {
                let title = entry["title"].as_str().unwrap_or_default();
                let icon = entry["icon"].as_str().unwrap_or_default();
                if !title.is_empty() && !icon.is_empty() {
                    icons.insert(title.to_string(), icon.to_string());
                }
            }
        }
    } else if is_debug_avatars_enabled() {
        logger::debug(
            LogTag::Avatars,
            &format!("Icon endpoint returned retcode {}", json["retcode"]),
        );
    }

    Ok(icons)
}
