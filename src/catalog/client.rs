// Catalog fetcher
//
// Read ladder per family: fresh cache -> primary source -> stale cache ->
// local fallback -> empty. Failures never reach the caller; the worst
// outcome of any fetch is an empty collection.
use super::cache::{CacheInfo, CatalogCache};
use super::fallback::{
    AgentsFallback, GlovesFallback, KeychainsFallback, SkinsFallback, StickersFallback,
};
use super::transport::{HttpTransport, Transport, TransportError};
use crate::models::{
    Agent, Glove, ItemFamily, Keychain, MusicKit, Skin, SourceSettings, Sticker,
};
use log::{error, info, warn};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct CatalogClient {
    cache: Mutex<CatalogCache>,
    transport: Box<dyn Transport>,
    settings: SourceSettings,
}

impl CatalogClient {
    pub fn new(settings: SourceSettings) -> Self {
        Self::with_transport(settings, Box::new(HttpTransport))
    }

    pub fn with_transport(settings: SourceSettings, transport: Box<dyn Transport>) -> Self {
        Self {
            cache: Mutex::new(CatalogCache::new()),
            transport,
            settings,
        }
    }

    pub fn fetch_skins(&self, force_refresh: bool) -> Vec<Skin> {
        self.fetch_family(
            ItemFamily::Skins,
            force_refresh,
            |cache: &CatalogCache| cache.skins(),
            |cache, items, now| cache.put_skins(items, now),
            Some(parse_skins_fallback),
        )
    }

    pub fn fetch_agents(&self, force_refresh: bool) -> Vec<Agent> {
        self.fetch_family(
            ItemFamily::Agents,
            force_refresh,
            |cache: &CatalogCache| cache.agents(),
            |cache, items, now| cache.put_agents(items, now),
            Some(parse_agents_fallback),
        )
    }

    pub fn fetch_stickers(&self, force_refresh: bool) -> Vec<Sticker> {
        self.fetch_family(
            ItemFamily::Stickers,
            force_refresh,
            |cache: &CatalogCache| cache.stickers(),
            |cache, items, now| cache.put_stickers(items, now),
            Some(parse_stickers_fallback),
        )
    }

    pub fn fetch_keychains(&self, force_refresh: bool) -> Vec<Keychain> {
        self.fetch_family(
            ItemFamily::Keychains,
            force_refresh,
            |cache: &CatalogCache| cache.keychains(),
            |cache, items, now| cache.put_keychains(items, now),
            Some(parse_keychains_fallback),
        )
    }

    pub fn fetch_gloves(&self, force_refresh: bool) -> Vec<Glove> {
        self.fetch_family(
            ItemFamily::Gloves,
            force_refresh,
            |cache: &CatalogCache| cache.gloves(),
            |cache, items, now| cache.put_gloves(items, now),
            Some(parse_gloves_fallback),
        )
    }

    /// Music has no local fallback; a failed fetch serves whatever is
    /// cached, possibly nothing.
    pub fn fetch_music(&self, force_refresh: bool) -> Vec<MusicKit> {
        self.fetch_family(
            ItemFamily::Music,
            force_refresh,
            |cache: &CatalogCache| cache.music(),
            |cache, items, now| cache.put_music(items, now),
            None,
        )
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    pub fn cache_info(&self) -> CacheInfo {
        self.cache.lock().info_at(now_ms())
    }

    fn fetch_family<T>(
        &self,
        family: ItemFamily,
        force_refresh: bool,
        read: fn(&CatalogCache) -> &[T],
        write: fn(&mut CatalogCache, Vec<T>, i64),
        fallback_parse: Option<fn(Value) -> Vec<T>>,
    ) -> Vec<T>
    where
        T: DeserializeOwned + Clone,
    {
        if !force_refresh {
            let cache = self.cache.lock();
            if cache.is_valid_at(now_ms()) && !read(&cache).is_empty() {
                return read(&cache).to_vec();
            }
        }

        let url = format!("{}/{}", self.settings.remote_base, family.file_name());
        let primary = self.transport.get_json(&url).and_then(|value| {
            serde_json::from_value::<Vec<T>>(value).map_err(|e| TransportError::Body(e.to_string()))
        });

        let err = match primary {
            Ok(items) => {
                let mut cache = self.cache.lock();
                write(&mut cache, items.clone(), now_ms());
                return items;
            }
            Err(err) => err,
        };

        warn!(
            "Failed to fetch {} from primary source: {}",
            family.as_str(),
            err
        );

        {
            let cache = self.cache.lock();
            let cached = read(&cache);
            if !cached.is_empty() {
                info!(
                    "Returning cached {} data due to fetch error",
                    family.as_str()
                );
                return cached.to_vec();
            }
        }

        // Nothing cached; one fallback attempt for families that have one.
        let Some(parse) = fallback_parse else {
            return Vec::new();
        };

        info!("Attempting fallback source for {} data", family.as_str());
        let fallback_url = format!("{}/{}", self.settings.fallback_base, family.as_str());
        match self.transport.get_json(&fallback_url) {
            Ok(value) => {
                let items = parse(value);
                let mut cache = self.cache.lock();
                write(&mut cache, items.clone(), now_ms());
                items
            }
            Err(fallback_err) => {
                error!(
                    "Fallback source for {} also failed: {}",
                    family.as_str(),
                    fallback_err
                );
                Vec::new()
            }
        }
    }
}

fn parse_skins_fallback(value: Value) -> Vec<Skin> {
    match serde_json::from_value::<SkinsFallback>(value) {
        Ok(payload) => payload.into_flat(),
        Err(err) => {
            warn!("Malformed skins fallback payload: {}", err);
            Vec::new()
        }
    }
}

fn parse_agents_fallback(value: Value) -> Vec<Agent> {
    match serde_json::from_value::<AgentsFallback>(value) {
        Ok(payload) => payload.into_flat(),
        Err(err) => {
            warn!("Malformed agents fallback payload: {}", err);
            Vec::new()
        }
    }
}

fn parse_stickers_fallback(value: Value) -> Vec<Sticker> {
    match serde_json::from_value::<StickersFallback>(value) {
        Ok(payload) => payload.into_flat(),
        Err(err) => {
            warn!("Malformed stickers fallback payload: {}", err);
            Vec::new()
        }
    }
}

fn parse_keychains_fallback(value: Value) -> Vec<Keychain> {
    match serde_json::from_value::<KeychainsFallback>(value) {
        Ok(payload) => payload.into_flat(),
        Err(err) => {
            warn!("Malformed keychains fallback payload: {}", err);
            Vec::new()
        }
    }
}

fn parse_gloves_fallback(value: Value) -> Vec<Glove> {
    match serde_json::from_value::<GlovesFallback>(value) {
        Ok(payload) => payload.into_flat(),
        Err(err) => {
            warn!("Malformed gloves fallback payload: {}", err);
            Vec::new()
        }
    }
}
