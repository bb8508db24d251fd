// In-process catalog cache
//
// All six item families share a single freshness timestamp: writing any
// one family marks every family fresh. This mirrors the stored data's
// upstream behavior and is relied on by the fetch ladder.
use crate::models::{Agent, Glove, Keychain, MusicKit, Skin, Sticker};
use serde::Serialize;

/// Shared cache lifetime: one hour.
pub const CACHE_TTL_MS: i64 = 60 * 60 * 1000;

#[derive(Debug, Default)]
pub struct CatalogCache {
    skins: Vec<Skin>,
    agents: Vec<Agent>,
    stickers: Vec<Sticker>,
    keychains: Vec<Keychain>,
    gloves: Vec<Glove>,
    music: Vec<MusicKit>,
    /// Millisecond timestamp of the last successful write; 0 = never.
    last_updated: i64,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the shared timestamp is set and younger than the TTL.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.last_updated > 0 && now_ms - self.last_updated < CACHE_TTL_MS
    }

    pub fn last_updated(&self) -> i64 {
        self.last_updated
    }

    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn keychains(&self) -> &[Keychain] {
        &self.keychains
    }

    pub fn gloves(&self) -> &[Glove] {
        &self.gloves
    }

    pub fn music(&self) -> &[MusicKit] {
        &self.music
    }

    // Each put replaces the family's collection whole and bumps the shared
    // timestamp. There is no per-entry mutation.

    pub fn put_skins(&mut self, items: Vec<Skin>, now_ms: i64) {
        self.skins = items;
        self.last_updated = now_ms;
    }

    pub fn put_agents(&mut self, items: Vec<Agent>, now_ms: i64) {
        self.agents = items;
        self.last_updated = now_ms;
    }

    pub fn put_stickers(&mut self, items: Vec<Sticker>, now_ms: i64) {
        self.stickers = items;
        self.last_updated = now_ms;
    }

    pub fn put_keychains(&mut self, items: Vec<Keychain>, now_ms: i64) {
        self.keychains = items;
        self.last_updated = now_ms;
    }

    pub fn put_gloves(&mut self, items: Vec<Glove>, now_ms: i64) {
        self.gloves = items;
        self.last_updated = now_ms;
    }

    pub fn put_music(&mut self, items: Vec<MusicKit>, now_ms: i64) {
        self.music = items;
        self.last_updated = now_ms;
    }

    /// Empty every collection and reset the timestamp to the epoch.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn sizes(&self) -> CacheSizes {
        CacheSizes {
            skins: self.skins.len(),
            agents: self.agents.len(),
            stickers: self.stickers.len(),
            keychains: self.keychains.len(),
            gloves: self.gloves.len(),
            music: self.music.len(),
        }
    }

    pub fn info_at(&self, now_ms: i64) -> CacheInfo {
        CacheInfo {
            last_updated: self.last_updated,
            is_valid: self.is_valid_at(now_ms),
            sizes: self.sizes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSizes {
    pub skins: usize,
    pub agents: usize,
    pub stickers: usize,
    pub keychains: usize,
    pub gloves: usize,
    pub music: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheInfo {
    pub last_updated: i64,
    pub is_valid: bool,
    pub sizes: CacheSizes,
}
