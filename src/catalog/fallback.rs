// Fallback source response shapes
//
// The application-local fallback endpoints do not serve the flat arrays
// the primary source does; each family has its own envelope that must be
// flattened before it enters the cache.
use crate::models::{Agent, Glove, Keychain, Skin, Sticker};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Skins come back grouped by weapon category.
#[derive(Debug, Default, Deserialize)]
pub struct SkinsFallback {
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<Skin>>,
}

impl SkinsFallback {
    pub fn into_flat(self) -> Vec<Skin> {
        self.categories.into_values().flatten().collect()
    }
}

/// Agents come back as two team lists; terrorist entries lead.
#[derive(Debug, Default, Deserialize)]
pub struct AgentsFallback {
    #[serde(default)]
    pub terrorist: Vec<Agent>,
    #[serde(default, rename = "counterTerrorist")]
    pub counter_terrorist: Vec<Agent>,
}

impl AgentsFallback {
    pub fn into_flat(self) -> Vec<Agent> {
        let mut agents = self.terrorist;
        agents.extend(self.counter_terrorist);
        agents
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StickersFallback {
    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

impl StickersFallback {
    pub fn into_flat(self) -> Vec<Sticker> {
        self.stickers
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct KeychainsFallback {
    #[serde(default)]
    pub keychains: Vec<Keychain>,
}

impl KeychainsFallback {
    pub fn into_flat(self) -> Vec<Keychain> {
        self.keychains
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GlovesFallback {
    #[serde(default)]
    pub gloves: Vec<Glove>,
}

impl GlovesFallback {
    pub fn into_flat(self) -> Vec<Glove> {
        self.gloves
    }
}
