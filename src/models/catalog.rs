// Catalog item models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal identifier for a weapon/glove model. Upstream data carries it
/// as a number for most items and as a string for some legacy glove
/// entries, so both forms round-trip through serde untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefIndex {
    Num(i64),
    Name(String),
}

impl DefIndex {
    /// Canonical string form used for all cross-type comparisons.
    pub fn to_key(&self) -> String {
        match self {
            DefIndex::Num(n) => n.to_string(),
            DefIndex::Name(s) => s.clone(),
        }
    }

    pub fn as_num(&self) -> Option<i64> {
        match self {
            DefIndex::Num(n) => Some(*n),
            DefIndex::Name(_) => None,
        }
    }

    /// Parse an agent model string into a defindex, keeping the raw string
    /// when it is not numeric.
    pub fn from_model(model: &str) -> Self {
        match model.parse::<i64>() {
            Ok(n) => DefIndex::Num(n),
            Err(_) => DefIndex::Name(model.to_string()),
        }
    }
}

impl fmt::Display for DefIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefIndex::Num(n) => write!(f, "{}", n),
            DefIndex::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for DefIndex {
    fn from(n: i64) -> Self {
        DefIndex::Num(n)
    }
}

impl From<&str> for DefIndex {
    fn from(s: &str) -> Self {
        DefIndex::Name(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub weapon_defindex: DefIndex,
    pub weapon_name: String,
    pub paint_name: String,
    pub paint: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glove {
    pub weapon_defindex: DefIndex,
    #[serde(default)]
    pub weapon_name: Option<String>,
    pub paint_name: String,
    pub paint: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Agent models carry their defindex as a string in the `model` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub model: String,
    pub agent_name: String,
    #[serde(default)]
    pub team: Option<u8>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keychain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicKit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One named category of catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemFamily {
    Skins,
    Agents,
    Stickers,
    Keychains,
    Gloves,
    Music,
}

impl ItemFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemFamily::Skins => "skins",
            ItemFamily::Agents => "agents",
            ItemFamily::Stickers => "stickers",
            ItemFamily::Keychains => "keychains",
            ItemFamily::Gloves => "gloves",
            ItemFamily::Music => "music",
        }
    }

    /// File name of this family's dataset on the primary source.
    pub fn file_name(&self) -> &'static str {
        match self {
            ItemFamily::Skins => "skins.json",
            ItemFamily::Agents => "agents.json",
            ItemFamily::Stickers => "stickers.json",
            ItemFamily::Keychains => "keychains.json",
            ItemFamily::Gloves => "gloves.json",
            ItemFamily::Music => "music.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defindex_deserializes_both_forms() {
        let num: DefIndex = serde_json::from_str("5030").unwrap();
        assert_eq!(num, DefIndex::Num(5030));

        let name: DefIndex = serde_json::from_str("\"gloves_default\"").unwrap();
        assert_eq!(name, DefIndex::Name("gloves_default".to_string()));
    }

    #[test]
    fn test_defindex_key_normalization() {
        assert_eq!(DefIndex::Num(7).to_key(), "7");
        assert_eq!(DefIndex::Name("7".to_string()).to_key(), "7");
        assert_eq!(DefIndex::Num(7).as_num(), Some(7));
        assert_eq!(DefIndex::Name("7".to_string()).as_num(), None);
        assert_eq!(DefIndex::from_model("5036"), DefIndex::Num(5036));
        assert_eq!(
            DefIndex::from_model("gloves_default"),
            DefIndex::Name("gloves_default".to_string())
        );
    }

    #[test]
    fn test_family_file_names() {
        assert_eq!(ItemFamily::Skins.file_name(), "skins.json");
        assert_eq!(ItemFamily::Music.file_name(), "music.json");
        assert_eq!(ItemFamily::Keychains.as_str(), "keychains");
    }
}
