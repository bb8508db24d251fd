// Customization state and the persisted loadout record
use super::catalog::{DefIndex, Keychain, Sticker};
use serde::{Deserialize, Serialize};

/// Maximum length of a weapon name tag.
pub const NAME_TAG_MAX_LEN: usize = 20;

/// Item type tag carried by every persisted record. The `knifes` spelling
/// matches the stored data and must not be corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapons,
    Gloves,
    Knifes,
    Agents,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Weapons => "weapons",
            ItemType::Gloves => "gloves",
            ItemType::Knifes => "knifes",
            ItemType::Agents => "agents",
        }
    }
}

/// Ephemeral per-item customization state, as edited by a consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationSettings {
    /// Wear float, UI-constrained to [0, 0.99].
    pub wear: f64,
    /// Pattern seed, UI-constrained to [1, 1000].
    pub seed: i32,
    pub name_tag: String,
    pub stat_trak: bool,
    /// Exactly five sticker slots, each empty or a catalog entry.
    pub stickers: [Option<Sticker>; 5],
    pub keychain: Option<Keychain>,
}

impl Default for CustomizationSettings {
    fn default() -> Self {
        Self {
            wear: 0.1,
            seed: 1,
            name_tag: String::new(),
            stat_trak: false,
            stickers: [None, None, None, None, None],
            keychain: None,
        }
    }
}

/// Persisted customization record, keyed by
/// (weapon_defindex, weapon_team, weapon_paint_id).
///
/// Sticker and keychain fields are omitted entirely for gloves; gloves
/// carry no attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutRecord {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub weapon_team: u8,
    pub weapon_defindex: DefIndex,
    pub weapon_paint_id: String,
    pub weapon_wear: f64,
    pub weapon_seed: i32,
    pub weapon_nametag: String,
    pub weapon_stattrak: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_sticker_0: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_sticker_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_sticker_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_sticker_3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_sticker_4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_keychain: Option<String>,
}

impl LoadoutRecord {
    /// Whether this record describes the same item slot as the given key.
    /// Agent records are keyed by defindex and team only; everything else
    /// also matches on the paint id.
    pub fn matches_key(&self, defindex: &DefIndex, team: u8, paint_id: Option<&str>) -> bool {
        if self.weapon_defindex.to_key() != defindex.to_key() || self.weapon_team != team {
            return false;
        }
        if self.item_type == ItemType::Agents {
            return true;
        }
        match paint_id {
            Some(paint) => self.weapon_paint_id == paint,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item_type: ItemType, defindex: DefIndex, team: u8, paint: &str) -> LoadoutRecord {
        LoadoutRecord {
            item_type,
            weapon_team: team,
            weapon_defindex: defindex,
            weapon_paint_id: paint.to_string(),
            weapon_wear: 0.1,
            weapon_seed: 1,
            weapon_nametag: String::new(),
            weapon_stattrak: 0,
            weapon_sticker_0: None,
            weapon_sticker_1: None,
            weapon_sticker_2: None,
            weapon_sticker_3: None,
            weapon_sticker_4: None,
            weapon_keychain: None,
        }
    }

    #[test]
    fn test_item_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ItemType::Knifes).unwrap(), "\"knifes\"");
        assert_eq!(serde_json::to_string(&ItemType::Weapons).unwrap(), "\"weapons\"");
    }

    #[test]
    fn test_matches_key_uses_paint_for_weapons() {
        let rec = record(ItemType::Weapons, DefIndex::Num(7), 2, "44");
        assert!(rec.matches_key(&DefIndex::Num(7), 2, Some("44")));
        assert!(!rec.matches_key(&DefIndex::Num(7), 2, Some("45")));
        assert!(!rec.matches_key(&DefIndex::Num(7), 3, Some("44")));
    }

    #[test]
    fn test_matches_key_ignores_paint_for_agents() {
        let rec = record(ItemType::Agents, DefIndex::Num(5036), 3, "5036");
        assert!(rec.matches_key(&DefIndex::Num(5036), 3, Some("anything")));
        assert!(rec.matches_key(&DefIndex::Num(5036), 3, None));
    }

    #[test]
    fn test_glove_record_omits_attachment_fields() {
        let rec = record(ItemType::Gloves, DefIndex::Num(5030), 2, "10006");
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("weapon_sticker_0").is_none());
        assert!(json.get("weapon_keychain").is_none());
        assert_eq!(json.get("type").unwrap(), "gloves");
    }

    #[test]
    fn test_string_defindex_key_matches_numeric() {
        let rec = record(ItemType::Weapons, DefIndex::Name("7".to_string()), 2, "44");
        assert!(rec.matches_key(&DefIndex::Num(7), 2, Some("44")));
    }
}
