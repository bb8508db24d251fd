// Weapon classification
mod weapon_types;

pub use weapon_types::{build_weapon_types, DefaultSkin, WeaponType};

use crate::models::{DefIndex, Glove, Skin};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Substring marking knife weapon names.
pub const KNIFE_MARKER: &str = "knife";

/// Sentinel defindex string for the default glove entry.
pub const DEFAULT_GLOVES_DEFINDEX: &str = "gloves_default";

/// Reserved numeric defindex range for glove models.
pub const GLOVE_DEFINDEX_RANGE: RangeInclusive<i64> = 5027..=5035;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    Pistols,
    Rifles,
    Smg,
    Shotguns,
    Snipers,
    Machineguns,
    Knifes,
    Gloves,
    Other,
}

impl WeaponCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponCategory::Pistols => "pistols",
            WeaponCategory::Rifles => "rifles",
            WeaponCategory::Smg => "smg",
            WeaponCategory::Shotguns => "shotguns",
            WeaponCategory::Snipers => "snipers",
            WeaponCategory::Machineguns => "machineguns",
            WeaponCategory::Knifes => "knifes",
            WeaponCategory::Gloves => "gloves",
            WeaponCategory::Other => "other",
        }
    }
}

lazy_static! {
    /// Closed mapping from internal weapon name to category. Knives and
    /// gloves are not listed; they are detected by marker instead.
    static ref WEAPON_CATEGORIES: HashMap<&'static str, WeaponCategory> = {
        use WeaponCategory::*;
        let mut map = HashMap::new();
        // Pistols
        map.insert("weapon_deagle", Pistols);
        map.insert("weapon_elite", Pistols);
        map.insert("weapon_fiveseven", Pistols);
        map.insert("weapon_glock", Pistols);
        map.insert("weapon_hkp2000", Pistols);
        map.insert("weapon_p250", Pistols);
        map.insert("weapon_usp_silencer", Pistols);
        map.insert("weapon_cz75a", Pistols);
        map.insert("weapon_revolver", Pistols);
        map.insert("weapon_tec9", Pistols);
        // Rifles
        map.insert("weapon_ak47", Rifles);
        map.insert("weapon_m4a1", Rifles);
        map.insert("weapon_m4a1_silencer", Rifles);
        map.insert("weapon_aug", Rifles);
        map.insert("weapon_sg556", Rifles);
        map.insert("weapon_famas", Rifles);
        map.insert("weapon_galilar", Rifles);
        // SMGs
        map.insert("weapon_mp7", Smg);
        map.insert("weapon_mp9", Smg);
        map.insert("weapon_bizon", Smg);
        map.insert("weapon_mac10", Smg);
        map.insert("weapon_ump45", Smg);
        map.insert("weapon_p90", Smg);
        map.insert("weapon_mp5sd", Smg);
        // Shotguns
        map.insert("weapon_nova", Shotguns);
        map.insert("weapon_xm1014", Shotguns);
        map.insert("weapon_sawedoff", Shotguns);
        map.insert("weapon_mag7", Shotguns);
        // Snipers
        map.insert("weapon_awp", Snipers);
        map.insert("weapon_ssg08", Snipers);
        map.insert("weapon_scar20", Snipers);
        map.insert("weapon_g3sg1", Snipers);
        // Machine Guns
        map.insert("weapon_m249", Machineguns);
        map.insert("weapon_negev", Machineguns);
        map
    };
}

/// Category for an internal weapon name. Names carrying the knife marker
/// are knives; names absent from the table are `Other`.
pub fn category_of(weapon_name: &str) -> WeaponCategory {
    if weapon_name.contains(KNIFE_MARKER) {
        return WeaponCategory::Knifes;
    }
    WEAPON_CATEGORIES
        .get(weapon_name)
        .copied()
        .unwrap_or(WeaponCategory::Other)
}

/// Glove detection over skin-shaped items. The three checks are
/// deliberately redundant; upstream data is inconsistent about which of
/// the markers any given glove entry carries, so all three stay.
pub fn is_glove(defindex: &DefIndex, paint_name: &str) -> bool {
    match defindex {
        DefIndex::Name(name) if name == DEFAULT_GLOVES_DEFINDEX => return true,
        DefIndex::Num(n) if GLOVE_DEFINDEX_RANGE.contains(n) => return true,
        _ => {}
    }
    paint_name.to_lowercase().contains("gloves")
}

/// Skins for one weapon, by strict defindex equality.
pub fn skins_for_weapon<'a>(skins: &'a [Skin], defindex: &DefIndex) -> Vec<&'a Skin> {
    skins
        .iter()
        .filter(|skin| skin.weapon_defindex == *defindex)
        .collect()
}

/// Gloves for one model. Glove defindexes are compared through the
/// canonical string form so numeric and string identifiers match.
pub fn gloves_for_weapon<'a>(gloves: &'a [Glove], defindex: &DefIndex) -> Vec<&'a Glove> {
    let key = defindex.to_key();
    gloves
        .iter()
        .filter(|glove| glove.weapon_defindex.to_key() == key)
        .collect()
}

/// Group a skins collection into the fixed category buckets. Knife-named
/// skins land in `knifes`; skins classified `Other` have no bucket and are
/// dropped from the grouped view.
pub fn categorize_skins(skins: &[Skin]) -> HashMap<WeaponCategory, Vec<Skin>> {
    let mut categorized: HashMap<WeaponCategory, Vec<Skin>> = HashMap::new();
    for category in [
        WeaponCategory::Pistols,
        WeaponCategory::Rifles,
        WeaponCategory::Smg,
        WeaponCategory::Shotguns,
        WeaponCategory::Snipers,
        WeaponCategory::Machineguns,
        WeaponCategory::Knifes,
        WeaponCategory::Gloves,
    ] {
        categorized.insert(category, Vec::new());
    }

    for skin in skins {
        let category = category_of(&skin.weapon_name);
        if let Some(bucket) = categorized.get_mut(&category) {
            bucket.push(skin.clone());
        }
    }

    categorized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skin(defindex: DefIndex, weapon_name: &str, paint_name: &str) -> Skin {
        Skin {
            weapon_defindex: defindex,
            weapon_name: weapon_name.to_string(),
            paint_name: paint_name.to_string(),
            paint: String::from("0"),
            image: None,
        }
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_of("weapon_deagle"), WeaponCategory::Pistols);
        assert_eq!(category_of("weapon_ak47"), WeaponCategory::Rifles);
        assert_eq!(category_of("weapon_mp5sd"), WeaponCategory::Smg);
        assert_eq!(category_of("weapon_mag7"), WeaponCategory::Shotguns);
        assert_eq!(category_of("weapon_awp"), WeaponCategory::Snipers);
        assert_eq!(category_of("weapon_negev"), WeaponCategory::Machineguns);
    }

    #[test]
    fn test_knife_marker_beats_table() {
        assert_eq!(category_of("weapon_knife_karambit"), WeaponCategory::Knifes);
        assert_eq!(category_of("weapon_bayonet_knife"), WeaponCategory::Knifes);
    }

    #[test]
    fn test_unknown_weapon_is_other() {
        assert_eq!(category_of("weapon_taser"), WeaponCategory::Other);
        assert_eq!(category_of(""), WeaponCategory::Other);
    }

    #[test]
    fn test_is_glove_truth_table() {
        // Sentinel string defindex
        assert!(is_glove(&DefIndex::from("gloves_default"), "Default Gloves"));
        // Reserved numeric range
        assert!(is_glove(&DefIndex::Num(5030), "Specialist Gloves | Crimson Kimono"));
        assert!(is_glove(&DefIndex::Num(5027), "x"));
        assert!(is_glove(&DefIndex::Num(5035), "x"));
        // Paint name marker, case-insensitive
        assert!(is_glove(&DefIndex::Num(500), "Bloodhound Gloves"));
        assert!(is_glove(&DefIndex::Num(500), "BLOODHOUND GLOVES"));
        // Plain weapon skin
        assert!(!is_glove(&DefIndex::Num(500), "Asiimov"));
        assert!(!is_glove(&DefIndex::Num(5026), "Asiimov"));
        assert!(!is_glove(&DefIndex::Num(5036), "Asiimov"));
    }

    #[test]
    fn test_skins_for_weapon_is_strict() {
        let skins = vec![
            skin(DefIndex::Num(7), "weapon_ak47", "Redline"),
            skin(DefIndex::Num(9), "weapon_awp", "Asiimov"),
            skin(DefIndex::Name("7".to_string()), "weapon_ak47", "Vulcan"),
        ];
        let matched = skins_for_weapon(&skins, &DefIndex::Num(7));
        // String "7" does not match numeric 7 for skins.
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].paint_name, "Redline");
    }

    #[test]
    fn test_gloves_for_weapon_normalizes_defindex() {
        let gloves = vec![
            Glove {
                weapon_defindex: DefIndex::Name("5027".to_string()),
                weapon_name: None,
                paint_name: String::from("Bloodhound Gloves | Charred"),
                paint: String::from("10006"),
                image: None,
            },
            Glove {
                weapon_defindex: DefIndex::Num(5030),
                weapon_name: None,
                paint_name: String::from("Specialist Gloves | Emerald Web"),
                paint: String::from("10034"),
                image: None,
            },
        ];
        let matched = gloves_for_weapon(&gloves, &DefIndex::Num(5027));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].paint, "10006");
    }

    #[test]
    fn test_categorize_skins_drops_other() {
        let skins = vec![
            skin(DefIndex::Num(7), "weapon_ak47", "Redline"),
            skin(DefIndex::Num(42), "weapon_knife_flip", "Fade"),
            skin(DefIndex::Num(31), "weapon_taser", "Zap"),
        ];
        let grouped = categorize_skins(&skins);
        assert_eq!(grouped[&WeaponCategory::Rifles].len(), 1);
        assert_eq!(grouped[&WeaponCategory::Knifes].len(), 1);
        assert!(grouped[&WeaponCategory::Gloves].is_empty());
        assert!(!grouped.contains_key(&WeaponCategory::Other));
    }
}
