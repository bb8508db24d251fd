// Weapon type derivation
//
// Weapon types are derived from the skins and gloves collections, never
// fetched: one entry per distinct defindex, represented by its base
// ("Default") catalog entry where one exists.
use super::{category_of, WeaponCategory};
use crate::models::{DefIndex, Glove, Skin};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Marker in a paint name identifying the base, unskinned variant.
const DEFAULT_MARKER: &str = "Default";

/// Star prefix carried by knife and glove paint names.
const SPECIAL_PREFIX: &str = "★ ";

/// The catalog entry chosen to represent a weapon type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultSkin {
    Skin(Skin),
    Glove(Glove),
}

/// One distinct base weapon or glove model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponType {
    pub weapon_defindex: DefIndex,
    pub weapon_name: String,
    pub display_name: String,
    pub default_skin: DefaultSkin,
    pub category: WeaponCategory,
}

/// Strip the "| <variant>" suffix and any leading star marker from a
/// paint name: "★ Karambit | Doppler" -> "Karambit".
fn display_name_of(paint_name: &str) -> String {
    let base = paint_name.split('|').next().unwrap_or(paint_name).trim();
    base.strip_prefix(SPECIAL_PREFIX).unwrap_or(base).trim().to_string()
}

/// Derive the deduplicated weapon type list from a skins collection and a
/// gloves collection. Exactly one entry per distinct defindex; sorted by
/// display name, case-insensitively.
pub fn build_weapon_types(skins: &[Skin], gloves: &[Glove]) -> Vec<WeaponType> {
    let mut weapon_map: HashMap<String, WeaponType> = HashMap::new();

    for skin in skins {
        if !skin.paint_name.contains(DEFAULT_MARKER) {
            continue;
        }
        weapon_map.insert(
            skin.weapon_defindex.to_key(),
            WeaponType {
                weapon_defindex: skin.weapon_defindex.clone(),
                weapon_name: skin.weapon_name.clone(),
                display_name: display_name_of(&skin.paint_name),
                default_skin: DefaultSkin::Skin(skin.clone()),
                category: category_of(&skin.weapon_name),
            },
        );
    }

    // One representative per glove model: the Default entry when present,
    // otherwise the first entry seen.
    let mut glove_types: HashMap<String, &Glove> = HashMap::new();
    for glove in gloves {
        let key = glove.weapon_defindex.to_key();
        if glove.paint_name.contains(DEFAULT_MARKER) {
            glove_types.insert(key, glove);
        } else {
            glove_types.entry(key).or_insert(glove);
        }
    }

    for glove in glove_types.into_values() {
        weapon_map.insert(
            glove.weapon_defindex.to_key(),
            WeaponType {
                weapon_defindex: glove.weapon_defindex.clone(),
                weapon_name: glove
                    .weapon_name
                    .clone()
                    .unwrap_or_else(|| String::from("gloves")),
                display_name: display_name_of(&glove.paint_name),
                default_skin: DefaultSkin::Glove(glove.clone()),
                category: WeaponCategory::Gloves,
            },
        );
    }

    let mut weapon_types: Vec<WeaponType> = weapon_map.into_values().collect();
    weapon_types.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
    });
    weapon_types
}
