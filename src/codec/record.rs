// Persisted record assembly
use super::slots::{KeychainCode, StickerCode};
use crate::classifier::{is_glove, KNIFE_MARKER};
use crate::models::{
    Agent, CustomizationSettings, DefIndex, ItemType, Keychain, LoadoutRecord, Skin, Sticker,
    NAME_TAG_MAX_LEN,
};

/// The item a customization applies to. A save with no selection is a
/// caller-side no-op; the codec always receives one.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    Skin(&'a Skin),
    Agent(&'a Agent),
}

/// Item type tag for a selection. Glove detection runs before the knife
/// marker check.
pub fn item_type_of(selection: &Selection<'_>) -> ItemType {
    match selection {
        Selection::Skin(skin) => {
            if is_glove(&skin.weapon_defindex, &skin.paint_name) {
                ItemType::Gloves
            } else if skin.weapon_name.contains(KNIFE_MARKER) {
                ItemType::Knifes
            } else {
                ItemType::Weapons
            }
        }
        Selection::Agent(_) => ItemType::Agents,
    }
}

fn cap_name_tag(name_tag: &str) -> String {
    name_tag.chars().take(NAME_TAG_MAX_LEN).collect()
}

fn encode_sticker(slot: &Option<Sticker>) -> String {
    match slot {
        Some(sticker) => StickerCode::of(sticker).encode(),
        None => StickerCode::empty().encode(),
    }
}

fn encode_keychain(slot: &Option<Keychain>) -> String {
    match slot {
        Some(keychain) => KeychainCode::of(keychain).encode(),
        None => KeychainCode::empty().encode(),
    }
}

/// Assemble the persisted record for the current settings. Sticker and
/// keychain fields are present for every item type except gloves.
pub fn to_record(
    settings: &CustomizationSettings,
    selection: Selection<'_>,
    team: u8,
) -> LoadoutRecord {
    let item_type = item_type_of(&selection);

    let (weapon_defindex, weapon_paint_id) = match selection {
        Selection::Skin(skin) => (skin.weapon_defindex.clone(), skin.paint.clone()),
        Selection::Agent(agent) => (DefIndex::from_model(&agent.model), agent.model.clone()),
    };

    let with_attachments = item_type != ItemType::Gloves;

    LoadoutRecord {
        item_type,
        weapon_team: team,
        weapon_defindex,
        weapon_paint_id,
        weapon_wear: settings.wear,
        weapon_seed: settings.seed,
        weapon_nametag: cap_name_tag(&settings.name_tag),
        weapon_stattrak: settings.stat_trak as u8,
        weapon_sticker_0: with_attachments.then(|| encode_sticker(&settings.stickers[0])),
        weapon_sticker_1: with_attachments.then(|| encode_sticker(&settings.stickers[1])),
        weapon_sticker_2: with_attachments.then(|| encode_sticker(&settings.stickers[2])),
        weapon_sticker_3: with_attachments.then(|| encode_sticker(&settings.stickers[3])),
        weapon_sticker_4: with_attachments.then(|| encode_sticker(&settings.stickers[4])),
        weapon_keychain: with_attachments.then(|| encode_keychain(&settings.keychain)),
    }
}

/// Reconstruct settings from a persisted record, resolving attachment ids
/// against previously fetched catalog collections. Missing fields and
/// unresolved ids decode to empty slots.
pub fn settings_from_record(
    record: &LoadoutRecord,
    stickers: &[Sticker],
    keychains: &[Keychain],
) -> CustomizationSettings {
    let decode_sticker = |field: &Option<String>| -> Option<Sticker> {
        StickerCode::parse(field.as_deref().unwrap_or(""))
            .resolve(stickers)
            .cloned()
    };

    CustomizationSettings {
        wear: record.weapon_wear,
        seed: record.weapon_seed,
        name_tag: cap_name_tag(&record.weapon_nametag),
        stat_trak: record.weapon_stattrak == 1,
        stickers: [
            decode_sticker(&record.weapon_sticker_0),
            decode_sticker(&record.weapon_sticker_1),
            decode_sticker(&record.weapon_sticker_2),
            decode_sticker(&record.weapon_sticker_3),
            decode_sticker(&record.weapon_sticker_4),
        ],
        keychain: KeychainCode::parse(record.weapon_keychain.as_deref().unwrap_or(""))
            .resolve(keychains)
            .cloned(),
    }
}
