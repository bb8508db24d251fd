// Armory - weapon skin customization core.
// Catalog fetching/caching, weapon classification, and the loadout codec.
pub mod catalog;
pub mod classifier;
pub mod codec;
pub mod file_manager;
pub mod loadout;
pub mod models;
pub mod utils;

pub use catalog::{
    CacheInfo, CacheSizes, CatalogCache, CatalogClient, HttpTransport, Transport, TransportError,
    CACHE_TTL_MS,
};
pub use classifier::{
    build_weapon_types, categorize_skins, category_of, gloves_for_weapon, is_glove,
    skins_for_weapon, DefaultSkin, WeaponCategory, WeaponType, DEFAULT_GLOVES_DEFINDEX,
    GLOVE_DEFINDEX_RANGE, KNIFE_MARKER,
};
pub use codec::{
    classify_wear, item_type_of, settings_from_record, to_record, KeychainCode, Selection,
    StickerCode, WearCondition, EMPTY_KEYCHAIN_CODE, EMPTY_STICKER_CODE, KEYCHAIN_FIELDS,
    STICKER_FIELDS, STICKER_SLOTS, WEAR_CONDITIONS,
};
pub use file_manager::StoreError;
pub use loadout::LoadoutStore;
pub use models::*;
