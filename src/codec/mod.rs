// Customization codec: attachment slot wire format, wear condition bands,
// and persisted record assembly
mod record;
mod slots;
mod wear;

pub use record::{item_type_of, settings_from_record, to_record, Selection};
pub use slots::{
    KeychainCode, StickerCode, EMPTY_KEYCHAIN_CODE, EMPTY_STICKER_CODE, KEYCHAIN_FIELDS,
    STICKER_FIELDS, STICKER_SLOTS,
};
pub use wear::{classify_wear, WearCondition, WEAR_CONDITIONS};
