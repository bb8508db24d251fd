// Attachment slot wire format
//
// A sticker slot is seven semicolon-delimited fields, a keychain five;
// only the leading id field is ever populated. The all-zero string is the
// sentinel for an empty slot.
use crate::models::{Keychain, Sticker};

/// Number of sticker attachment positions on a weapon.
pub const STICKER_SLOTS: usize = 5;

/// Field count of the sticker wire format.
pub const STICKER_FIELDS: usize = 7;

/// Field count of the keychain wire format.
pub const KEYCHAIN_FIELDS: usize = 5;

pub const EMPTY_STICKER_CODE: &str = "0;0;0;0;0;0;0";

pub const EMPTY_KEYCHAIN_CODE: &str = "0;0;0;0;0";

fn parse_leading_id(raw: &str, sentinel: &str) -> Option<String> {
    if raw.is_empty() || raw == sentinel {
        return None;
    }
    let first = raw.split(';').next().unwrap_or("0");
    if first == "0" {
        None
    } else {
        Some(first.to_string())
    }
}

/// Decoded sticker slot: empty, or an id awaiting catalog resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StickerCode {
    pub id: Option<String>,
}

impl StickerCode {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(sticker: &Sticker) -> Self {
        Self {
            id: Some(sticker.id.clone()),
        }
    }

    pub fn encode(&self) -> String {
        match &self.id {
            Some(id) => format!("{};0;0;0;0;0;0", id),
            None => EMPTY_STICKER_CODE.to_string(),
        }
    }

    /// Parse never fails; anything unparseable is the empty slot.
    pub fn parse(raw: &str) -> Self {
        Self {
            id: parse_leading_id(raw, EMPTY_STICKER_CODE),
        }
    }

    /// Resolve the id against a sticker collection. Unknown ids degrade
    /// to empty rather than erroring.
    pub fn resolve<'a>(&self, stickers: &'a [Sticker]) -> Option<&'a Sticker> {
        let id = self.id.as_deref()?;
        stickers.iter().find(|sticker| sticker.id == id)
    }
}

/// Decoded keychain slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeychainCode {
    pub id: Option<String>,
}

impl KeychainCode {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(keychain: &Keychain) -> Self {
        Self {
            id: Some(keychain.id.clone()),
        }
    }

    pub fn encode(&self) -> String {
        match &self.id {
            Some(id) => format!("{};0;0;0;0", id),
            None => EMPTY_KEYCHAIN_CODE.to_string(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self {
            id: parse_leading_id(raw, EMPTY_KEYCHAIN_CODE),
        }
    }

    pub fn resolve<'a>(&self, keychains: &'a [Keychain]) -> Option<&'a Keychain> {
        let id = self.id.as_deref()?;
        keychains.iter().find(|keychain| keychain.id == id)
    }
}
