// Catalog source settings
use crate::file_manager::{read_json_file_or_default, write_json_file, StoreError};
use crate::utils::get_source_settings_json_path;
use serde::{Deserialize, Serialize};

const DEFAULT_REMOTE_BASE: &str =
    "https://raw.githubusercontent.com/LielXD/CS2-WeaponPaints-Website/refs/heads/main/src/data";
const DEFAULT_FALLBACK_BASE: &str = "http://127.0.0.1:3000/api";

/// Endpoints the catalog client reads from: a primary remote base serving
/// one flat JSON file per family, and an application-local API used as the
/// last-resort fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    pub remote_base: String,
    pub fallback_base: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            remote_base: String::from(DEFAULT_REMOTE_BASE),
            fallback_base: String::from(DEFAULT_FALLBACK_BASE),
        }
    }
}

impl SourceSettings {
    /// Load persisted settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        read_json_file_or_default(&get_source_settings_json_path()).unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), StoreError> {
        write_json_file(&get_source_settings_json_path(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_remote_data() {
        let settings = SourceSettings::default();
        assert!(settings.remote_base.starts_with("https://"));
        assert!(settings.fallback_base.ends_with("/api"));
    }

    #[test]
    fn test_settings_round_trip_json() {
        let settings = SourceSettings {
            remote_base: String::from("https://example.test/data"),
            fallback_base: String::from("http://localhost:8080/api"),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: SourceSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
