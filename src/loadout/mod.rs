// Loadout record storage
//
// Saved customization records live in one JSON file, one entry per
// (weapon_defindex, weapon_team, weapon_paint_id) slot. Saving upserts in
// place; agents are keyed by defindex and team only.
use crate::file_manager::{read_json_file, write_json_file, StoreError};
use crate::models::{DefIndex, LoadoutRecord};
use crate::utils::get_loadouts_json_path;
use log::info;
use std::path::PathBuf;

pub struct LoadoutStore {
    path: PathBuf,
}

impl Default for LoadoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadoutStore {
    pub fn new() -> Self {
        Self {
            path: get_loadouts_json_path(),
        }
    }

    /// Store backed by an explicit file, for callers managing their own
    /// data directory.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// All saved records. A store that has never been written is empty.
    pub fn all(&self) -> Result<Vec<LoadoutRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_json_file(&self.path)
    }

    /// Insert or replace the record occupying this record's key slot.
    pub fn save(&self, record: LoadoutRecord) -> Result<(), StoreError> {
        let mut records = self.all()?;

        let paint_id = record.weapon_paint_id.clone();
        let existing = records.iter().position(|existing| {
            existing.matches_key(
                &record.weapon_defindex,
                record.weapon_team,
                Some(paint_id.as_str()),
            )
        });

        match existing {
            Some(idx) => records[idx] = record,
            None => records.push(record),
        }

        write_json_file(&self.path, &records)?;
        info!("Saved loadout record ({} total)", records.len());
        Ok(())
    }

    pub fn find(
        &self,
        defindex: &DefIndex,
        team: u8,
        paint_id: Option<&str>,
    ) -> Result<Option<LoadoutRecord>, StoreError> {
        let records = self.all()?;
        Ok(records
            .into_iter()
            .find(|record| record.matches_key(defindex, team, paint_id)))
    }

    /// Remove a saved record; returns whether anything was removed.
    pub fn remove(
        &self,
        defindex: &DefIndex,
        team: u8,
        paint_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        let mut records = self.all()?;
        let before = records.len();
        records.retain(|record| !record.matches_key(defindex, team, paint_id));
        if records.len() == before {
            return Ok(false);
        }
        write_json_file(&self.path, &records)?;
        Ok(true)
    }
}
