//! The vault - typed save/load over a key-value store
//!
//! Records are stored as JSON under fixed keys. Loads fall back to the
//! default record when a key is missing or its payload no longer decodes;
//! a stale save never blocks a fresh start. Saves propagate storage errors
//! to the host.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use dragonglyph_types::{default_chambers, Chamber};

use crate::records::{
    default_blessings, BlessingRecord, ChamberRecord, LeaderboardEntry, ProgressRecord,
    SettingsRecord,
};
use crate::store::KeyValueStore;

const PROGRESS_KEY: &str = "progress";
const CHAMBERS_KEY: &str = "chambers";
const BLESSINGS_KEY: &str = "blessings";
const LEADERBOARD_KEY: &str = "leaderboard";
const SETTINGS_KEY: &str = "settings";

/// Leaderboard rows kept after an insert.
pub const LEADERBOARD_CAP: usize = 100;

/// Typed persistence facade over any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct LairVault<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LairVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.write(key, &bytes)
    }

    fn load_or<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> T) -> T {
        match self.store.read(key) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|_| fallback()),
            _ => fallback(),
        }
    }

    pub fn save_progress(&mut self, progress: &ProgressRecord) -> Result<()> {
        self.save(PROGRESS_KEY, progress)
    }

    pub fn load_progress(&self) -> ProgressRecord {
        self.load_or(PROGRESS_KEY, ProgressRecord::default)
    }

    pub fn save_chambers(&mut self, chambers: &[Chamber]) -> Result<()> {
        let records: Vec<ChamberRecord> =
            chambers.iter().cloned().map(ChamberRecord::from).collect();
        self.save(CHAMBERS_KEY, &records)
    }

    pub fn load_chambers(&self) -> Vec<Chamber> {
        let records: Vec<ChamberRecord> = self.load_or(CHAMBERS_KEY, || {
            default_chambers().into_iter().map(ChamberRecord::from).collect()
        });
        records.into_iter().map(Chamber::from).collect()
    }

    pub fn save_blessings(&mut self, blessings: &[BlessingRecord]) -> Result<()> {
        self.save(BLESSINGS_KEY, &blessings)
    }

    pub fn load_blessings(&self) -> Vec<BlessingRecord> {
        self.load_or(BLESSINGS_KEY, default_blessings)
    }

    pub fn save_settings(&mut self, settings: &SettingsRecord) -> Result<()> {
        self.save(SETTINGS_KEY, settings)
    }

    pub fn load_settings(&self) -> SettingsRecord {
        self.load_or(SETTINGS_KEY, SettingsRecord::default)
    }

    /// Leaderboard sorted by Dragon's Favor, highest first.
    pub fn load_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self.load_or(LEADERBOARD_KEY, Vec::new);
        entries.sort_by(|a, b| b.dragons_favor.cmp(&a.dragons_favor));
        entries
    }

    /// Insert an entry, keeping the top [`LEADERBOARD_CAP`] by favor.
    pub fn add_leaderboard_entry(&mut self, entry: LeaderboardEntry) -> Result<()> {
        let mut entries = self.load_leaderboard();
        entries.push(entry);
        entries.sort_by(|a, b| b.dragons_favor.cmp(&a.dragons_favor));
        entries.truncate(LEADERBOARD_CAP);
        self.save(LEADERBOARD_KEY, &entries)
    }

    /// Wipe progress, chambers, and blessings. Leaderboard and settings
    /// survive a reset.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.store.remove(PROGRESS_KEY)?;
        self.store.remove(CHAMBERS_KEY)?;
        self.store.remove(BLESSINGS_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
