//! Persistence for player progress, chambers, blessings, leaderboard, and
//! settings. Records are opaque JSON blobs behind a key-value store trait;
//! the engine itself neither reads nor writes them - only plain values
//! (score, energy, chambers completed) cross the boundary.

pub mod records;
pub mod store;
pub mod vault;

pub use records::{
    default_blessings, BlessingRecord, ChamberRecord, DragonState, LeaderboardEntry,
    ProgressRecord, SettingsRecord,
};
pub use store::{DirStore, KeyValueStore, MemoryStore};
pub use vault::{LairVault, LEADERBOARD_CAP};
