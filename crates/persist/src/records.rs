//! Record types - the serialized shapes of player progress
//!
//! These are the opaque records the persistence boundary reads and writes.
//! The engine never consumes them directly; hosts move plain values (score,
//! energy, chambers completed) between sessions and records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dragonglyph_types::{Chamber, Difficulty};

/// Difficulty round-trips through its display name.
pub mod difficulty_codec {
    use dragonglyph_types::Difficulty;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Difficulty, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Difficulty, D::Error> {
        let name = String::deserialize(deserializer)?;
        Difficulty::from_str(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown difficulty: {name}")))
    }
}

/// The dragon's awakening stage, derived from total energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragonState {
    Dormant,
    Flickering,
    Awake,
    Powerful,
}

impl DragonState {
    /// Minimum total energy for each stage.
    pub fn energy_threshold(&self) -> u32 {
        match self {
            DragonState::Dormant => 0,
            DragonState::Flickering => 500,
            DragonState::Awake => 2000,
            DragonState::Powerful => 5000,
        }
    }

    pub fn for_energy(total_energy: u32) -> Self {
        if total_energy >= DragonState::Powerful.energy_threshold() {
            DragonState::Powerful
        } else if total_energy >= DragonState::Awake.energy_threshold() {
            DragonState::Awake
        } else if total_energy >= DragonState::Flickering.energy_threshold() {
            DragonState::Flickering
        } else {
            DragonState::Dormant
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DragonState::Dormant => "The dragon slumbers, its heart barely beating.",
            DragonState::Flickering => "Sparks of life return to the ancient beast.",
            DragonState::Awake => "The dragon's eyes open, scanning its domain.",
            DragonState::Powerful => "The dragon rises, its power fully restored!",
        }
    }
}

/// Cross-session player progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub total_energy: u32,
    pub dragon_state: DragonState,
    pub chambers_completed: u32,
    pub total_score: u32,
    /// Display names of every glyph kind the player has seen.
    pub glyphs_discovered: BTreeSet<String>,
    #[serde(with = "difficulty_codec")]
    pub difficulty: Difficulty,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            total_energy: 0,
            dragon_state: DragonState::Dormant,
            chambers_completed: 0,
            total_score: 0,
            glyphs_discovered: BTreeSet::new(),
            difficulty: Difficulty::Hatchling,
        }
    }
}

impl ProgressRecord {
    /// Re-derive the dragon state after an energy change.
    pub fn update_dragon_state(&mut self) {
        self.dragon_state = DragonState::for_energy(self.total_energy);
    }
}

/// Serialized form of a [`Chamber`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamberRecord {
    pub number: u32,
    pub name: String,
    pub description: String,
    pub grid_size: usize,
    pub target_score: u32,
    pub time_limit_secs: u32,
    #[serde(with = "difficulty_codec")]
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub best_score: u32,
    pub completed: bool,
}

impl From<Chamber> for ChamberRecord {
    fn from(chamber: Chamber) -> Self {
        Self {
            number: chamber.number,
            name: chamber.name,
            description: chamber.description,
            grid_size: chamber.grid_size,
            target_score: chamber.target_score,
            time_limit_secs: chamber.time_limit_secs,
            difficulty: chamber.difficulty,
            unlocked: chamber.unlocked,
            best_score: chamber.best_score,
            completed: chamber.completed,
        }
    }
}

impl From<ChamberRecord> for Chamber {
    fn from(record: ChamberRecord) -> Self {
        Self {
            number: record.number,
            name: record.name,
            description: record.description,
            grid_size: record.grid_size,
            target_score: record.target_score,
            time_limit_secs: record.time_limit_secs,
            difficulty: record.difficulty,
            unlocked: record.unlocked,
            best_score: record.best_score,
            completed: record.completed,
        }
    }
}

/// A blessing (power-up) in the player's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlessingRecord {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub cost: u32,
    pub unlocked: bool,
    pub count: u32,
}

/// The default blessing inventory for a fresh profile.
pub fn default_blessings() -> Vec<BlessingRecord> {
    vec![
        BlessingRecord {
            name: "Ember Sight".to_string(),
            description: "Reveals the best move for your next turn.".to_string(),
            icon: "eye.fill".to_string(),
            cost: 50,
            unlocked: true,
            count: 3,
        },
        BlessingRecord {
            name: "Timewyrm's Patience".to_string(),
            description: "Adds 30 seconds to the current chamber's timer.".to_string(),
            icon: "clock.fill".to_string(),
            cost: 75,
            unlocked: true,
            count: 2,
        },
        BlessingRecord {
            name: "Scale Shatter".to_string(),
            description: "Destroys a selected glyph and refills the grid.".to_string(),
            icon: "hammer.fill".to_string(),
            cost: 100,
            unlocked: true,
            count: 2,
        },
        BlessingRecord {
            name: "Dragon's Fury".to_string(),
            description: "Doubles points for the next 3 matches.".to_string(),
            icon: "flame.fill".to_string(),
            cost: 150,
            unlocked: false,
            count: 1,
        },
    ]
}

/// One leaderboard row. The timestamp is caller-supplied milliseconds since
/// the Unix epoch; the engine owns no clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u32,
    pub dragons_favor: u32,
    pub timestamp_ms: u64,
}

/// Player-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub haptics_enabled: bool,
    #[serde(with = "difficulty_codec")]
    pub difficulty: Difficulty,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            haptics_enabled: true,
            difficulty: Difficulty::Hatchling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dragon_state_thresholds() {
        assert_eq!(DragonState::for_energy(0), DragonState::Dormant);
        assert_eq!(DragonState::for_energy(499), DragonState::Dormant);
        assert_eq!(DragonState::for_energy(500), DragonState::Flickering);
        assert_eq!(DragonState::for_energy(1999), DragonState::Flickering);
        assert_eq!(DragonState::for_energy(2000), DragonState::Awake);
        assert_eq!(DragonState::for_energy(5000), DragonState::Powerful);
        assert_eq!(DragonState::for_energy(u32::MAX), DragonState::Powerful);
    }

    #[test]
    fn test_progress_updates_dragon_state() {
        let mut progress = ProgressRecord::default();
        progress.total_energy = 2600;
        progress.update_dragon_state();
        assert_eq!(progress.dragon_state, DragonState::Awake);
    }

    #[test]
    fn test_default_blessings() {
        let blessings = default_blessings();
        assert_eq!(blessings.len(), 4);
        assert!(blessings.iter().any(|b| b.name == "Dragon's Fury" && !b.unlocked));
    }

    #[test]
    fn test_difficulty_codec_roundtrip() {
        let settings = SettingsRecord {
            difficulty: Difficulty::AncientOne,
            ..SettingsRecord::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("Ancient One"));
        let back: SettingsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
