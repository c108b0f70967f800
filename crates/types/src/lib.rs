//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Grid size bounds (chambers range from 4x4 up to 8x8).
pub const MIN_GRID_SIZE: usize = 4;
pub const MAX_GRID_SIZE: usize = 8;
pub const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Minimum run length that counts as a match.
pub const MATCH_RUN: usize = 3;

/// Scoring constants: 10 points per power level, +50 for matching 5 or more.
pub const POWER_SCORE_UNIT: u32 = 10;
pub const BIG_MATCH_THRESHOLD: usize = 5;
pub const BIG_MATCH_BONUS: u32 = 50;

/// Energy awarded per matched glyph.
pub const ENERGY_PER_GLYPH: u32 = 5;

/// Glyph kinds: 6 base elements, 6 tier-2 fusions (same-pair), 6 tier-3
/// fusions (cross-pair). Generation and refill draw base kinds only; the
/// fused kinds enter play through the fusion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    Fire,
    Frost,
    Storm,
    Earth,
    Shadow,
    Light,
    Inferno,
    Blizzard,
    Tempest,
    Mountain,
    Void,
    Radiance,
    Magma,
    Steam,
    Lightning,
    Eclipse,
    Aurora,
    Quake,
}

impl GlyphKind {
    /// The six base elements, in canonical order. Grid generation draws
    /// uniformly from this set.
    pub const BASE: [GlyphKind; 6] = [
        GlyphKind::Fire,
        GlyphKind::Frost,
        GlyphKind::Storm,
        GlyphKind::Earth,
        GlyphKind::Shadow,
        GlyphKind::Light,
    ];

    /// Power level used in scoring: 1 for base, 2 for tier-2, 3 for tier-3.
    pub fn power_level(&self) -> u32 {
        match self {
            GlyphKind::Fire
            | GlyphKind::Frost
            | GlyphKind::Storm
            | GlyphKind::Earth
            | GlyphKind::Shadow
            | GlyphKind::Light => 1,
            GlyphKind::Inferno
            | GlyphKind::Blizzard
            | GlyphKind::Tempest
            | GlyphKind::Mountain
            | GlyphKind::Void
            | GlyphKind::Radiance => 2,
            GlyphKind::Magma
            | GlyphKind::Steam
            | GlyphKind::Lightning
            | GlyphKind::Eclipse
            | GlyphKind::Aurora
            | GlyphKind::Quake => 3,
        }
    }

    pub fn is_base(&self) -> bool {
        self.power_level() == 1
    }

    /// Display name (also the persisted representation of discovered glyphs).
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphKind::Fire => "Fire",
            GlyphKind::Frost => "Frost",
            GlyphKind::Storm => "Storm",
            GlyphKind::Earth => "Earth",
            GlyphKind::Shadow => "Shadow",
            GlyphKind::Light => "Light",
            GlyphKind::Inferno => "Inferno",
            GlyphKind::Blizzard => "Blizzard",
            GlyphKind::Tempest => "Tempest",
            GlyphKind::Mountain => "Mountain",
            GlyphKind::Void => "Void",
            GlyphKind::Radiance => "Radiance",
            GlyphKind::Magma => "Magma",
            GlyphKind::Steam => "Steam",
            GlyphKind::Lightning => "Lightning",
            GlyphKind::Eclipse => "Eclipse",
            GlyphKind::Aurora => "Aurora",
            GlyphKind::Quake => "Quake",
        }
    }

    /// Parse a glyph kind from its display name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fire" => Some(GlyphKind::Fire),
            "frost" => Some(GlyphKind::Frost),
            "storm" => Some(GlyphKind::Storm),
            "earth" => Some(GlyphKind::Earth),
            "shadow" => Some(GlyphKind::Shadow),
            "light" => Some(GlyphKind::Light),
            "inferno" => Some(GlyphKind::Inferno),
            "blizzard" => Some(GlyphKind::Blizzard),
            "tempest" => Some(GlyphKind::Tempest),
            "mountain" => Some(GlyphKind::Mountain),
            "void" => Some(GlyphKind::Void),
            "radiance" => Some(GlyphKind::Radiance),
            "magma" => Some(GlyphKind::Magma),
            "steam" => Some(GlyphKind::Steam),
            "lightning" => Some(GlyphKind::Lightning),
            "eclipse" => Some(GlyphKind::Eclipse),
            "aurora" => Some(GlyphKind::Aurora),
            "quake" => Some(GlyphKind::Quake),
            _ => None,
        }
    }

    /// Compact code for snapshot grids (0..18).
    #[inline(always)]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GlyphKind::Fire),
            1 => Some(GlyphKind::Frost),
            2 => Some(GlyphKind::Storm),
            3 => Some(GlyphKind::Earth),
            4 => Some(GlyphKind::Shadow),
            5 => Some(GlyphKind::Light),
            6 => Some(GlyphKind::Inferno),
            7 => Some(GlyphKind::Blizzard),
            8 => Some(GlyphKind::Tempest),
            9 => Some(GlyphKind::Mountain),
            10 => Some(GlyphKind::Void),
            11 => Some(GlyphKind::Radiance),
            12 => Some(GlyphKind::Magma),
            13 => Some(GlyphKind::Steam),
            14 => Some(GlyphKind::Lightning),
            15 => Some(GlyphKind::Eclipse),
            16 => Some(GlyphKind::Aurora),
            17 => Some(GlyphKind::Quake),
            _ => None,
        }
    }

    /// Glyph symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            GlyphKind::Fire => "\u{1F525}",
            GlyphKind::Frost => "\u{2744}\u{FE0F}",
            GlyphKind::Storm => "\u{26A1}",
            GlyphKind::Earth => "\u{1FAA8}",
            GlyphKind::Shadow => "\u{1F311}",
            GlyphKind::Light => "\u{2728}",
            GlyphKind::Inferno => "\u{1F30B}",
            GlyphKind::Blizzard => "\u{1F328}\u{FE0F}",
            GlyphKind::Tempest => "\u{26C8}\u{FE0F}",
            GlyphKind::Mountain => "\u{26F0}\u{FE0F}",
            GlyphKind::Void => "\u{1F573}\u{FE0F}",
            GlyphKind::Radiance => "\u{1F4AB}",
            GlyphKind::Magma => "\u{1F30B}",
            GlyphKind::Steam => "\u{1F4A8}",
            GlyphKind::Lightning => "\u{26A1}",
            GlyphKind::Eclipse => "\u{1F318}",
            GlyphKind::Aurora => "\u{1F30C}",
            GlyphKind::Quake => "\u{1F4A5}",
        }
    }

    /// Element family color as a hex string, for renderers.
    pub fn color_hex(&self) -> &'static str {
        match self {
            GlyphKind::Fire | GlyphKind::Inferno | GlyphKind::Magma | GlyphKind::Lightning => {
                "#FF4D00"
            }
            GlyphKind::Frost | GlyphKind::Blizzard | GlyphKind::Steam => "#00E0FF",
            GlyphKind::Storm | GlyphKind::Tempest | GlyphKind::Quake => "#FFB347",
            GlyphKind::Earth | GlyphKind::Mountain => "#8B4513",
            GlyphKind::Shadow | GlyphKind::Void | GlyphKind::Eclipse => "#2A2A3E",
            GlyphKind::Light | GlyphKind::Radiance | GlyphKind::Aurora => "#FFFFFF",
        }
    }
}

/// Zero-indexed (row, column) cell address. Valid range is [0, grid size)
/// on both axes; bounds are the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Difficulty tier. Scales scoring and the initial chamber timer only;
/// grid mechanics are identical across tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Hatchling,
    Wyrm,
    AncientOne,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Hatchling, Difficulty::Wyrm, Difficulty::AncientOne];

    pub fn score_multiplier(&self) -> f64 {
        match self {
            Difficulty::Hatchling => 1.0,
            Difficulty::Wyrm => 1.5,
            Difficulty::AncientOne => 2.0,
        }
    }

    /// Applied to a chamber's time limit when a session starts.
    pub fn time_scale(&self) -> f64 {
        match self {
            Difficulty::Hatchling => 0.8,
            Difficulty::Wyrm => 1.0,
            Difficulty::AncientOne => 1.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Hatchling => "Hatchling",
            Difficulty::Wyrm => "Wyrm",
            Difficulty::AncientOne => "Ancient One",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hatchling" => Some(Difficulty::Hatchling),
            "wyrm" => Some(Difficulty::Wyrm),
            "ancient one" | "ancientone" => Some(Difficulty::AncientOne),
            _ => None,
        }
    }
}

/// A chamber is one level configuration plus the player's progress in it.
/// Chambers are owned by the caller; the engine reads grid size, target
/// score, time limit, and difficulty.
#[derive(Debug, Clone, PartialEq)]
pub struct Chamber {
    pub number: u32,
    pub name: String,
    pub description: String,
    /// Square grid side, within [MIN_GRID_SIZE, MAX_GRID_SIZE].
    pub grid_size: usize,
    pub target_score: u32,
    /// Seconds; 0 means untimed.
    pub time_limit_secs: u32,
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub best_score: u32,
    pub completed: bool,
}

impl Chamber {
    pub fn new(
        number: u32,
        name: &str,
        description: &str,
        grid_size: usize,
        target_score: u32,
        time_limit_secs: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            number,
            name: name.to_string(),
            description: description.to_string(),
            grid_size,
            target_score,
            time_limit_secs,
            difficulty,
            unlocked: false,
            best_score: 0,
            completed: false,
        }
    }
}

/// The fixed campaign: Ember Vault (1-3), Frostroot Cave (4-6),
/// Stormspire Peak (7-9). Only the first chamber starts unlocked.
pub fn default_chambers() -> Vec<Chamber> {
    let mut chambers = vec![
        Chamber::new(
            1,
            "Ember Vault - Dawn",
            "The dragon's heart flickers weakly. Begin your journey.",
            4,
            100,
            120,
            Difficulty::Hatchling,
        ),
        Chamber::new(
            2,
            "Ember Vault - Spark",
            "Flames dance upon ancient stone.",
            5,
            250,
            150,
            Difficulty::Hatchling,
        ),
        Chamber::new(
            3,
            "Ember Vault - Blaze",
            "The fire grows stronger within the vault.",
            5,
            400,
            180,
            Difficulty::Wyrm,
        ),
        Chamber::new(
            4,
            "Frostroot Cave - Chill",
            "Ancient ice preserves forgotten power.",
            6,
            600,
            200,
            Difficulty::Wyrm,
        ),
        Chamber::new(
            5,
            "Frostroot Cave - Frost",
            "Crystalline formations pulse with magic.",
            6,
            800,
            220,
            Difficulty::Wyrm,
        ),
        Chamber::new(
            6,
            "Frostroot Cave - Glacier",
            "The frozen heart of the mountain awakens.",
            7,
            1000,
            240,
            Difficulty::AncientOne,
        ),
        Chamber::new(
            7,
            "Stormspire Peak - Thunder",
            "Lightning arcs between ancient spires.",
            7,
            1300,
            260,
            Difficulty::AncientOne,
        ),
        Chamber::new(
            8,
            "Stormspire Peak - Tempest",
            "The storm's fury knows no bounds.",
            8,
            1600,
            280,
            Difficulty::AncientOne,
        ),
        Chamber::new(
            9,
            "Stormspire Peak - Apex",
            "At the peak, the dragon's true power awaits.",
            8,
            2000,
            300,
            Difficulty::AncientOne,
        ),
    ];
    chambers[0].unlocked = true;
    chambers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_levels() {
        assert_eq!(GlyphKind::Fire.power_level(), 1);
        assert_eq!(GlyphKind::Inferno.power_level(), 2);
        assert_eq!(GlyphKind::Magma.power_level(), 3);
        for kind in GlyphKind::BASE {
            assert!(kind.is_base());
        }
        assert!(!GlyphKind::Radiance.is_base());
    }

    #[test]
    fn test_kind_name_roundtrip() {
        for code in 0..18u8 {
            let kind = GlyphKind::from_code(code).unwrap();
            assert_eq!(GlyphKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(kind.code(), code);
        }
        assert_eq!(GlyphKind::from_code(18), None);
        assert_eq!(GlyphKind::from_str("ember"), None);
    }

    #[test]
    fn test_difficulty_multipliers() {
        assert_eq!(Difficulty::Hatchling.score_multiplier(), 1.0);
        assert_eq!(Difficulty::Wyrm.score_multiplier(), 1.5);
        assert_eq!(Difficulty::AncientOne.score_multiplier(), 2.0);
        assert_eq!(Difficulty::from_str("Ancient One"), Some(Difficulty::AncientOne));
    }

    #[test]
    fn test_default_chambers() {
        let chambers = default_chambers();
        assert_eq!(chambers.len(), 9);
        assert!(chambers[0].unlocked);
        assert!(chambers[1..].iter().all(|c| !c.unlocked));
        for chamber in &chambers {
            assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&chamber.grid_size));
            assert!(chamber.target_score > 0);
        }
    }
}
