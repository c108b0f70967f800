//! Fusion rules - the fixed pairing table
//!
//! Same-pair fusions promote a base element to its tier-2 form; six specific
//! cross pairs produce tier-3 glyphs. The table is symmetric and closed:
//! every pair not listed here simply does not fuse. Fusion is invoked by
//! outer game-mode logic (a combine power), never by the cascade loop.

use dragonglyph_types::GlyphKind;

/// Look up the fusion result for a pair of kinds, in either order.
pub fn fuse(a: GlyphKind, b: GlyphKind) -> Option<GlyphKind> {
    use GlyphKind::*;
    match (a, b) {
        (Fire, Fire) => Some(Inferno),
        (Frost, Frost) => Some(Blizzard),
        (Storm, Storm) => Some(Tempest),
        (Earth, Earth) => Some(Mountain),
        (Shadow, Shadow) => Some(Void),
        (Light, Light) => Some(Radiance),

        (Fire, Earth) | (Earth, Fire) => Some(Magma),
        (Fire, Frost) | (Frost, Fire) => Some(Steam),
        (Fire, Storm) | (Storm, Fire) => Some(Lightning),
        (Shadow, Light) | (Light, Shadow) => Some(Eclipse),
        (Frost, Light) | (Light, Frost) => Some(Aurora),
        (Earth, Storm) | (Storm, Earth) => Some(Quake),

        _ => None,
    }
}

pub fn can_fuse(a: GlyphKind, b: GlyphKind) -> bool {
    fuse(a, b).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragonglyph_types::GlyphKind::*;

    #[test]
    fn test_same_pair_tier_ups() {
        assert_eq!(fuse(Fire, Fire), Some(Inferno));
        assert_eq!(fuse(Frost, Frost), Some(Blizzard));
        assert_eq!(fuse(Storm, Storm), Some(Tempest));
        assert_eq!(fuse(Earth, Earth), Some(Mountain));
        assert_eq!(fuse(Shadow, Shadow), Some(Void));
        assert_eq!(fuse(Light, Light), Some(Radiance));
    }

    #[test]
    fn test_cross_pairs_symmetric() {
        let pairs = [
            (Fire, Earth, Magma),
            (Fire, Frost, Steam),
            (Fire, Storm, Lightning),
            (Shadow, Light, Eclipse),
            (Frost, Light, Aurora),
            (Earth, Storm, Quake),
        ];
        for (a, b, result) in pairs {
            assert_eq!(fuse(a, b), Some(result));
            assert_eq!(fuse(b, a), Some(result));
        }
    }

    #[test]
    fn test_unlisted_pairs_do_not_fuse() {
        assert_eq!(fuse(Fire, Light), None);
        assert_eq!(fuse(Fire, Shadow), None);
        assert_eq!(fuse(Frost, Storm), None);
        assert_eq!(fuse(Frost, Earth), None);
        assert_eq!(fuse(Shadow, Earth), None);
        assert!(!can_fuse(Light, Storm));
        // Fused kinds never fuse further.
        assert_eq!(fuse(Inferno, Inferno), None);
        assert_eq!(fuse(Magma, Fire), None);
    }
}
