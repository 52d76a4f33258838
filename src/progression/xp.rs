//! Experience and leveling
//!
//! Resolves cumulative experience for any level from the experience table and
//! computes the experience gap between two levels.

use super::table::{ExperienceTable, ANCHOR_LEVEL, EXPERIENCE_TABLE};

/// Approximate per-level growth of the curve above the anchor level.
/// Lossy: this is not the official formula.
pub const GROWTH_FACTOR: f64 = 1.016;

impl ExperienceTable {
    /// Cumulative experience needed to reach `level`.
    ///
    /// Tabulated levels are returned exactly. Levels above the anchor are
    /// extrapolated exponentially from it, and other gaps are linearly
    /// interpolated between the surrounding rows. The switch at the anchor is
    /// not continuous: level 61 resolves below the tabulated level 60.
    pub fn experience_for_level(&self, level: u32) -> u64 {
        if level <= 1 {
            return 0;
        }

        if let Some(xp) = self.get(level) {
            return xp;
        }

        if level > ANCHOR_LEVEL {
            let exponent = i32::try_from(level - ANCHOR_LEVEL).unwrap_or(i32::MAX);
            let scaled = self.anchor_experience() as f64 * GROWTH_FACTOR.powi(exponent);
            log::trace!("Extrapolated level {} to {:.0} exp", level, scaled);
            // Float to int casts saturate, so huge levels clamp to u64::MAX.
            return scaled.floor() as u64;
        }

        let ((lower_level, lower_xp), (upper_level, upper_xp)) = self
            .bracket(level)
            .unwrap_or(((1, 0), (ANCHOR_LEVEL, self.anchor_experience())));

        let span = u128::from(upper_level - lower_level);
        let offset = u128::from(level - lower_level);
        let step = u128::from(upper_xp - lower_xp) * offset / span;
        // step < upper_xp - lower_xp, so the sum stays below upper_xp.
        let xp = lower_xp + step as u64;
        log::trace!(
            "Interpolated level {} between {} and {}: {} exp",
            level, lower_level, upper_level, xp
        );
        xp
    }

    /// Experience required to go from `start_level` to `target_level`.
    /// Zero when the target is not above the start.
    pub fn experience_needed(&self, start_level: u32, target_level: u32) -> u64 {
        if start_level >= target_level {
            return 0;
        }

        self.experience_for_level(target_level)
            .saturating_sub(self.experience_for_level(start_level))
    }
}

/// Cumulative experience needed to reach `level` on the official table
pub fn experience_for_level(level: u32) -> u64 {
    EXPERIENCE_TABLE.experience_for_level(level)
}

/// Experience needed between two levels on the official table
pub fn experience_needed(start_level: u32, target_level: u32) -> u64 {
    EXPERIENCE_TABLE.experience_needed(start_level, target_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_experience_for_tabulated_levels() {
        for &(level, xp) in EXPERIENCE_TABLE.entries() {
            assert_eq!(experience_for_level(level), xp, "level {}", level);
        }
    }

    #[test]
    fn test_experience_for_low_levels() {
        assert_eq!(experience_for_level(0), 0);
        assert_eq!(experience_for_level(1), 0);
        assert_eq!(experience_for_level(2), 100);
    }

    #[test]
    fn test_extrapolation_above_anchor() {
        let expected = (1_847_300.0 * 1.016f64.powi(5)).floor() as u64;
        assert_eq!(experience_for_level(55), expected);
        assert!(experience_for_level(55) > experience_for_level(50));
        // Seam behaviour is kept as-is.
        assert!(experience_for_level(61) < experience_for_level(60));
    }

    #[test]
    fn test_extrapolation_saturates() {
        assert_eq!(experience_for_level(u32::MAX), u64::MAX);
    }

    #[test]
    fn test_interpolation_on_sparse_table() {
        let table = ExperienceTable::new(vec![(1, 0), (10, 9_300), (20, 98_800), (50, 1_847_300)])
            .unwrap();
        assert_eq!(table.experience_for_level(10), 9_300);
        // 9_300 + 89_500 * 5 / 10
        assert_eq!(table.experience_for_level(15), 54_050);
        // 98_800 + 1_748_500 * 10 / 30, floored
        assert_eq!(table.experience_for_level(30), 681_633);
        assert_eq!(table.experience_for_level(4), 3_100);
    }

    #[test]
    fn test_experience_needed() {
        assert_eq!(experience_needed(1, 50), 1_847_300);
        assert_eq!(experience_needed(100, 200), 129_389_800 - 15_694_800);
        assert_eq!(experience_needed(50, 50), 0);
        assert_eq!(experience_needed(200, 100), 0);
    }

    #[test]
    fn test_experience_needed_clamps_across_seam() {
        // 61 resolves below 60, so the difference would be negative.
        assert_eq!(experience_needed(60, 61), 0);
    }

    #[test]
    fn test_sampled_properties() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let a: u32 = rng.gen_range(0..3000);
            let b: u32 = rng.gen_range(0..3000);
            assert_eq!(experience_for_level(a), experience_for_level(a));
            if a >= b {
                assert_eq!(experience_needed(a, b), 0);
            }
            assert_eq!(experience_needed(a, b), experience_needed(a, b));
        }
    }
}
