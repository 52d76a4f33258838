//! Experience table
//!
//! Cumulative experience required to reach each tabulated level. Every level
//! from 1 to 50 is listed; above that only anchor levels are kept and the
//! resolver in [`super::xp`] fills the gaps.

use std::borrow::Cow;

use super::error::ExperienceError;

/// Highest level of the densely tabulated range and the anchor for
/// exponential extrapolation.
pub const ANCHOR_LEVEL: u32 = 50;

/// A single `(level, cumulative experience)` row
pub type TableEntry = (u32, u64);

/// Official Tibia experience table
pub static EXPERIENCE_TABLE: ExperienceTable = ExperienceTable {
    entries: Cow::Borrowed(&[
        (1, 0),
        (2, 100),
        (3, 200),
        (4, 400),
        (5, 800),
        (6, 1_500),
        (7, 2_600),
        (8, 4_200),
        (9, 6_400),
        (10, 9_300),
        (11, 13_000),
        (12, 17_600),
        (13, 23_200),
        (14, 29_900),
        (15, 37_800),
        (16, 47_000),
        (17, 57_600),
        (18, 69_700),
        (19, 83_400),
        (20, 98_800),
        (21, 116_000),
        (22, 135_100),
        (23, 156_200),
        (24, 179_400),
        (25, 204_800),
        (26, 232_500),
        (27, 262_600),
        (28, 295_200),
        (29, 330_400),
        (30, 368_300),
        (31, 409_000),
        (32, 452_600),
        (33, 499_200),
        (34, 548_900),
        (35, 601_800),
        (36, 658_000),
        (37, 717_600),
        (38, 780_700),
        (39, 847_400),
        (40, 917_800),
        (41, 992_000),
        (42, 1_070_100),
        (43, 1_152_200),
        (44, 1_238_400),
        (45, 1_328_800),
        (46, 1_423_500),
        (47, 1_522_600),
        (48, 1_626_200),
        (49, 1_734_400),
        (50, 1_847_300),
        (60, 3_256_800),
        (70, 5_246_300),
        (80, 7_915_800),
        (90, 11_365_300),
        (100, 15_694_800),
        (110, 21_004_300),
        (120, 27_393_800),
        (130, 34_963_300),
        (140, 43_812_800),
        (150, 54_042_300),
        (160, 65_751_800),
        (170, 79_041_300),
        (180, 94_010_800),
        (190, 110_760_300),
        (200, 129_389_800),
        (210, 149_999_300),
        (220, 172_688_800),
        (230, 197_558_300),
        (240, 224_707_800),
        (250, 254_237_300),
        (260, 286_246_800),
        (270, 320_836_300),
        (280, 358_105_800),
        (290, 398_155_300),
        (300, 441_084_800),
        (400, 1_050_779_800),
        (500, 2_058_474_800),
        (600, 3_564_169_800),
        (700, 5_667_864_800),
        (800, 8_569_559_800),
        (900, 12_069_254_800),
        (1000, 16_566_949_800),
    ]),
};

/// Ordered mapping from level to cumulative experience
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceTable {
    entries: Cow<'static, [TableEntry]>,
}

impl ExperienceTable {
    /// Build a table from custom rows.
    ///
    /// Rows must start at `(1, 0)`, increase strictly in both level and
    /// experience, and include the anchor level.
    pub fn new(entries: Vec<TableEntry>) -> Result<Self, ExperienceError> {
        match entries.first() {
            Some(&(1, 0)) => {}
            Some(&(level, xp)) => {
                return Err(ExperienceError::InvalidTable(format!(
                    "first row must be (1, 0), found ({}, {})",
                    level, xp
                )))
            }
            None => return Err(ExperienceError::InvalidTable("table is empty".to_string())),
        }

        for pair in entries.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.0 <= prev.0 || next.1 <= prev.1 {
                return Err(ExperienceError::InvalidTable(format!(
                    "row ({}, {}) does not increase on ({}, {})",
                    next.0, next.1, prev.0, prev.1
                )));
            }
        }

        if entries.binary_search_by_key(&ANCHOR_LEVEL, |&(level, _)| level).is_err() {
            return Err(ExperienceError::InvalidTable(format!(
                "missing anchor level {}",
                ANCHOR_LEVEL
            )));
        }

        Ok(Self { entries: Cow::Owned(entries) })
    }

    /// Exact experience for a tabulated level
    pub fn get(&self, level: u32) -> Option<u64> {
        self.entries
            .binary_search_by_key(&level, |&(l, _)| l)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// All rows in ascending level order
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Tabulated levels in ascending order
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|&(level, _)| level)
    }

    /// Experience at the extrapolation anchor
    pub fn anchor_experience(&self) -> u64 {
        // Presence is checked on construction and holds for the static table.
        self.get(ANCHOR_LEVEL).unwrap_or_default()
    }

    /// The two tabulated rows strictly surrounding `level`, if any
    pub fn bracket(&self, level: u32) -> Option<(TableEntry, TableEntry)> {
        self.entries
            .windows(2)
            .find(|pair| level > pair[0].0 && level < pair[1].0)
            .map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_table_layout() {
        let levels: Vec<u32> = EXPERIENCE_TABLE.levels().collect();
        assert_eq!(levels.len(), 50 + 25 + 7);
        assert!((1..=50).all(|l| levels.contains(&l)));
        assert!((60..=300).step_by(10).all(|l| levels.contains(&l)));
        assert!((400..=1000).step_by(100).all(|l| levels.contains(&l)));
        assert!(!levels.contains(&55));
    }

    #[test]
    fn test_static_table_strictly_increasing() {
        let rebuilt = ExperienceTable::new(EXPERIENCE_TABLE.entries().to_vec());
        assert_eq!(rebuilt.as_ref(), Ok(&EXPERIENCE_TABLE));
    }

    #[test]
    fn test_get() {
        assert_eq!(EXPERIENCE_TABLE.get(1), Some(0));
        assert_eq!(EXPERIENCE_TABLE.get(50), Some(1_847_300));
        assert_eq!(EXPERIENCE_TABLE.get(1000), Some(16_566_949_800));
        assert_eq!(EXPERIENCE_TABLE.get(51), None);
        assert_eq!(EXPERIENCE_TABLE.anchor_experience(), 1_847_300);
    }

    #[test]
    fn test_bracket() {
        let table = ExperienceTable::new(vec![(1, 0), (10, 9_300), (50, 1_847_300)]).unwrap();
        assert_eq!(table.bracket(5), Some(((1, 0), (10, 9_300))));
        assert_eq!(table.bracket(10), None);
        assert_eq!(table.bracket(60), None);
    }

    #[test]
    fn test_rejects_invalid_tables() {
        assert!(matches!(ExperienceTable::new(vec![]), Err(ExperienceError::InvalidTable(_))));
        assert!(ExperienceTable::new(vec![(2, 100), (50, 1_847_300)]).is_err());
        assert!(ExperienceTable::new(vec![(1, 0), (10, 0), (50, 1_847_300)]).is_err());
        assert!(ExperienceTable::new(vec![(1, 0), (10, 9_300), (10, 9_400), (50, 1_847_300)]).is_err());
        assert!(ExperienceTable::new(vec![(1, 0), (40, 917_800)]).is_err());
    }
}
