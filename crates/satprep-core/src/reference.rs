//! Published admitted-score ranges and university matching.
//!
//! The built-in table is static data loaded once; matching is a linear scan
//! that keeps the table's insertion order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive score bounds, `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    low: i32,
    high: i32,
}

impl ScoreRange {
    pub fn new(low: i32, high: i32) -> Result<Self, ValidationError> {
        if low > high {
            return Err(ValidationError::invalid_input(
                "score_range",
                format!("low bound {low} exceeds high bound {high}"),
            ));
        }
        Ok(Self { low, high })
    }

    const fn new_unchecked(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, score: i32) -> bool {
        self.low <= score && score <= self.high
    }
}

/// A university paired with its admitted-score range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub range: ScoreRange,
}

static BUILTIN: [(&str, ScoreRange); 20] = [
    ("Harvard University", ScoreRange::new_unchecked(1480, 1580)),
    ("Massachusetts Institute of Technology", ScoreRange::new_unchecked(1500, 1570)),
    ("Stanford University", ScoreRange::new_unchecked(1440, 1570)),
    ("University of California--Berkeley", ScoreRange::new_unchecked(1330, 1530)),
    ("University of Chicago", ScoreRange::new_unchecked(1510, 1570)),
    ("University of Pennsylvania", ScoreRange::new_unchecked(1470, 1570)),
    ("California Institute of Technology", ScoreRange::new_unchecked(1530, 1580)),
    ("Columbia University", ScoreRange::new_unchecked(1460, 1570)),
    ("Yale University", ScoreRange::new_unchecked(1460, 1570)),
    ("Princeton University", ScoreRange::new_unchecked(1460, 1570)),
    ("University of Michigan--Ann Arbor", ScoreRange::new_unchecked(1340, 1530)),
    ("University of California--Los Angeles", ScoreRange::new_unchecked(1290, 1510)),
    ("University of Virginia", ScoreRange::new_unchecked(1330, 1500)),
    ("University of North Carolina--Chapel Hill", ScoreRange::new_unchecked(1270, 1480)),
    ("Duke University", ScoreRange::new_unchecked(1450, 1570)),
    ("University of California--San Diego", ScoreRange::new_unchecked(1300, 1510)),
    ("Northwestern University", ScoreRange::new_unchecked(1450, 1550)),
    ("Cornell University", ScoreRange::new_unchecked(1420, 1550)),
    ("Johns Hopkins University", ScoreRange::new_unchecked(1450, 1550)),
    ("New York University", ScoreRange::new_unchecked(1340, 1510)),
];

/// Ordered, read-only table of universities keyed by unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceTable {
    entries: Vec<University>,
}

impl ReferenceTable {
    /// The fixed SAT table, in published order.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(name, range)| University {
                    name: (*name).to_string(),
                    range: *range,
                })
                .collect(),
        }
    }

    /// Build a table from arbitrary entries, rejecting duplicate names.
    pub fn from_entries(entries: Vec<University>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for uni in &entries {
            if uni.range.low > uni.range.high {
                return Err(ValidationError::invalid_input(
                    format!("universities.{}", uni.name),
                    "low bound exceeds high bound",
                ));
            }
            if !seen.insert(uni.name.as_str()) {
                return Err(ValidationError::invalid_input(
                    "universities",
                    format!("duplicate university '{}'", uni.name),
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&University> {
        self.entries.iter().find(|u| u.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, University> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records whose range contains `score`, in table order.
    pub fn matching(&self, score: i32) -> Vec<&University> {
        let matched: Vec<&University> = self
            .entries
            .iter()
            .filter(|u| u.range.contains(score))
            .collect();
        tracing::trace!(score, matched = matched.len(), "matched universities");
        matched
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ReferenceTable {
    type Item = &'a University;
    type IntoIter = std::slice::Iter<'a, University>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Names of universities whose range contains `target_score`.
///
/// An empty result means nothing matched; the caller decides how to say so.
pub fn match_universities(target_score: i32, table: &ReferenceTable) -> Vec<&str> {
    table
        .matching(target_score)
        .into_iter()
        .map(|u| u.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_twenty_unique_entries() {
        let table = ReferenceTable::builtin();
        assert_eq!(table.len(), 20);
        assert!(ReferenceTable::from_entries(table.entries.clone()).is_ok());
        assert_eq!(table.iter().next().unwrap().name, "Harvard University");
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = ScoreRange::new(1270, 1480).unwrap();
        assert!(range.contains(1270));
        assert!(range.contains(1480));
        assert!(!range.contains(1269));
        assert!(!range.contains(1481));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(ScoreRange::new(1500, 1400).unwrap_err().is_invalid_input());
    }

    #[test]
    fn match_1500_includes_harvard_excludes_unc() {
        let table = ReferenceTable::builtin();
        let names = match_universities(1500, &table);
        assert!(names.contains(&"Harvard University"));
        assert!(!names.contains(&"University of North Carolina--Chapel Hill"));
    }

    #[test]
    fn match_keeps_table_order() {
        let table = ReferenceTable::builtin();
        let names = match_universities(1500, &table);
        assert_eq!(
            &names[..3],
            &[
                "Harvard University",
                "Massachusetts Institute of Technology",
                "Stanford University"
            ]
        );
        assert_eq!(names.last(), Some(&"New York University"));
    }

    #[test]
    fn match_low_score_is_empty() {
        let table = ReferenceTable::builtin();
        assert!(match_universities(100, &table).is_empty());
    }

    #[test]
    fn unc_upper_bound_matches() {
        let table = ReferenceTable::builtin();
        let names = match_universities(1480, &table);
        assert!(names.contains(&"University of North Carolina--Chapel Hill"));
        assert!(names.contains(&"Harvard University"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let uni = University {
            name: "Duke University".into(),
            range: ScoreRange::new(1450, 1570).unwrap(),
        };
        let err = ReferenceTable::from_entries(vec![uni.clone(), uni]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn get_looks_up_by_name() {
        let table = ReferenceTable::builtin();
        let caltech = table.get("California Institute of Technology").unwrap();
        assert_eq!((caltech.range.low(), caltech.range.high()), (1530, 1580));
        assert!(table.get("Nowhere College").is_none());
    }
}
