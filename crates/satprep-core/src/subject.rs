//! Exam subjects, their base hour weights, and per-subject proficiency.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Highest proficiency rating; ratings scale hours as `rating / MAX_RATING`.
pub const MAX_RATING: u8 = 5;

/// One section of the exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Math")]
    Math,
    #[serde(rename = "Reading")]
    Reading,
    #[serde(rename = "Writing & Language")]
    WritingAndLanguage,
}

/// Base hours per subject visit, in plan iteration order.
pub static BASE_HOURS: [(Subject, u32); 3] = [
    (Subject::Math, 5),
    (Subject::Reading, 4),
    (Subject::WritingAndLanguage, 4),
];

impl Subject {
    /// Fixed order in which a study day visits subjects.
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Reading, Subject::WritingAndLanguage];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Reading => "Reading",
            Subject::WritingAndLanguage => "Writing & Language",
        }
    }

    /// Base hour weight from [`BASE_HOURS`].
    pub fn base_hours(self) -> u32 {
        BASE_HOURS
            .iter()
            .find(|(subject, _)| *subject == self)
            .map(|(_, hours)| *hours)
            .unwrap_or(0)
    }

    /// Hours assigned to one visit of this subject at the given rating.
    ///
    /// `floor(base * rating / 5)`, so a higher rating yields more hours.
    pub fn study_hours(self, rating: u8) -> u32 {
        self.base_hours() * u32::from(rating) / u32::from(MAX_RATING)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" => Ok(Subject::Math),
            "reading" => Ok(Subject::Reading),
            "writing & language" | "writing-and-language" | "writing_and_language" | "writing" => {
                Ok(Subject::WritingAndLanguage)
            }
            other => Err(ValidationError::invalid_input(
                "subject",
                format!("unknown subject '{other}'"),
            )),
        }
    }
}

/// Self-assessed rating per subject.
///
/// Ratings are not range-checked here; callers collect them as 1-5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProficiencyMap {
    ratings: BTreeMap<Subject, u8>,
}

impl ProficiencyMap {
    /// Complete map for all three subjects.
    pub fn new(math: u8, reading: u8, writing: u8) -> Self {
        let mut map = Self::default();
        map.set(Subject::Math, math);
        map.set(Subject::Reading, reading);
        map.set(Subject::WritingAndLanguage, writing);
        map
    }

    pub fn set(&mut self, subject: Subject, rating: u8) -> Option<u8> {
        self.ratings.insert(subject, rating)
    }

    pub fn get(&self, subject: Subject) -> Option<u8> {
        self.ratings.get(&subject).copied()
    }

    /// Rating for `subject`, or `InvalidInput` when it was never supplied.
    pub fn rating(&self, subject: Subject) -> Result<u8, ValidationError> {
        self.get(subject).ok_or_else(|| {
            ValidationError::invalid_input(
                format!("proficiency.{subject}"),
                "missing proficiency rating",
            )
        })
    }

    /// Fails on the first subject (in plan order) without a rating.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        for subject in Subject::ALL {
            self.rating(subject)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, u8)> + '_ {
        self.ratings.iter().map(|(s, r)| (*s, *r))
    }
}

impl FromIterator<(Subject, u8)> for ProficiencyMap {
    fn from_iter<I: IntoIterator<Item = (Subject, u8)>>(iter: I) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
        }
    }
}
