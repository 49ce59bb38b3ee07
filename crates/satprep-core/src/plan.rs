//! Study plan generation.
//!
//! A plan is a day-by-day list of subject sessions starting at a caller
//! supplied "today", always closed by one zero-hour exam marker.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::subject::{ProficiencyMap, Subject};

/// Label carried by the terminal exam entry.
pub const EXAM_LABEL: &str = "Exam";

/// Each point of target score costs this many study hours.
pub const HOURS_PER_SCORE_POINT: f64 = 2.0;

/// What a plan entry schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntryKind {
    Study(Subject),
    Exam,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Study(subject) => subject.label(),
            EntryKind::Exam => EXAM_LABEL,
        }
    }

    pub fn subject(self) -> Option<Subject> {
        match self {
            EntryKind::Study(subject) => Some(subject),
            EntryKind::Exam => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.label().to_string()
    }
}

impl TryFrom<String> for EntryKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == EXAM_LABEL {
            Ok(EntryKind::Exam)
        } else {
            value.parse().map(EntryKind::Study)
        }
    }
}

/// One scheduled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyEntry {
    pub date: NaiveDate,
    #[serde(rename = "subject")]
    pub kind: EntryKind,
    pub hours: u32,
}

impl StudyEntry {
    pub fn study(date: NaiveDate, subject: Subject, hours: u32) -> Self {
        Self {
            date,
            kind: EntryKind::Study(subject),
            hours,
        }
    }

    pub fn exam(date: NaiveDate) -> Self {
        Self {
            date,
            kind: EntryKind::Exam,
            hours: 0,
        }
    }

    pub fn is_exam(&self) -> bool {
        self.kind == EntryKind::Exam
    }
}

/// Ordered study entries ending with the exam marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyPlan {
    entries: Vec<StudyEntry>,
}

impl StudyPlan {
    /// All entries in generation order, exam marker last.
    pub fn entries(&self) -> &[StudyEntry] {
        &self.entries
    }

    /// Entries without the trailing exam marker.
    pub fn study_entries(&self) -> &[StudyEntry] {
        match self.entries.split_last() {
            Some((last, rest)) if last.is_exam() => rest,
            _ => &self.entries,
        }
    }

    pub fn exam(&self) -> Option<&StudyEntry> {
        self.entries.last().filter(|e| e.is_exam())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every date that carries at least one entry, exam day included.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|e| e.date).collect()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date == date)
    }

    /// Distinct calendar days with study sessions.
    pub fn study_days(&self) -> usize {
        self.study_entries()
            .iter()
            .map(|e| e.date)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn total_hours(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.hours)).sum()
    }

    pub fn hours_by_subject(&self) -> BTreeMap<Subject, u64> {
        let mut totals = BTreeMap::new();
        for entry in self.study_entries() {
            if let Some(subject) = entry.kind.subject() {
                *totals.entry(subject).or_insert(0) += u64::from(entry.hours);
            }
        }
        totals
    }
}

impl<'a> IntoIterator for &'a StudyPlan {
    type Item = &'a StudyEntry;
    type IntoIter = std::slice::Iter<'a, StudyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Generate a study plan starting on `today`.
///
/// The countdown `target_score * 2 / hours_per_day` drops by one for every
/// subject entry appended, not once per day, so a plan spans roughly a third
/// of that many calendar days. The day loop stops mid-pass as soon as the
/// countdown reaches zero; the date still advances once per pass.
///
/// A non-positive `target_score` yields a plan holding only the exam marker.
///
/// # Errors
///
/// `InvalidInput` for non-positive `hours_per_day` or a proficiency map
/// missing a subject.
pub fn generate(
    hours_per_day: i32,
    target_score: i32,
    proficiency: &ProficiencyMap,
    exam_date: NaiveDate,
    today: NaiveDate,
) -> Result<StudyPlan, ValidationError> {
    if hours_per_day <= 0 {
        return Err(ValidationError::invalid_input(
            "hours_per_day",
            format!("must be positive, got {hours_per_day}"),
        ));
    }
    proficiency.ensure_complete()?;

    let total_hours_needed = f64::from(target_score) * HOURS_PER_SCORE_POINT;
    let mut days_remaining = total_hours_needed / f64::from(hours_per_day);

    let mut entries = Vec::new();
    let mut current = today;
    while days_remaining > 0.0 {
        for subject in Subject::ALL {
            let hours = subject.study_hours(proficiency.rating(subject)?);
            entries.push(StudyEntry::study(current, subject, hours));
            days_remaining -= 1.0;
            if days_remaining <= 0.0 {
                break;
            }
        }
        current = current.succ_opt().ok_or_else(|| {
            ValidationError::invalid_input("today", "plan runs past the last representable date")
        })?;
    }

    entries.push(StudyEntry::exam(exam_date));
    tracing::debug!(
        hours_per_day,
        target_score,
        entries = entries.len(),
        %exam_date,
        "generated study plan"
    );
    Ok(StudyPlan { entries })
}

/// Exam day `offset_days` after `today`.
pub fn exam_date_from(today: NaiveDate, offset_days: u32) -> Result<NaiveDate, ValidationError> {
    today
        .checked_add_days(Days::new(u64::from(offset_days)))
        .ok_or_else(|| {
            ValidationError::invalid_input(
                "exam_offset_days",
                format!("{today} + {offset_days} days is not representable"),
            )
        })
}

/// Collected form input, built once and handed to [`PlanRequest::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub hours_per_day: i32,
    pub target_score: i32,
    pub proficiency: ProficiencyMap,
    pub exam_date: NaiveDate,
}

impl PlanRequest {
    /// Reject anything the generator would turn into a degenerate plan.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hours_per_day <= 0 {
            return Err(ValidationError::invalid_input(
                "hours_per_day",
                format!("must be positive, got {}", self.hours_per_day),
            ));
        }
        if self.target_score <= 0 {
            return Err(ValidationError::invalid_input(
                "target_score",
                format!("must be positive, got {}", self.target_score),
            ));
        }
        self.proficiency.ensure_complete()
    }

    pub fn generate(&self, today: NaiveDate) -> Result<StudyPlan, ValidationError> {
        self.validate()?;
        generate(
            self.hours_per_day,
            self.target_score,
            &self.proficiency,
            self.exam_date,
            today,
        )
    }
}
