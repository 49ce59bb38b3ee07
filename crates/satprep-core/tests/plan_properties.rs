//! Property tests for plan generation.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use satprep_core::{generate, render, ProficiencyMap, StudyEntry};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn plan_always_ends_with_exam(
        hours in 1i32..=24,
        score in -100i32..=1600,
        math in 1u8..=5,
        reading in 1u8..=5,
        writing in 1u8..=5,
        exam_offset in 0u64..400,
    ) {
        let today = base_date();
        let exam = today.checked_add_days(Days::new(exam_offset)).unwrap();
        let plan = generate(hours, score, &ProficiencyMap::new(math, reading, writing), exam, today)
            .unwrap();

        prop_assert_eq!(*plan.entries().last().unwrap(), StudyEntry::exam(exam));
        prop_assert_eq!(plan.entries().iter().filter(|e| e.is_exam()).count(), 1);
    }

    #[test]
    fn entry_count_is_ceiling_of_countdown(hours in 1i32..=12, score in 1i32..=1600) {
        let today = base_date();
        let plan = generate(hours, score, &ProficiencyMap::new(3, 3, 3), today, today).unwrap();
        let expected = (2 * score + hours - 1) / hours;
        prop_assert_eq!(plan.study_entries().len(), expected as usize);
        prop_assert_eq!(plan.study_days(), (expected as usize + 2) / 3);
    }

    #[test]
    fn entries_are_chronological(hours in 1i32..=8, score in 1i32..=400) {
        let today = base_date();
        let plan = generate(hours, score, &ProficiencyMap::new(5, 4, 3), today, today).unwrap();
        let study = plan.study_entries();
        prop_assert!(study.windows(2).all(|w| w[0].date <= w[1].date));
        prop_assert_eq!(study.first().map(|e| e.date), Some(today));
    }

    #[test]
    fn non_positive_target_is_exam_only(score in i32::MIN..=0, hours in 1i32..=24) {
        let today = base_date();
        let plan = generate(hours, score, &ProficiencyMap::new(3, 3, 3), today, today).unwrap();
        prop_assert_eq!(plan.len(), 1);
    }

    #[test]
    fn render_rejects_bad_months(month in 13u32..1000) {
        let today = base_date();
        let plan = generate(1, 0, &ProficiencyMap::new(3, 3, 3), today, today).unwrap();
        prop_assert!(render(2024, month, &plan).unwrap_err().is_invalid_date());
    }
}
