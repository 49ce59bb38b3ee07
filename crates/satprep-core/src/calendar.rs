//! Month-grid text rendering with study days flagged.
//!
//! Weeks start on Monday. Cells outside the month are zero in the grid and
//! blank in the rendered text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::plan::StudyPlan;

/// Default flag placed after a day that has plan entries.
pub const DEFAULT_MARK: char = '*';

/// One week row, Monday first; `0` is a day outside the month.
pub type Week = [u32; 7];

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarStyle {
    pub mark: char,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        Self { mark: DEFAULT_MARK }
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::InvalidDate { year, month })
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => Ok((next - first).num_days() as u32),
        // December of the last representable year
        None => Ok(31),
    }
}

/// Monday-first week rows covering the month, zero-padded at both ends.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<Week>, ValidationError> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [0; 7];
    let mut col = offset;
    for day in 1..=days {
        week[col] = day;
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [0; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

/// Render the month with the default `*` mark.
pub fn render(year: i32, month: u32, plan: &StudyPlan) -> Result<String, ValidationError> {
    render_with(year, month, plan, &CalendarStyle::default())
}

/// Render the month, flagging every day that has an entry in `plan`.
///
/// Day cells are the right-aligned two-digit day, the mark or a space, then a
/// space. Blank cells are three spaces, so rows are not column-aligned.
pub fn render_with(
    year: i32,
    month: u32,
    plan: &StudyPlan,
    style: &CalendarStyle,
) -> Result<String, ValidationError> {
    let weeks = month_grid(year, month)?;
    let dates = plan.dates();

    let mut out = String::new();
    for week in &weeks {
        for &day in week {
            if day == 0 {
                out.push_str("   ");
                continue;
            }
            let marked = NaiveDate::from_ymd_opt(year, month, day)
                .is_some_and(|date| dates.contains(&date));
            if marked {
                out.push_str(&format!("{day:2}{} ", style.mark));
            } else {
                out.push_str(&format!("{day:2}  "));
            }
        }
        out.push('\n');
    }
    Ok(out)
}
