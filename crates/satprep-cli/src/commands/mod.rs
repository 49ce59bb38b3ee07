pub mod calendar;
pub mod completions;
pub mod config;
pub mod plan;
pub mod universities;

use chrono::{Local, NaiveDate};
use clap::Args;
use satprep_core::{exam_date_from, Config, PlanRequest, ProficiencyMap};

/// Top of the SAT scale; also bounds how long a generated plan can get.
pub const MAX_SCORE: i64 = 1600;

/// Form inputs shared by `plan` and `calendar`.
///
/// Everything is optional at parse time so a missing field produces the
/// same "please complete all fields" error as a missing hour budget.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Study hours per day (falls back to plan.default_hours_per_day)
    #[arg(long, allow_hyphen_values = true)]
    pub hours: Option<i32>,
    /// Target score, at most 1600
    #[arg(
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(..=MAX_SCORE)
    )]
    pub score: Option<i32>,
    /// Math proficiency (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub math: Option<u8>,
    /// Reading proficiency (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub reading: Option<u8>,
    /// Writing & Language proficiency (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub writing: Option<u8>,
    /// Exam date, YYYY-MM-DD (default: today + plan.exam_offset_days)
    #[arg(long)]
    pub exam_date: Option<NaiveDate>,
    /// Override today's date, YYYY-MM-DD
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl PlanArgs {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Collect the inputs into one immutable request.
    pub fn to_request(&self, config: &Config) -> Result<PlanRequest, Box<dyn std::error::Error>> {
        let hours = self.hours.or(config.plan.default_hours_per_day);
        let missing: Vec<&str> = [
            ("--hours", hours.is_none()),
            ("--score", self.score.is_none()),
            ("--math", self.math.is_none()),
            ("--reading", self.reading.is_none()),
            ("--writing", self.writing.is_none()),
        ]
        .into_iter()
        .filter_map(|(flag, absent)| absent.then_some(flag))
        .collect();

        let (Some(hours_per_day), Some(target_score), Some(math), Some(reading), Some(writing)) =
            (hours, self.score, self.math, self.reading, self.writing)
        else {
            let message = format!("please complete all fields: missing {}", missing.join(", "));
            return Err(message.into());
        };

        let exam_date = match self.exam_date {
            Some(date) => date,
            None => exam_date_from(self.today(), config.plan.exam_offset_days)?,
        };
        Ok(PlanRequest {
            hours_per_day,
            target_score,
            proficiency: ProficiencyMap::new(math, reading, writing),
            exam_date,
        })
    }
}
