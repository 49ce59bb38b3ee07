//! # satprep Core Library
//!
//! Core logic for building a standardized-test study schedule and
//! recommending universities for a target score. The `satprep` CLI is a thin
//! front end over this crate; every operation here is a synchronous, pure
//! function of its inputs.
//!
//! ## Key Components
//!
//! - [`generate`]: day-by-day study plan ending in an exam marker
//! - [`render`]: Monday-first month grid flagging days with plan entries
//! - [`match_universities`]: universities whose admitted range holds a score
//! - [`Config`]: user defaults stored as TOML

pub mod calendar;
pub mod config;
pub mod error;
pub mod plan;
pub mod reference;
pub mod report;
pub mod subject;

pub use calendar::{month_grid, render, render_with, CalendarStyle};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use plan::{
    exam_date_from, generate, EntryKind, PlanRequest, StudyEntry, StudyPlan, EXAM_LABEL,
};
pub use reference::{match_universities, ReferenceTable, ScoreRange, University};
pub use subject::{ProficiencyMap, Subject};
