//! Plain-text panes shown next to the calendar.

use std::fmt::Write;

use crate::plan::StudyPlan;

pub const NO_UNIVERSITIES: &str = "No universities found within the specified score range.";

/// "Study Plan" pane: one line per study session, then the exam date.
pub fn plan_text(plan: &StudyPlan) -> String {
    let mut out = String::from("Study Plan:\n------------\n");
    for entry in plan.study_entries() {
        let _ = writeln!(out, "{}: {} - {} hours", entry.date, entry.kind, entry.hours);
    }
    if let Some(exam) = plan.exam() {
        let _ = write!(out, "\nYour SAT exam is scheduled for: {}", exam.date);
    }
    out
}

/// "University Suggestions" pane.
pub fn universities_text<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::from("University Suggestions:\n------------------------\n");
    if names.is_empty() {
        out.push_str(NO_UNIVERSITIES);
    } else {
        let joined: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        out.push_str(&joined.join("\n"));
    }
    out
}
