use chrono::Datelike;
use clap::Args;
use satprep_core::report::{plan_text, universities_text};
use satprep_core::{
    match_universities, render_with, Config, PlanRequest, ReferenceTable, StudyPlan,
};
use serde::Serialize;

use super::PlanArgs;

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub args: PlanArgs,
    /// Print a JSON document instead of text panes
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    request: &'a PlanRequest,
    plan: &'a StudyPlan,
    calendar: String,
    universities: Vec<&'a str>,
}

pub fn run(cmd: PlanCommand) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let request = cmd.args.to_request(&config)?;
    let today = cmd.args.today();

    let plan = request.generate(today)?;
    let calendar = render_with(today.year(), today.month(), &plan, &config.calendar_style())?;
    let table = ReferenceTable::builtin();
    let universities = match_universities(request.target_score, &table);

    if cmd.json {
        let output = PlanOutput {
            request: &request,
            plan: &plan,
            calendar,
            universities,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}\n", plan_text(&plan));
        println!("Study Plan Calendar:\n{calendar}");
        println!("{}", universities_text(&universities));
    }
    Ok(())
}
