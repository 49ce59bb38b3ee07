use chrono::Datelike;
use clap::Args;
use satprep_core::{render_with, Config};

use super::PlanArgs;

#[derive(Args)]
pub struct CalendarCommand {
    #[command(flatten)]
    pub args: PlanArgs,
    /// Year to render (default: current year)
    #[arg(long)]
    pub year: Option<i32>,
    /// Month to render, 1-12 (default: current month)
    #[arg(long)]
    pub month: Option<u32>,
}

pub fn run(cmd: CalendarCommand) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let today = cmd.args.today();
    let plan = cmd.args.to_request(&config)?.generate(today)?;

    let year = cmd.year.unwrap_or(today.year());
    let month = cmd.month.unwrap_or(today.month());
    print!("{}", render_with(year, month, &plan, &config.calendar_style())?);
    Ok(())
}
