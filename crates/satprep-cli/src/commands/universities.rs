use clap::Args;
use satprep_core::report::universities_text;
use satprep_core::ReferenceTable;

#[derive(Args)]
pub struct UniversitiesCommand {
    /// Target score
    #[arg(long, allow_hyphen_values = true)]
    pub score: i32,
    /// Print matching universities with their ranges as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(cmd: UniversitiesCommand) -> Result<(), Box<dyn std::error::Error>> {
    let table = ReferenceTable::builtin();
    let matched = table.matching(cmd.score);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else {
        let names: Vec<&str> = matched.iter().map(|u| u.name.as_str()).collect();
        println!("{}", universities_text(&names));
    }
    Ok(())
}
