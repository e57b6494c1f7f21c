use std::process::ExitCode;

use clap::Parser;

use crate::{
    command::{CliCommand, Commands},
    print::ColorChoice,
    report::{Line, ReportError},
    store::Store,
};

mod command;
mod print;
mod report;
mod store;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    let color_choice = ColorChoice::new(!cli.no_colors);
    let null_object = (!cli.no_null_object).then_some(cli.null_object);
    let store = if cli.entries.is_empty() {
        Store::sample(null_object)
    } else {
        Store::new(cli.entries, null_object)
    };

    let outcome = match cli.command {
        Commands::Slip { keys } => Ok(report::slip(&store, &keys)),
        Commands::OrUndef { keys } => Ok(report::or_undef(&store, &keys)),
        Commands::Ensure { keys } => report::ensure(&store, &keys).map_err(ReportError::from),
        Commands::Match { keys } => Ok(report::describe(&store, &keys)),
        Commands::Sum { keys } => report::sum(&store, &keys).map(|total| vec![Line::Total(total)]),
    };

    match outcome {
        Ok(lines) => {
            print::print_lines(&lines, &color_choice);
            ExitCode::SUCCESS
        }
        Err(error) => {
            print::print_error(&error, &color_choice);
            ExitCode::FAILURE
        }
    }
}
