//! Implementation of the `whereabouts inspect` command.

use whereabouts::{DisplayOptions, Mode};

use crate::output::table::{expression_table, tokens_table};

/// Arguments for the inspect command.
#[derive(Debug, clap::Args)]
pub struct InspectArgs {
    /// Options string to inspect
    #[arg(required = true)]
    pub options: String,

    /// Output the parsed form as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the inspect command.
pub fn run_inspect(args: InspectArgs) -> miette::Result<i32> {
    let parsed = DisplayOptions::parse(&args.options);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(parsed.mode()).expect("JSON serialization should not fail")
        );
    } else {
        match parsed.mode() {
            Mode::Expression(list) => println!("{}", expression_table(list)),
            Mode::Basic(tokens) => println!("{}", tokens_table(tokens)),
        }
        for warning in parsed.warnings() {
            eprintln!("warning: {warning}");
        }
    }
    Ok(exitcode::OK)
}
