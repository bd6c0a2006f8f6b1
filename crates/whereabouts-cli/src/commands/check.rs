//! Implementation of the `whereabouts check` command.

use owo_colors::OwoColorize;
use serde::Serialize;
use whereabouts::DisplayOptions;

use crate::output::diagnostic::OptionsDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Options string to check
    #[arg(required = true)]
    pub options: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when the options string produced warnings
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for check results.
#[derive(Serialize)]
pub struct CheckReport {
    pub mode: &'static str,
    pub warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let parsed = DisplayOptions::parse(&args.options);
    let mode = if parsed.is_expression() {
        "expression"
    } else {
        "basic"
    };

    if args.json {
        let report = CheckReport {
            mode,
            warnings: parsed.warnings().iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization should not fail")
        );
    } else {
        println!("mode: {mode}");
        if parsed.warnings().is_empty() {
            println!("{}", "no warnings".green());
        } else {
            for warning in parsed.warnings() {
                let diagnostic = OptionsDiagnostic::from_warning(&args.options, warning);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
        }
    }

    if args.strict && !parsed.warnings().is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
