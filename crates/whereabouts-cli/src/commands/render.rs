//! Implementation of the `whereabouts render` command.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use serde::Serialize;
use whereabouts::{AttributeContext, DisplayOptions, formatted_place};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Options string to render
    #[arg(required = true)]
    pub options: String,

    /// JSON file of attribute key/value pairs
    #[arg(long)]
    pub attrs: Option<PathBuf>,

    /// Extra attributes in key=value format (repeatable)
    #[arg(short = 'a', long = "attr", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,

    /// Mark the tracked entity as driving
    #[arg(long)]
    pub driving: bool,

    /// Literal contributed by the driving field
    #[arg(long, default_value = "Driving")]
    pub driving_marker: String,

    /// Print the fixed formatted-place composite instead of rendering
    #[arg(long)]
    pub formatted_place: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderReport {
    pub state: String,
    pub warnings: Vec<String>,
}

/// Parse a key=value attribute string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid attribute format '{}': expected key=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let mut attrs: HashMap<String, String> = HashMap::new();
    if let Some(path) = &args.attrs {
        let content = read_to_string(path).map_err(|e| {
            miette::miette!("Cannot read attributes file {}: {}", path.display(), e)
        })?;
        let values: HashMap<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| miette::miette!("Failed to parse attributes file: {}", e))?;
        let mut entries: Vec<(String, serde_json::Value)> = values.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, value) in entries {
            if let Some(text) = scalar_to_string(&value) {
                attrs.insert(key, text);
            }
        }
    }
    for (key, value) in args.set {
        attrs.insert(key, value);
    }

    let ctx = AttributeContext::builder()
        .attrs(attrs)
        .driving(args.driving)
        .driving_marker(args.driving_marker)
        .build();

    let parsed = DisplayOptions::parse(&args.options);
    let state = if args.formatted_place {
        formatted_place(&ctx)
    } else {
        parsed.render(&ctx)
    };

    if args.json {
        let report = RenderReport {
            state,
            warnings: parsed.warnings().iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization should not fail")
        );
    } else {
        for warning in parsed.warnings() {
            eprintln!("warning: {warning}");
        }
        println!("{state}");
    }
    Ok(exitcode::OK)
}

/// Flatten a JSON scalar to the string form the engine consumes.
fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
