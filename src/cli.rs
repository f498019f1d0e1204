use crate::application::dto::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Evaluate governance policies against an AI Bill of Materials
#[derive(Parser, Debug)]
#[command(name = "aibom-policy")]
#[command(version)]
#[command(
    about = "Evaluate governance policies against an AI Bill of Materials",
    long_about = None
)]
pub struct Args {
    /// Path to the AIBOM JSON document
    #[arg(short, long, value_name = "PATH", required_unless_present = "list_rules")]
    pub bom: Option<PathBuf>,

    /// Policy document (JSON, TOML or YAML); repeat to evaluate several policies in order
    #[arg(short, long = "policy", value_name = "PATH")]
    pub policies: Vec<PathBuf>,

    /// Output format: text, json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./aibom-policy.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// List the registered rule types and exit
    #[arg(long)]
    pub list_rules: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
