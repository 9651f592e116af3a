use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "hampatch",
    author = "D. M. Rogers",
    version,
    about = "HamPatch - Replace tiled off-diagonal coupling blocks of a Hamiltonian matrix and write the result to <SOURCE>.Rep.txt.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the square source matrix (whitespace-delimited text table).
    #[arg(required = true, value_name = "SOURCE")]
    pub source: PathBuf,

    /// Path to the replacement matrix; its leading 2x2 block is used.
    #[arg(required = true, value_name = "REPLACEMENT")]
    pub replacement: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Optional TOML file overriding the output naming and number format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
