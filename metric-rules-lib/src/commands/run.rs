//! Command dispatch logic for metric-rules

use super::{CheckArgs, ExplainArgs, InitArgs, ValidateArgs, check_metrics, explain_rules, init_rules, validate_rules};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metric-rules", version, author, long_about = None)]
#[command(about = "Detect code smells by checking code metrics against threshold rules")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the artifacts of a metrics file against the smell rules
    Check(Box<CheckArgs>),
    /// Print the smell rules in symbolic form
    Explain(ExplainArgs),
    /// Generate a default rules file
    Init(InitArgs),
    /// Validate a rules file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Check(check_args) => check_metrics(host, check_args),
        Command::Explain(explain_args) => explain_rules(host, explain_args),
        Command::Init(init_args) => init_rules(host, init_args),
        Command::Validate(validate_args) => validate_rules(host, validate_args),
    }
}
