use super::Host;
use super::common::{ColorMode, RulesArgs, init_logging};
use super::config::Config;
use crate::Result;
use crate::metrics::ArtifactSet;
use crate::reports::{generate_console, generate_json};
use crate::smells::{Diagnosis, detect_all};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the metrics file (JSON, or TOML when the extension is `.toml`)
    #[arg(long, value_name = "PATH")]
    pub metrics: Utf8PathBuf,

    #[command(flatten)]
    pub rules: RulesArgs,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Output the diagnoses to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the diagnoses to the console. If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Exit with status code 1 if any artifact has a smell
    #[arg(long)]
    pub fail_on_smell: bool,
}

/// Evaluate every artifact of a metrics file against the smell rules and report the result
pub fn check_metrics<H: Host>(host: &mut H, args: &CheckArgs) -> Result<()> {
    init_logging(args.rules.log_level);

    let config = Config::load(Utf8Path::new("."), args.rules.rules.as_ref())?;
    let set = ArtifactSet::load(&args.metrics)?;
    let diagnoses = detect_all(&config.smells, &set.artifacts);

    let console = args.console || (args.json.is_none() && !args.fail_on_smell);
    if console {
        let mut console_output = String::new();
        generate_console(&diagnoses, args.color.use_colors(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&diagnoses, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to {filename}"))?;
    }

    let smelly = diagnoses.iter().filter(|d| d.smelly()).count();
    if args.fail_on_smell && smelly > 0 {
        let _ = writeln!(host.error(), "{smelly} of {} artifact(s) have smells", diagnoses.len());
        host.exit(1);
    }

    Ok(())
}
