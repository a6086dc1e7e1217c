use super::Host;
use super::common::{RulesArgs, init_logging};
use super::config::{Config, DEFAULT_RULES_FILE};
use crate::Result;
use crate::metrics::Artifact;
use crate::smells::detect;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Loads a rules file and evaluates every rule once against an artifact without metrics
fn validate_rules_inner(base_dir: &Utf8Path, rules_path: Option<&Utf8PathBuf>) -> Result<usize> {
    let config = Config::load(base_dir, rules_path)?;

    let probe = Artifact {
        name: "validation probe".to_string(),
        metrics: Vec::new(),
    };
    let diagnosis = detect(&config.smells, &probe);

    Ok(diagnosis.outcomes.len())
}

pub fn validate_rules<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    init_logging(args.rules.log_level);

    let rules_path = args.rules.rules.as_ref();

    match validate_rules_inner(Utf8Path::new("."), rules_path) {
        Ok(count) => {
            let _ = writeln!(host.output(), "Rules file is valid ({count} smell rule(s))");
            if let Some(path) = rules_path {
                let _ = writeln!(host.output(), "Rules file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using {DEFAULT_RULES_FILE} or the default rules");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Rules validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
