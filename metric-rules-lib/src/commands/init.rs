use super::Host;
use super::config::{Config, DEFAULT_RULES_FILE};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output rules file path (default is `rules.toml` in the current directory)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

pub fn init_rules<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_RULES_FILE));

    Config::save_default(&output)?;
    let _ = writeln!(host.output(), "Generated default rules file: {output}");
    Ok(())
}
