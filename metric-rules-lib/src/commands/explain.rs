use super::Host;
use super::common::{RulesArgs, init_logging};
use super::config::Config;
use crate::Result;
use camino::Utf8Path;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Print every smell rule with its statement rendered in symbolic form
pub fn explain_rules<H: Host>(host: &mut H, args: &ExplainArgs) -> Result<()> {
    init_logging(args.rules.log_level);

    let config = Config::load(Utf8Path::new("."), args.rules.rules.as_ref())?;

    let mut out = host.output();
    for (index, rule) in config.smells.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out);
        }

        match rule.description() {
            Some(description) => {
                let _ = writeln!(out, "{}: {description}", rule.name());
            }
            None => {
                let _ = writeln!(out, "{}", rule.name());
            }
        }
        let _ = writeln!(out, "  {}", rule.statement());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::LogLevel;
    use crate::commands::host::TestHost;
    use camino::Utf8PathBuf;

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_explain_renders_statements() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("rules.toml")).unwrap();
        std::fs::write(
            &path,
            r#"
[[smell]]
name = "god_class"
description = "Does too much"

[smell.statement]
connective = "and"
thresholds = [
    { metric = "WMC", relation = ">=", value = 47 },
    { metric = "TCC", relation = "<", value = 0.33 },
]

[[smell]]
name = "anything"
"#,
        )
        .unwrap();

        let mut host = TestHost::new();
        let args = ExplainArgs {
            rules: RulesArgs {
                rules: Some(path),
                log_level: LogLevel::None,
            },
        };
        explain_rules(&mut host, &args).unwrap();

        insta::assert_snapshot!(host.output_text(), @r"
        god_class: Does too much
          (WMC ≥ 47 & TCC < 0.33)

        anything
          T
        ");
    }
}
