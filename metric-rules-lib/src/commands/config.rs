use crate::Result;
use crate::smells::SmellRule;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// The default rules TOML content, embedded from `default_rules.toml`
pub const DEFAULT_RULES_TOML: &str = include_str!("../../default_rules.toml");

/// The rules file looked up in the working directory when none is given
pub const DEFAULT_RULES_FILE: &str = "rules.toml";

const LOG_TARGET: &str = "    config";

#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The smell rules, evaluated in file order
    #[serde(default, rename = "smell")]
    pub smells: Vec<SmellRule>,
}

impl Config {
    /// Load rules from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its rules are inconsistent
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading rules file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_RULES_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default rules");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading rules file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing rules file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded {} smell rule(s) from '{final_path}'", config.smells.len());
        Ok(config)
    }

    /// Save the default rules to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_RULES_TOML).into_app_err_with(|| format!("writing default rules to {output_path}"))?;
        Ok(())
    }

    /// Validate the rule set
    ///
    /// # Errors
    ///
    /// Returns an error if a rule has a blank name or two rules share a name
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for rule in &self.smells {
            if rule.name().trim().is_empty() {
                return Err(app_err!("smell rules must have a non-empty name"));
            }

            if !seen.insert(rule.name()) {
                return Err(app_err!("smell rule '{}' is defined more than once", rule.name()));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_RULES_TOML).expect("default_rules.toml should be valid TOML that deserializes to Config")
    }
}
