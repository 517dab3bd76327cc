//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::policies::{MissingValuePolicy, WrapperPolicy};
use crate::error::{MetamodelError, MetamodelResult};

use super::types::{Config, Verbosity};

/// Project config file, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "metafacet.toml";

/// Unknown key found while loading a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Parse `path`, collecting unknown keys as warnings
pub fn load_with_warnings(path: &Path) -> MetamodelResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MetamodelResult<(Config, Vec<ConfigWarning>)> {
    let mut ignored = Vec::new();
    let config: Config = serde_ignored::deserialize(toml::de::Deserializer::new(content), |p| {
        ignored.push(p.to_string())
    })
    .map_err(|e| MetamodelError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = ignored
        .into_iter()
        .map(|dotted| {
            let key = match dotted.rsplit_once('.') {
                Some((_, last)) => last.to_string(),
                None => dotted,
            };
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A file that fails to parse is skipped in favor of the next source.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let user_config = dirs::config_dir().map(|dir| dir.join("metafacet").join("config.toml"));
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config);

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                debug!(path = %candidate.display(), "configuration loaded");
                return (with_env_overrides(config, env_var), warnings);
            }
            Err(e) => debug!(path = %candidate.display(), error = %e, "configuration skipped"),
        }
    }

    (with_env_overrides(Config::default(), env_var), Vec::new())
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment variable overrides (METAFACET_* prefix)
///
/// `lookup` stands in for the process environment.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // METAFACET_VERBOSITY
    if let Some(verbosity) = lookup("METAFACET_VERBOSITY") {
        config.output.verbosity = match verbosity.to_ascii_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // METAFACET_MISSING_VALUE
    if let Some(policy) = lookup("METAFACET_MISSING_VALUE") {
        match policy.to_lowercase().as_str() {
            "null" => config.mapping.missing_value = MissingValuePolicy::Null,
            "error" => config.mapping.missing_value = MissingValuePolicy::Error,
            _ => {}
        }
    }

    // METAFACET_WRAPPER_POLICY
    if let Some(policy) = lookup("METAFACET_WRAPPER_POLICY") {
        match policy.to_lowercase().as_str() {
            "always" => config.events.default_policy = WrapperPolicy::Always,
            "only-on-change" | "only_on_change" => {
                config.events.default_policy = WrapperPolicy::OnlyOnChange
            }
            _ => {}
        }
    }

    // METAFACET_DISABLED_FACTORIES (comma-separated)
    if let Some(names) = lookup("METAFACET_DISABLED_FACTORIES") {
        config.factories.disabled = names
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    config
}

/// First line that assigns `key` or opens a `[key]` table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let header = format!("[{}]", key);
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            line == header
                || line
                    .strip_prefix(key)
                    .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "mapping",
    "money_amount_type",
    "money_currency_type",
    "text_type",
    "integer_type",
    "decimal_type",
    "boolean_type",
    "missing_value",
    "events",
    "default_policy",
    "bus",
    "factories",
    "disabled",
    "output",
    "verbosity",
];

/// Closest known key within two edits
pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
