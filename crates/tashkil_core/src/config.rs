//! Linter configuration.
//!
//! [`RuleConfig`] is what the rules see: one enabled flag and one severity per
//! rule, plus the loose-diacritic fix toggle. [`LinterConfig`] is the on-disk
//! `.tashkil.jsonc` file that the CLI loads and turns into a [`RuleConfig`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::LinterError;
use crate::diagnostic::Severity;
use crate::rules::RuleId;

const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Option key for the loose-diacritic fix toggle.
pub const REMOVE_LOOSE_DIACRITICS: &str = "remove_loose_diacritics";

/// Default ceiling for files passed to the linter, in bytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Value of a single entry in the `options` map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Enabled or disabled (boolean).
    Enabled(bool),
    /// Severity string: "error", "warning" or "off".
    Severity(String),
    /// Anything else. Kept so that newer files still load; ignored.
    Other(serde_json::Value),
}

impl RuleOption {
    /// Returns whether the option turns its rule on.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => s != "off",
            RuleOption::Other(_) => true,
        }
    }

    /// Returns the severity named by a severity string.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            RuleOption::Severity(s) if s == "error" => Some(Severity::Error),
            RuleOption::Severity(s) if s == "warning" => Some(Severity::Warning),
            _ => None,
        }
    }
}

/// Per-rule state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSetting {
    /// Whether the rule runs at all.
    pub enabled: bool,
    /// Severity of the rule's findings.
    pub severity: Severity,
}

/// Engine-level configuration for the built-in rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    rules: [RuleSetting; RuleId::COUNT],
    remove_loose_diacritics: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rules: RuleId::ALL.map(|rule| RuleSetting {
                enabled: true,
                severity: rule.default_severity(),
            }),
            remove_loose_diacritics: true,
        }
    }
}

impl RuleConfig {
    /// Builds a configuration from a JSON object, starting from the defaults.
    ///
    /// Unknown keys and values of the wrong type are logged and ignored.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                warn!("Ignoring rule options: expected an object, got {}", value);
            }
            return Self::default();
        };

        let mut config = Self::default();
        for (key, value) in map {
            match serde_json::from_value::<RuleOption>(value.clone()) {
                Ok(option) => config.apply(key, &option),
                Err(e) => warn!("Ignoring option '{}': {}", key, e),
            }
        }
        config
    }

    /// Builds a configuration from an options map, starting from the defaults.
    pub fn from_options<'a>(options: impl IntoIterator<Item = (&'a str, &'a RuleOption)>) -> Self {
        let mut config = Self::default();
        for (key, option) in options {
            config.apply(key, option);
        }
        config
    }

    fn apply(&mut self, key: &str, option: &RuleOption) {
        if key == REMOVE_LOOSE_DIACRITICS {
            match option {
                RuleOption::Enabled(enabled) => self.remove_loose_diacritics = *enabled,
                other => warn!("Ignoring option '{}': expected a boolean, got {:?}", key, other),
            }
            return;
        }

        let Ok(rule) = key.parse::<RuleId>() else {
            warn!("Ignoring unknown option '{}'", key);
            return;
        };

        match option {
            RuleOption::Enabled(enabled) => self.set_enabled(rule, *enabled),
            RuleOption::Severity(s) if s == "off" => self.set_enabled(rule, false),
            RuleOption::Severity(_) => match option.severity() {
                Some(severity) => {
                    self.set_enabled(rule, true);
                    self.set_severity(rule, severity);
                }
                None => warn!("Ignoring option '{}': unknown severity {:?}", key, option),
            },
            RuleOption::Other(value) => {
                warn!("Ignoring option '{}': expected a boolean, got {}", key, value)
            }
        }
    }

    /// Returns whether the loose-diacritic rule attaches fixes.
    pub fn remove_loose_diacritics(&self) -> bool {
        self.remove_loose_diacritics
    }

    /// Sets whether the loose-diacritic rule attaches fixes.
    pub fn set_remove_loose_diacritics(&mut self, remove: bool) {
        self.remove_loose_diacritics = remove;
    }

    /// Returns whether `rule` runs.
    pub fn is_enabled(&self, rule: RuleId) -> bool {
        self.rules[rule.index()].enabled
    }

    /// Turns `rule` on or off.
    pub fn set_enabled(&mut self, rule: RuleId, enabled: bool) {
        self.rules[rule.index()].enabled = enabled;
    }

    /// Returns the severity of `rule`'s findings.
    pub fn severity(&self, rule: RuleId) -> Severity {
        self.rules[rule.index()].severity
    }

    /// Overrides the severity of `rule`'s findings.
    pub fn set_severity(&mut self, rule: RuleId, severity: Severity) {
        self.rules[rule.index()].severity = severity;
    }

    /// Returns the settings of `rule`.
    pub fn setting(&self, rule: RuleId) -> RuleSetting {
        self.rules[rule.index()]
    }

    /// Returns the enabled rules in evaluation order.
    pub fn enabled_rules(&self) -> Vec<RuleId> {
        RuleId::ALL
            .into_iter()
            .filter(|rule| self.is_enabled(*rule))
            .collect()
    }
}

/// Configuration file for the linter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rule configuration (enable/disable/severity) and the fix toggle.
    #[serde(default)]
    pub options: BTreeMap<String, RuleOption>,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to report per-rule timings.
    #[serde(default)]
    pub timings: bool,

    /// Files larger than this many bytes are not linted.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl LinterConfig {
    /// File names searched for, in priority order.
    pub const CONFIG_FILES: &[&str] = &[".tashkil.jsonc", ".tashkil.json"];

    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self {
            options: BTreeMap::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            timings: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            base_dir: None,
        }
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.tashkil.jsonc` and `.tashkil.json`. Comments are allowed in both.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON (or JSONC) string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(LinterError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for a configuration file in `dir`.
    ///
    /// Returns `Ok(None)` when none of [`Self::CONFIG_FILES`] exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>, LinterError> {
        let dir = dir.as_ref();
        for name in Self::CONFIG_FILES {
            let path = dir.join(name);
            if path.is_file() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Builds the rule configuration from `options`.
    pub fn rule_config(&self) -> RuleConfig {
        RuleConfig::from_options(self.options.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Computes a hash of the configuration.
    pub fn hash(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self::new()
    }
}
