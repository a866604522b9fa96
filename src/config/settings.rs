//! The merged configuration map.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::cli::Args;

/// A single configuration value: the scalar types the two sources produce.
///
/// CLI arguments contribute strings, booleans and integers; file options are
/// always strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl ConfigValue {
    /// Truthiness: literal booleans as-is, nonzero integers, non-empty strings.
    pub fn truthy(&self) -> bool {
        match self {
            ConfigValue::Str(s) => !s.is_empty(),
            ConfigValue::Bool(b) => *b,
            ConfigValue::Int(i) => *i != 0,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => write!(f, "{}", s),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

/// Merged configuration for the server.
///
/// Built from the CLI layer first, then extended/overwritten by the optional
/// config file (see [`crate::config::loader`]). Immutable after startup.
/// Unset keys fall back to defaults at read time via the typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: BTreeMap<String, ConfigValue>,
}

impl Configuration {
    pub const DEFAULT_BIND_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 5000;

    /// Build the CLI layer: every supplied field is inserted under its
    /// upper-cased name with the value unchanged. Optional fields that were not
    /// given on the command line are omitted, not inserted as placeholders.
    pub fn from_cli(args: &Args) -> Self {
        let mut config = Configuration::default();
        config.insert("CONFIG_FILE", args.config_file.clone());
        config.insert("JINO_DEBUG", args.jino_debug);
        if let Some(host) = &args.bind_host {
            config.insert("BIND_HOST", host.clone());
        }
        if let Some(port) = args.port {
            config.insert("PORT", i64::from(port));
        }
        config
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Listen address, `BIND_HOST` key, default `0.0.0.0`.
    pub fn bind_host(&self) -> String {
        match self.get("BIND_HOST") {
            Some(v) => v.to_string(),
            None => Self::DEFAULT_BIND_HOST.to_string(),
        }
    }

    /// Listen port, `PORT` key, default 5000. Accepts an integer or a string
    /// that parses as one; anything else falls back to the default.
    pub fn port(&self) -> u16 {
        match self.get("PORT") {
            Some(ConfigValue::Int(i)) => u16::try_from(*i).unwrap_or(Self::DEFAULT_PORT),
            Some(ConfigValue::Str(s)) => s.parse().unwrap_or(Self::DEFAULT_PORT),
            _ => Self::DEFAULT_PORT,
        }
    }

    /// Debug mode, `JINO_DEBUG` key truthy, default false.
    pub fn debug(&self) -> bool {
        self.get("JINO_DEBUG").map(ConfigValue::truthy).unwrap_or(false)
    }
}
