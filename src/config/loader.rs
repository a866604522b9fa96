//! Configuration file resolution and merging.

use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::config::cli::Args;
use crate::config::settings::Configuration;

/// Path consulted when no config file is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/jino/jino.conf";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ini::ParseError,
    },
}

/// The config file path to use: the `--config-file` argument, or the default
/// path when the argument is empty.
pub fn resolve_config_file(args: &Args) -> PathBuf {
    if args.config_file.is_empty() {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    } else {
        PathBuf::from(&args.config_file)
    }
}

/// Merge an INI file into the configuration.
///
/// A missing file is skipped silently; a malformed one is an error. Sections
/// are structural only and flattened away. Option names keep their authored
/// case — CLI-sourced keys are upper-cased, so the two sources are effectively
/// separate namespaces and a file option never overwrites a CLI key of
/// different case. The typed accessors read the upper-case keys only.
pub fn merge_file(config: &mut Configuration, path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file found, skipping");
        return Ok(());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = Ini::load_from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for (_section, properties) in file.iter() {
        for (option, value) in properties.iter() {
            config.insert(option, value);
        }
    }

    tracing::debug!(path = %path.display(), "Config file merged");
    Ok(())
}

/// Assemble the full configuration: CLI layer first, then the optional file.
pub fn load(args: &Args) -> Result<Configuration, ConfigError> {
    let mut config = Configuration::from_cli(args);
    merge_file(&mut config, &resolve_config_file(args))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ConfigValue;
    use clap::Parser;
    use std::io::Write;

    fn args_with_file(path: &Path) -> Args {
        Args::try_parse_from(["jino", "--config-file", path.to_str().unwrap()]).unwrap()
    }

    #[test]
    fn file_options_keep_their_authored_case() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport=8080").unwrap();

        let args = args_with_file(file.path());
        let mut config = Configuration::from_cli(&args);
        config.insert("PORT", 9000i64);

        merge_file(&mut config, file.path()).unwrap();

        // The file contributes `port`; the CLI-sourced `PORT` is untouched.
        assert_eq!(config.get("port"), Some(&ConfigValue::Str("8080".into())));
        assert_eq!(config.get("PORT"), Some(&ConfigValue::Int(9000)));
    }

    #[test]
    fn sections_are_flattened_away() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost=10.0.0.1\n[jenkins]\nurl=http://ci:8080").unwrap();

        let args = args_with_file(file.path());
        let config = load(&args).unwrap();

        assert_eq!(
            config.get("host"),
            Some(&ConfigValue::Str("10.0.0.1".into()))
        );
        assert_eq!(
            config.get("url"),
            Some(&ConfigValue::Str("http://ci:8080".into()))
        );
        assert!(config.get("server").is_none());
        assert!(config.get("jenkins").is_none());
    }

    #[test]
    fn missing_file_leaves_cli_layer_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.conf");

        let args = args_with_file(&path);
        let config = load(&args).unwrap();

        assert_eq!(config, Configuration::from_cli(&args));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[unclosed\nport 8080").unwrap();

        let args = args_with_file(file.path());
        let err = load(&args).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_config_file_argument_resolves_to_default_path() {
        let args = Args::try_parse_from(["jino"]).unwrap();
        assert_eq!(resolve_config_file(&args), PathBuf::from(DEFAULT_CONFIG_FILE));

        let args = Args::try_parse_from(["jino", "--config-file", "/tmp/x.conf"]).unwrap();
        assert_eq!(resolve_config_file(&args), PathBuf::from("/tmp/x.conf"));
    }
}
