//! Shell configuration.
//!
//! Settings come from a TOML file (`~/.deskshell/config.toml` unless
//! `--config` says otherwise) and are then overridden by command-line flags.
//! A missing file is not an error; the defaults apply.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use indoc::indoc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use crate::constants::{DEFAULT_WORKSPACE_COUNT, MAX_WORKSPACE_COUNT};
use crate::overlay::OverlayMetrics;
use crate::theme::ThemeName;

const CONFIG_DIR: &str = ".deskshell";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "deskshell.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Invalid(String),
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "deskshell",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating-window desktop shell in the terminal"
)]
pub struct Cli {
    /// Config file to read instead of ~/.deskshell/config.toml.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of workspaces (1-32).
    #[arg(short = 'w', long = "workspaces", value_name = "N")]
    pub workspaces: Option<usize>,

    /// Color theme: dark or light.
    #[arg(short = 't', long = "theme", value_name = "NAME")]
    pub theme: Option<ThemeName>,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<Level>,

    /// Write a commented default config to the config path and exit.
    #[arg(long = "write-config")]
    pub write_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub workspace_count: usize,
    pub theme: ThemeName,
    /// Commands recorded for autostart. The shell stores them but never
    /// runs them.
    pub autostart: Vec<String>,
    pub overlay: OverlayMetrics,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            workspace_count: DEFAULT_WORKSPACE_COUNT,
            theme: ThemeName::default(),
            autostart: Vec::new(),
            overlay: OverlayMetrics::default(),
        }
    }
}

pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}

pub fn default_config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(LOG_FILE))
}

impl ShellConfig {
    /// Commented TOML equivalent to `ShellConfig::default()`.
    pub fn template() -> &'static str {
        indoc! {r#"
            # deskshell configuration

            # Number of workspaces, 1 to 32.
            workspace_count = 4

            # "dark" or "light".
            theme = "dark"

            # Commands remembered for autostart. They are not executed.
            autostart = []

            # Overlay geometry in logical units.
            [overlay]
            panel_height = 48
            dock_width = 64
            margin = 8
            tray_width = 320
            tray_height = 400
            tray_right_gap = 20
        "#}
    }

    pub fn parse(buf: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(buf)?;
        config.check()?;
        Ok(config)
    }

    /// Read `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(buf) => Self::parse(&buf),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        write_creating_parent(path, &toml_string)
    }

    /// Describe every problem with the current values.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.workspace_count == 0 {
            issues.push("workspace_count must be at least 1".to_string());
        }
        if self.workspace_count > MAX_WORKSPACE_COUNT {
            issues.push(format!(
                "workspace_count ({}) should not exceed {MAX_WORKSPACE_COUNT}",
                self.workspace_count
            ));
        }
        if self.overlay.dock_width == 0 {
            issues.push("overlay.dock_width must be positive".to_string());
        }
        if self.overlay.tray_width == 0 || self.overlay.tray_height == 0 {
            issues.push("overlay tray size must be positive".to_string());
        }
        if self.autostart.iter().any(|cmd| cmd.trim().is_empty()) {
            issues.push("autostart entries must not be blank".to_string());
        }
        issues
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(issues.join("; ")))
        }
    }

    /// Flags given on the command line win over the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(count) = cli.workspaces {
            self.workspace_count = count;
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
    }

    /// Load the file named by `cli` (or the default location), then apply
    /// command-line overrides and validate the result.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match cli.config.clone().or_else(default_config_path) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.check()?;
        Ok(config)
    }
}

pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    write_creating_parent(path, ShellConfig::template())
}

fn write_creating_parent(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_matches_defaults() {
        let parsed = ShellConfig::parse(ShellConfig::template()).expect("template parses");
        assert_eq!(parsed, ShellConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = ShellConfig::parse(indoc! {r#"
            theme = "light"
            [overlay]
            panel_height = 32
        "#})
        .unwrap();
        assert_eq!(cfg.theme, ThemeName::Light);
        assert_eq!(cfg.workspace_count, 4);
        assert_eq!(cfg.overlay.panel_height, 32);
        assert_eq!(cfg.overlay.dock_width, 64);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ShellConfig::parse("workspaces = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn workspace_count_bounds() {
        let err = ShellConfig::parse("workspace_count = 0").unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        let mut cfg = ShellConfig::default();
        cfg.workspace_count = 100;
        assert!(cfg.validate().iter().any(|i| i.contains("should not exceed")));
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut cfg = ShellConfig::parse("workspace_count = 2\ntheme = \"light\"").unwrap();
        let cli = Cli::parse_from(["deskshell", "--workspaces", "6", "--theme", "dark"]);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.workspace_count, 6);
        assert_eq!(cfg.theme, ThemeName::Dark);
    }

    #[test]
    fn cli_parses_log_level() {
        let cli = Cli::parse_from(["deskshell", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some(Level::DEBUG));
        assert!(!cli.write_config);
    }
}
