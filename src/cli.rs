//! Command-line argument parsing for the offcanvas runner
//!
//! Supports:
//! - Loading a YAML page fixture
//! - Replaying a YAML step script against it
//! - Overriding the transition duration and config file
//! - Persisting the effective config

use clap::Parser;
use std::path::PathBuf;

use crate::config::OffCanvasConfig;

/// Replay off-canvas panel operations against a page fixture
#[derive(Parser, Debug)]
#[command(name = "offcanvas", version, about = "Off-canvas panel controller")]
pub struct CliArgs {
    /// YAML page fixture (document height and elements)
    #[arg(value_name = "PAGE")]
    pub page: PathBuf,

    /// YAML list of steps to run after init
    #[arg(short = 's', long, value_name = "STEPS")]
    pub script: Option<PathBuf>,

    /// Transition duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub transition_ms: Option<u64>,

    /// Config file to use instead of ~/.config/offcanvas/config.yaml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final document as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the effective config back to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub page: PathBuf,
    pub script: Option<PathBuf>,
    pub config: OffCanvasConfig,
    /// Explicit config file, if one was given
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub save_config: bool,
}

impl RunConfig {
    /// Save the effective config to the explicit path or the default location
    pub fn persist_config(&self) -> Result<(), String> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => self.config.save(),
        }
    }
}

impl CliArgs {
    /// Resolve the controller config and convert into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let config = match &self.config {
            Some(path) => OffCanvasConfig::load_from(path)?,
            None => OffCanvasConfig::load(),
        };
        let config = match self.transition_ms {
            Some(ms) => config.with_transition_ms(ms),
            None => config,
        };

        Ok(RunConfig {
            page: self.page,
            script: self.script,
            config,
            config_path: self.config,
            json: self.json,
            save_config: self.save_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::parse_from([
            "offcanvas",
            "page.yaml",
            "--script",
            "steps.yaml",
            "--transition-ms",
            "150",
            "--json",
        ]);
        assert_eq!(args.page, PathBuf::from("page.yaml"));
        assert_eq!(args.script, Some(PathBuf::from("steps.yaml")));
        assert_eq!(args.transition_ms, Some(150));
        assert!(args.json);
    }

    #[test]
    fn test_transition_override_applies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "transition_ms: 500\n").unwrap();

        let args = CliArgs::parse_from([
            "offcanvas",
            "page.yaml",
            "--config",
            path.to_str().unwrap(),
            "--transition-ms",
            "120",
        ]);
        let run = args.into_config().unwrap();
        assert_eq!(run.config.transition_ms, 120);
        assert_eq!(run.config.panel_attribute, "off-canvas");
    }

    #[test]
    fn test_save_config_writes_effective_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "transition_ms: 500\n").unwrap();

        let args = CliArgs::parse_from([
            "offcanvas",
            "page.yaml",
            "--config",
            path.to_str().unwrap(),
            "--transition-ms",
            "120",
            "--save-config",
        ]);
        let run = args.into_config().unwrap();
        assert!(run.save_config);
        run.persist_config().unwrap();

        let saved = OffCanvasConfig::load_from(&path).unwrap();
        assert_eq!(saved.transition_ms, 120);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = CliArgs::parse_from([
            "offcanvas",
            "page.yaml",
            "--config",
            "/nonexistent/offcanvas/config.yaml",
        ]);
        assert!(args.into_config().is_err());
    }
}
