//! Configuration model, discovery, and precedence for fluxion
//!
//! Configuration is loaded with precedence: CLI flags > config file >
//! built-in defaults. The config file is discovered by searching upward
//! from the current directory for `.fluxion/config.toml`; a missing file
//! is not an error.

mod discovery;
mod model;

pub use discovery::discover_config_file;
pub use model::{CliArgs, Config, Defaults, LlmConfig};

use fluxion_utils::error::ConfigError;
use std::path::Path;

impl Config {
    /// Discover and load configuration using CLI semantics.
    ///
    /// Searches upward from the current directory for
    /// `.fluxion/config.toml` (unless `cli_args.config_path` names an
    /// explicit file), parses it, then applies CLI overrides on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFile` if an explicit or discovered
    /// config file exists but cannot be read or parsed.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &cli_args.config_path {
            Some(path) => Self::load_file(path)?,
            None => match discover_config_file() {
                Some(path) => Self::load_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_cli_args(cli_args);
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::InvalidFile(
            format!("{}: {}", path.display(), e),
        ))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))
    }

    fn apply_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(model) = &cli_args.model {
            self.llm.model = Some(model.clone());
        }
        if let Some(verbose) = cli_args.verbose {
            self.defaults.verbose = Some(verbose);
        }
    }

    /// Minimal configuration for tests: built-in defaults only, no
    /// discovery, no environment access.
    #[must_use]
    pub fn minimal_for_testing() -> Self {
        Self::default()
    }
}
