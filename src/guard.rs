//! Environment guard.
//! Refuses to run the generator anywhere it could alter a deployed or shared
//! environment: production deployments and CI runners.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::constants::{CI, DEVELOPMENT, DOTENV_FILE, NODE_ENV, PLATFORM_ENV_VARS, PRODUCTION};
use crate::error::{Error, Result};

/// Environment signals consulted by the guard.
///
/// Built once at process start and passed down by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Explicit environment designator (`NODE_ENV`).
    pub node_env: Option<String>,
    /// Hosting-platform designators, in [`PLATFORM_ENV_VARS`] order.
    pub platform_env: Vec<Option<String>>,
    /// Continuous-integration indicator (`CI`).
    pub ci: Option<String>,
}

impl EnvConfig {
    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            node_env: lookup(NODE_ENV),
            platform_env: PLATFORM_ENV_VARS.iter().map(|&key| lookup(key)).collect(),
            ci: lookup(CI),
        }
    }

    /// Builds the configuration from the process environment only.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from the process environment, falling back to
    /// `<project_dir>/src/config/.env` for variables the process does not set.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the dotenv file exists but cannot be parsed
    pub fn load<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        let dotenv_path = DOTENV_FILE
            .iter()
            .fold(project_dir.as_ref().to_path_buf(), |path, segment| path.join(segment));
        let dotenv = read_dotenv(&dotenv_path)?;

        Ok(Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| dotenv.get(key).cloned())
        }))
    }

    fn platform_is_production(&self) -> bool {
        self.platform_env.iter().any(|value| value.as_deref() == Some(PRODUCTION))
    }

    fn ci_enabled(&self) -> bool {
        self.ci
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true") || value == "1")
    }

    /// Whether generation must be refused.
    pub fn is_restricted(&self) -> bool {
        let node_env = self.node_env.as_deref();

        node_env == Some(PRODUCTION)
            || self.platform_is_production()
            || (self.ci_enabled() && node_env != Some(DEVELOPMENT))
    }
}

fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    if !path.is_file() {
        debug!("No dotenv file at {}", path.display());
        return Ok(HashMap::new());
    }

    debug!("Loading environment from {}", path.display());
    dotenvy::from_path_iter(path)
        .and_then(|iter| iter.collect::<std::result::Result<HashMap<_, _>, _>>())
        .map_err(|e| Error::ConfigError(format!("failed to read {}: {}", path.display(), e)))
}

/// Prints the computed restriction flag, then refuses if it is set.
///
/// # Errors
/// * `Error::RestrictedEnvironment` in production or CI environments
pub fn ensure_permitted(config: &EnvConfig) -> Result<()> {
    let restricted = config.is_restricted();

    println!("Production check: is_restricted={restricted}");
    debug!("Environment signals: {config:?}");

    if restricted {
        return Err(Error::RestrictedEnvironment);
    }
    Ok(())
}
