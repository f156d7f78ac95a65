//! Feature generation pipeline.
//! Runs the guard, validator, resolver and builder in order; the first
//! failing stage aborts the run.

use std::path::{Path, PathBuf};

use log::info;

use crate::constants::FEATURES_DIR;
use crate::error::{Error, Result};
use crate::guard::{ensure_permitted, EnvConfig};
use crate::name::{derive_casing, validate_name};
use crate::paths::{normalize_path, resolve_target_paths};
use crate::renderer::TemplateRenderer;
use crate::scaffold::{plan_scaffold, ScaffoldSummary};

/// Where generated features go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    project_dir: PathBuf,
}

impl GeneratorOptions {
    /// # Errors
    /// * `Error::ConfigError` if `project_dir` cannot be made absolute
    pub fn new<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        let project_dir = project_dir.as_ref();
        let absolute = std::path::absolute(project_dir).map_err(|e| {
            Error::ConfigError(format!(
                "cannot resolve project directory {}: {}",
                project_dir.display(),
                e
            ))
        })?;
        Ok(Self {
            project_dir: normalize_path(&absolute),
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `<project_dir>/src/features`
    pub fn features_root(&self) -> PathBuf {
        FEATURES_DIR
            .iter()
            .fold(self.project_dir.clone(), |path, segment| path.join(segment))
    }
}

/// Generates the feature named `raw_name`.
///
/// # Arguments
/// * `options` - Project location
/// * `env` - Environment signals for the guard
/// * `renderer` - Engine used for the skeletons
/// * `raw_name` - Unvalidated name from the command line
///
/// # Returns
/// * `Result<ScaffoldSummary>` - Created files and folders, located relative
///   to the project directory
pub fn generate_feature(
    options: &GeneratorOptions,
    env: &EnvConfig,
    renderer: &dyn TemplateRenderer,
    raw_name: Option<&str>,
) -> Result<ScaffoldSummary> {
    ensure_permitted(env)?;

    let name = validate_name(raw_name)?;
    let casing = derive_casing(&name)?;
    let paths = resolve_target_paths(&options.features_root(), &name)?;
    let plan = plan_scaffold(renderer, &name, &casing, paths)?;

    info!("Generating feature '{}' in {}", name, plan.paths.feature_dir.display());
    let summary = plan.materialize()?;

    Ok(summary.relative_to(options.project_dir()))
}
