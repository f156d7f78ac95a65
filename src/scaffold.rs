//! Scaffold builder.
//! Renders every file in memory, then materializes the feature directory.
//! A failure part-way through removes the feature directory again.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::name::{NameCasing, ValidatedName};
use crate::paths::{ensure_contained, TargetPaths};
use crate::renderer::TemplateRenderer;
use crate::template::{TemplateContext, FEATURE_TEMPLATES};

/// A skeleton rendered for one feature, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Everything needed to materialize a feature, computed before any write.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub name: ValidatedName,
    pub paths: TargetPaths,
    pub files: Vec<RenderedFile>,
}

/// Renders all skeletons for `name` against the certified `paths`.
///
/// # Errors
/// * `Error::TemplateError` if a skeleton fails to render
pub fn plan_scaffold(
    renderer: &dyn TemplateRenderer,
    name: &ValidatedName,
    casing: &NameCasing,
    paths: TargetPaths,
) -> Result<ScaffoldPlan> {
    let context = TemplateContext::new(name, casing).to_value();

    let files = FEATURE_TEMPLATES
        .iter()
        .zip(&paths.files)
        .map(|(template, path)| {
            Ok(RenderedFile {
                path: path.clone(),
                content: renderer.render(template.source, &context)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScaffoldPlan {
        name: name.clone(),
        paths,
        files,
    })
}

fn write_failed(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes `content` to `path` after re-checking that it resolves inside
/// `root`. Independent of the checks made while planning.
///
/// # Errors
/// * `Error::PathTraversalDetected` if `path` escapes `root`
/// * `Error::WriteFailed` if the write itself fails
pub fn write_contained(root: &Path, path: &Path, content: &str) -> Result<PathBuf> {
    let target = ensure_contained(root, path)?;
    fs::write(&target, content).map_err(write_failed(&target))?;
    debug!("Wrote {}", target.display());
    Ok(target)
}

/// Creates `path` and any missing parents after re-checking that it resolves
/// inside `root`.
///
/// # Errors
/// * `Error::PathTraversalDetected` if `path` escapes `root`
/// * `Error::WriteFailed` if the directory cannot be created
pub fn create_dir_contained(root: &Path, path: &Path) -> Result<PathBuf> {
    let target = ensure_contained(root, path)?;
    fs::create_dir_all(&target).map_err(write_failed(&target))?;
    debug!("Created {}", target.display());
    Ok(target)
}

impl ScaffoldPlan {
    /// Creates the feature directory, its subfolders and its files.
    ///
    /// The feature directory itself is created non-recursively, so a
    /// concurrent run that got there first is reported as
    /// `FeatureAlreadyExists` instead of being written into.
    ///
    /// # Errors
    /// * `Error::FeatureAlreadyExists` if the feature directory appeared after planning
    /// * `Error::WriteFailed` if any directory or file cannot be written; the
    ///   feature directory is removed before returning
    pub fn materialize(&self) -> Result<ScaffoldSummary> {
        let TargetPaths {
            features_root,
            feature_dir,
            ..
        } = &self.paths;

        fs::create_dir_all(features_root).map_err(write_failed(features_root))?;

        let feature_dir = ensure_contained(features_root, feature_dir)?;
        match fs::create_dir(&feature_dir) {
            Ok(()) => debug!("Created {}", feature_dir.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::FeatureAlreadyExists {
                    name: self.name.to_string(),
                })
            }
            Err(e) => return Err(write_failed(&feature_dir)(e)),
        }

        match self.populate(&feature_dir) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                warn!("Generation failed, removing {}", feature_dir.display());
                if let Err(e) = fs::remove_dir_all(&feature_dir) {
                    warn!("Failed to remove {}: {}", feature_dir.display(), e);
                }
                Err(err)
            }
        }
    }

    fn populate(&self, feature_dir: &Path) -> Result<ScaffoldSummary> {
        let mut folders = Vec::new();
        for dir in [&self.paths.components_dir, &self.paths.hooks_dir] {
            let created = create_dir_contained(feature_dir, dir)?;
            folders.push(relative_name(feature_dir, &created));
        }

        let mut files = Vec::new();
        for file in &self.files {
            let written = write_contained(feature_dir, &file.path, &file.content)?;
            files.push(relative_name(feature_dir, &written));
        }

        Ok(ScaffoldSummary {
            name: self.name.to_string(),
            location: feature_dir.to_path_buf(),
            files,
            folders,
        })
    }
}

fn relative_name(base: &Path, path: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// What a successful run created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub name: String,
    /// Feature directory; absolute until [`ScaffoldSummary::relative_to`].
    pub location: PathBuf,
    /// File names relative to the feature directory.
    pub files: Vec<String>,
    /// Folder names relative to the feature directory.
    pub folders: Vec<String>,
}

impl ScaffoldSummary {
    /// Rewrites `location` relative to `base` when it lies below it.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if let Ok(relative) = self.location.strip_prefix(base) {
            self.location = relative.to_path_buf();
        }
        self
    }
}

impl fmt::Display for ScaffoldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feature \"{}\" generated successfully!", self.name)?;
        writeln!(f, "Location: {}/", self.location.display())?;
        writeln!(f)?;
        writeln!(f, "Generated files:")?;
        for file in &self.files {
            writeln!(f, "  - {file}")?;
        }
        writeln!(f)?;
        write!(f, "Generated folders:")?;
        for folder in &self.folders {
            write!(f, "\n  - {folder}/")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::derive_casing;
    use crate::paths::resolve_target_paths;
    use crate::renderer::MiniJinjaRenderer;
    use tempfile::TempDir;

    fn plan(root: &Path, raw: &str) -> ScaffoldPlan {
        let name = ValidatedName::parse(raw).unwrap();
        let casing = derive_casing(&name).unwrap();
        let paths = resolve_target_paths(root, &name).unwrap();
        plan_scaffold(&MiniJinjaRenderer::new(), &name, &casing, paths).unwrap()
    }

    #[test]
    fn test_plan_renders_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let plan = plan(temp_dir.path(), "billing");

        assert_eq!(plan.files.len(), 5);
        assert!(plan.files[0].content.contains("export const billingApi"));
        assert!(plan.files[2].content.contains("export interface BillingPayload"));
        // planning alone writes nothing
        assert!(!plan.paths.feature_dir.exists());
    }

    #[test]
    fn test_write_contained_rejects_escape() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("feature");
        fs::create_dir(&root).unwrap();

        let result = write_contained(&root, Path::new("../outside.ts"), "x");
        assert!(matches!(result, Err(Error::PathTraversalDetected { .. })));
        assert!(!temp_dir.path().join("outside.ts").exists());
    }

    #[test]
    fn test_write_contained_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let result = write_contained(temp_dir.path(), Path::new("missing/file.ts"), "x");
        assert!(matches!(result, Err(Error::WriteFailed { .. })));
    }

    #[test_log::test]
    fn test_failed_write_rolls_back_feature_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut plan = plan(temp_dir.path(), "orders");

        // Writing a file over the components directory fails mid-sequence.
        plan.files[1].path = plan.paths.components_dir.clone();

        let result = plan.materialize();
        assert!(matches!(result, Err(Error::WriteFailed { .. })));
        assert!(!plan.paths.feature_dir.exists());
    }

    #[test]
    fn test_materialize_refuses_existing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let plan = plan(temp_dir.path(), "orders");
        fs::create_dir(&plan.paths.feature_dir).unwrap();
        fs::write(plan.paths.feature_dir.join("keep.ts"), "keep").unwrap();

        let result = plan.materialize();
        assert!(matches!(result, Err(Error::FeatureAlreadyExists { .. })));
        assert!(plan.paths.feature_dir.join("keep.ts").exists());
    }

    #[test]
    fn test_summary_display() {
        let summary = ScaffoldSummary {
            name: "orders".to_string(),
            location: PathBuf::from("/app/src/features/orders"),
            files: vec!["orders.api.ts".to_string()],
            folders: vec!["components".to_string(), "hooks".to_string()],
        }
        .relative_to(Path::new("/app"));

        assert_eq!(
            summary.to_string(),
            "Feature \"orders\" generated successfully!\n\
             Location: src/features/orders/\n\
             \n\
             Generated files:\n  - orders.api.ts\n\
             \n\
             Generated folders:\n  - components/\n  - hooks/"
        );
    }
}
