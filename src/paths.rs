//! Target path resolution and containment checks.
//!
//! Every path the generator touches is computed here and certified to lie
//! inside its root before any filesystem call is made.

use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::constants::FEATURE_SUBDIRS;
use crate::error::{Error, Result};
use crate::name::ValidatedName;
use crate::template::FEATURE_TEMPLATES;

/// Resolved, certified targets for one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    pub features_root: PathBuf,
    pub feature_dir: PathBuf,
    pub components_dir: PathBuf,
    pub hooks_dir: PathBuf,
    /// One path per entry of [`FEATURE_TEMPLATES`], in the same order.
    pub files: Vec<PathBuf>,
}

/// Lexically normalizes a path: drops `.` segments and folds `..` into its
/// parent. Never touches the filesystem, so symlinks are not followed.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.file_name().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    // leading `..` of a relative path is kept
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolves `candidate` against `root` and certifies the result is `root`
/// itself or one of its descendants.
///
/// The comparison is component-wise, so `/app/features-evil` is not inside
/// `/app/features`.
///
/// # Errors
/// * `Error::PathTraversalDetected` if the resolved path escapes `root`
pub fn ensure_contained(root: &Path, candidate: &Path) -> Result<PathBuf> {
    let root = normalize_path(root);
    let resolved = normalize_path(&root.join(candidate));

    if resolved != root && !resolved.starts_with(&root) {
        return Err(Error::PathTraversalDetected { path: resolved });
    }
    Ok(resolved)
}

/// Computes and certifies every target for `name` under `features_root`.
///
/// # Errors
/// * `Error::ConfigError` if `features_root` cannot be made absolute
/// * `Error::PathTraversalDetected` if any target escapes its root
/// * `Error::FeatureAlreadyExists` if the feature directory is present
pub fn resolve_target_paths(features_root: &Path, name: &ValidatedName) -> Result<TargetPaths> {
    let features_root = std::path::absolute(features_root)
        .map(|path| normalize_path(&path))
        .map_err(|e| {
            Error::ConfigError(format!(
                "cannot resolve features directory {}: {}",
                features_root.display(),
                e
            ))
        })?;

    let feature_dir = ensure_contained(&features_root, Path::new(name.as_str()))?;

    // symlink_metadata also catches dangling symlinks.
    if feature_dir.symlink_metadata().is_ok() {
        return Err(Error::FeatureAlreadyExists {
            name: name.to_string(),
        });
    }

    let [components, hooks] = FEATURE_SUBDIRS;
    let components_dir = ensure_contained(&feature_dir, Path::new(components))?;
    let hooks_dir = ensure_contained(&feature_dir, Path::new(hooks))?;

    let files = FEATURE_TEMPLATES
        .iter()
        .map(|template| ensure_contained(&feature_dir, Path::new(&template.file_name(name))))
        .collect::<Result<Vec<_>>>()?;

    debug!("Resolved feature directory {}", feature_dir.display());

    Ok(TargetPaths {
        features_root,
        feature_dir,
        components_dir,
        hooks_dir,
        files,
    })
}
