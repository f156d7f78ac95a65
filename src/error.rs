//! Error handling for featgen.
//! Defines the error taxonomy and result type used by every generation stage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::USAGE;

/// Errors that abort feature generation.
///
/// Every variant is terminal: the binary prints its message as a single line
/// and exits with a non-zero status.
#[derive(Error, Debug)]
pub enum Error {
    /// The environment guard refused to run.
    #[error("Refusing to run in a production or CI environment: featgen is a development-only tool for generating feature scaffolding.")]
    RestrictedEnvironment,

    /// No feature name was supplied.
    #[error("Feature name is required.")]
    MissingArgument,

    /// The feature name failed the charset, shape or traversal checks.
    #[error("Invalid feature name '{name}': {reason}.")]
    InvalidName { name: String, reason: &'static str },

    /// Collapsing separators produced a string that is not a legal identifier.
    #[error("Feature name '{name}' does not produce valid TypeScript identifiers.")]
    InvalidIdentifierDerived { name: String },

    /// A resolved path escaped its root directory.
    #[error("Invalid feature path '{}': path traversal detected.", path.display())]
    PathTraversalDetected { path: PathBuf },

    /// The target feature directory is already present.
    #[error("Feature '{name}' already exists.")]
    FeatureAlreadyExists { name: String },

    /// A filesystem operation failed while materializing the scaffold.
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Loading the environment configuration failed.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A built-in skeleton failed to render.
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
///
/// `MissingArgument` is followed by the usage line.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    if matches!(err, Error::MissingArgument) {
        eprintln!("{USAGE}");
    }
    std::process::exit(1);
}
