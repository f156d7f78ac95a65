//! featgen generates feature folders for Next.js projects.
//! A feature is a directory under `src/features/` holding API, service, type,
//! validation and store stubs plus empty `components/` and `hooks/` folders.

/// Command-line interface module for the featgen application
pub mod cli;

/// Names of directories, files and environment variables
pub mod constants;

/// Error types and handling for the featgen application
pub mod error;

/// Orchestrates guard, validation, path resolution and scaffolding
pub mod generator;

/// Refuses to run in production and CI environments
pub mod guard;

/// Logger initialisation for the binary
pub mod logger;

/// Feature name validation and identifier casing
pub mod name;

/// Target path resolution and containment checks
pub mod paths;

/// Template rendering engine
pub mod renderer;

/// Creates the feature directory tree and files
pub mod scaffold;

/// Built-in feature skeletons
pub mod template;
