//! Common constants used throughout featgen.

/// Usage line printed alongside argument errors.
pub const USAGE: &str = "Usage: featgen generate <FEATURE_NAME>";

/// Features root, relative to the project directory.
pub const FEATURES_DIR: [&str; 2] = ["src", "features"];

/// Optional dotenv file, relative to the project directory.
pub const DOTENV_FILE: [&str; 3] = ["src", "config", ".env"];

/// Empty subfolders created inside every feature.
pub const FEATURE_SUBDIRS: [&str; 2] = ["components", "hooks"];

/// Extension of every generated source file.
pub const FILE_EXTENSION: &str = "ts";

/// Explicit environment designator.
pub const NODE_ENV: &str = "NODE_ENV";

/// Hosting-platform environment designators.
pub const PLATFORM_ENV_VARS: [&str; 2] = ["VERCEL_ENV", "NEXT_PUBLIC_VERCEL_ENV"];

/// Continuous-integration indicator.
pub const CI: &str = "CI";

pub const PRODUCTION: &str = "production";
pub const DEVELOPMENT: &str = "development";
