//! Feature name validation and identifier casing.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use crate::error::{Error, Result};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("name pattern is valid"));

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

static SEPARATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_](.)").expect("separator pattern is valid"));

const TRAVERSAL_SEQUENCES: [&str; 3] = ["..", "/", "\\"];

/// A feature name that passed the charset, shape and traversal checks.
///
/// Safe to use as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedName(String);

impl ValidatedName {
    /// Validates a raw, possibly hostile name.
    ///
    /// # Errors
    /// * `Error::MissingArgument` if the name is empty
    /// * `Error::InvalidName` if the name fails the shape or traversal checks
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::MissingArgument);
        }

        if !NAME_PATTERN.is_match(raw) {
            return Err(Error::InvalidName {
                name: raw.to_string(),
                reason: "must start with a letter and contain only letters, numbers, hyphens, and underscores",
            });
        }

        // The pattern already excludes these; kept as a separate gate.
        if TRAVERSAL_SEQUENCES.iter().any(|seq| raw.contains(seq)) {
            return Err(Error::InvalidName {
                name: raw.to_string(),
                reason: "cannot contain path traversal characters",
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier spellings derived from a [`ValidatedName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCasing {
    /// Used for values: `userProfileApi`, `userProfileSchema`.
    pub camel_case: String,
    /// Used for types: `UserProfilePayload`.
    pub pascal_case: String,
}

/// Validates the optional command-line argument.
///
/// # Errors
/// * `Error::MissingArgument` if the name is absent or empty
/// * `Error::InvalidName` if the name is unsafe
pub fn validate_name(raw: Option<&str>) -> Result<ValidatedName> {
    let name = ValidatedName::parse(raw.ok_or(Error::MissingArgument)?)?;
    debug!("Validated feature name '{name}'");
    Ok(name)
}

/// Returns true if `s` is a legal TypeScript identifier (ASCII subset).
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(s)
}

/// Removes every `-`/`_` that is followed by a character and upper-cases
/// that character. A trailing separator is left in place.
fn collapse_separators(s: &str) -> String {
    SEPARATOR_PATTERN
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Derives camelCase and PascalCase spellings of `name`.
///
/// # Errors
/// * `Error::InvalidIdentifierDerived` if either spelling is not a legal
///   identifier, e.g. for `feature-` or `a--b`
pub fn derive_casing(name: &ValidatedName) -> Result<NameCasing> {
    let raw = name.as_str();
    let mut chars = raw.chars();
    let (first, rest) = match chars.next() {
        Some(first) => (first, collapse_separators(chars.as_str())),
        None => return Err(Error::MissingArgument),
    };

    let casing = NameCasing {
        camel_case: format!("{}{}", first.to_ascii_lowercase(), rest),
        pascal_case: format!("{}{}", first.to_ascii_uppercase(), rest),
    };

    if !is_identifier(&casing.camel_case) || !is_identifier(&casing.pascal_case) {
        return Err(Error::InvalidIdentifierDerived {
            name: raw.to_string(),
        });
    }

    debug!("Derived identifiers '{}' and '{}'", casing.camel_case, casing.pascal_case);
    Ok(casing)
}
