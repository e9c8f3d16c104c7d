use std::fmt;
use std::str::FromStr;

use semver::{Version, VersionReq};
use thiserror::Error;

/// Error type for version parsing
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),
    #[error("Version parse error: {0}")]
    ParseError(String),
}

/// Represents the kernel API version modules are checked against
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    /// Creates a new API version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Converts to a `semver::Version` for range matching
    pub fn to_semver(&self) -> Version {
        Version::new(u64::from(self.major), u64::from(self.minor), u64::from(self.patch))
    }
}

impl FromStr for ApiVersion {
    type Err = VersionError;

    /// Parses a version string like "1.2.3"
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::InvalidFormat(version.to_string()));
        }

        let parse_part = |part: &str| -> Result<u32, VersionError> {
            part.parse::<u32>().map_err(|e| VersionError::ParseError(e.to_string()))
        };

        Ok(Self::new(
            parse_part(parts[0])?,
            parse_part(parts[1])?,
            parse_part(parts[2])?,
        ))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Represents a version requirement range using semver constraints.
#[derive(Debug, Clone)]
pub struct VersionRange {
    /// The original constraint string (e.g., "^1.2.3", ">=2.0")
    constraint: String,
    /// The parsed semver requirement
    req: VersionReq,
}

impl VersionRange {
    /// Creates a new version range from a constraint string.
    pub fn from_constraint(constraint: &str) -> Result<Self, VersionError> {
        let req = VersionReq::parse(constraint).map_err(|e| {
            VersionError::ParseError(format!("Invalid version constraint '{}': {}", constraint, e))
        })?;
        Ok(Self {
            constraint: constraint.to_string(),
            req,
        })
    }

    /// Checks if a specific `semver::Version` satisfies this range.
    pub fn includes(&self, version: &Version) -> bool {
        self.req.matches(version)
    }

    /// Returns the original constraint string.
    pub fn constraint_string(&self) -> &str {
        &self.constraint
    }
}

/// Implement Display to show the original constraint string.
impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constraint)
    }
}

/// Allow parsing directly from a string slice.
impl FromStr for VersionRange {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::from_constraint(s)
    }
}
