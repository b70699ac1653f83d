use std::fmt;
use std::str::FromStr;

use crate::error::{ChangelogWatchError, Result};

/// Semantic version triple recorded in a changelog heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// The starting point for documents with no recorded version
    pub fn zero() -> Self {
        SemanticVersion::new(0, 0, 0)
    }

    /// Bump the version: the selected component increments, lower components
    /// reset to zero, higher components are untouched.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => SemanticVersion {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => SemanticVersion {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpKind::Patch => SemanticVersion {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which semantic-version component a trigger asks to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// The spelling used inside trigger tokens
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl FromStr for BumpKind {
    type Err = ChangelogWatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(ChangelogWatchError::version(format!(
                "Unknown bump kind: '{}'",
                other
            ))),
        }
    }
}
