use std::str::FromStr;

use crate::error::{ChangelogWatchError, Result};

/// Change category named by a trigger token. Purely a label: it is copied
/// verbatim (uppercased) into the synthesized entry heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Added,
    Changed,
    Deprecated,
    Fixed,
    Removed,
    Secured,
}

impl ChangeCategory {
    /// The spelling used inside trigger tokens
    pub fn name(&self) -> &'static str {
        match self {
            ChangeCategory::Added => "added",
            ChangeCategory::Changed => "changed",
            ChangeCategory::Deprecated => "deprecated",
            ChangeCategory::Fixed => "fixed",
            ChangeCategory::Removed => "removed",
            ChangeCategory::Secured => "secured",
        }
    }

    /// Uppercased label for the entry subsection heading
    pub fn heading_label(&self) -> String {
        self.name().to_uppercase()
    }
}

impl FromStr for ChangeCategory {
    type Err = ChangelogWatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "added" => Ok(ChangeCategory::Added),
            "changed" => Ok(ChangeCategory::Changed),
            "deprecated" => Ok(ChangeCategory::Deprecated),
            "fixed" => Ok(ChangeCategory::Fixed),
            "removed" => Ok(ChangeCategory::Removed),
            "secured" => Ok(ChangeCategory::Secured),
            other => Err(ChangelogWatchError::version(format!(
                "Unknown change category: '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ChangeCategory; 6] = [
        ChangeCategory::Added,
        ChangeCategory::Changed,
        ChangeCategory::Deprecated,
        ChangeCategory::Fixed,
        ChangeCategory::Removed,
        ChangeCategory::Secured,
    ];

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "added".parse::<ChangeCategory>().unwrap(),
            ChangeCategory::Added
        );
        assert_eq!(
            "secured".parse::<ChangeCategory>().unwrap(),
            ChangeCategory::Secured
        );
        assert!("security".parse::<ChangeCategory>().is_err());
    }

    #[test]
    fn test_category_name_round_trip() {
        for category in ALL {
            assert_eq!(
                category.name().parse::<ChangeCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_heading_label_is_uppercased() {
        assert_eq!(ChangeCategory::Fixed.heading_label(), "FIXED");
        assert_eq!(ChangeCategory::Deprecated.heading_label(), "DEPRECATED");
    }
}
