use crate::domain::{BumpKind, ChangeCategory};

/// One recognized trigger token, tied to the line it was typed on.
/// Ephemeral: consumed by a single changelog update and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOccurrence {
    /// Zero-based index of the line that contained the token
    pub line: usize,
    pub bump: BumpKind,
    pub category: ChangeCategory,
}

impl TriggerOccurrence {
    /// Match one line of text against the trigger grammar
    /// `changelog-<bump>-<category>`, with arbitrary trailing text allowed.
    ///
    /// Returns `None` for anything that is not a trigger; a non-match is
    /// never an error.
    pub fn from_line(line: usize, text: &str) -> Option<Self> {
        if let Ok(re) = regex::Regex::new(
            r"^changelog-(major|minor|patch)-(added|changed|deprecated|fixed|removed|secured)",
        ) {
            if let Some(captures) = re.captures(text.trim()) {
                if let (Some(bump_match), Some(category_match)) =
                    (captures.get(1), captures.get(2))
                {
                    // The alternations guarantee both parses succeed
                    let bump = bump_match.as_str().parse::<BumpKind>().ok()?;
                    let category = category_match.as_str().parse::<ChangeCategory>().ok()?;
                    return Some(TriggerOccurrence {
                        line,
                        bump,
                        category,
                    });
                }
            }
        }
        None
    }
}
