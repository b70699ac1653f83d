//! Domain logic - pure types and rules independent of any document host

pub mod category;
pub mod trigger;
pub mod version;

pub use category::ChangeCategory;
pub use trigger::TriggerOccurrence;
pub use version::{BumpKind, SemanticVersion};
