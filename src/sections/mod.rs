//! Password policy sections
//!
//! Each section checks one composition rule.

mod charset;
mod length;
mod repetition;
mod variety;

pub use charset::charset_section;
pub use length::length_section;
pub use repetition::repetition_section;
pub use variety::character_variety_section;

/// Result type for section check functions.
/// - `Some(reason)` - Section rejected the candidate with reason
/// - `None` - Section passed
///
/// Reasons are for logs only and never name the offending characters.
pub type SectionResult = Option<String>;
