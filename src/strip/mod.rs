//! Known-prefix stripping for log lines

pub mod rules;
pub mod stripper;

pub use rules::{PrefixMatcher, PrefixRule, DEFAULT_RULES};
pub use stripper::PrefixStripper;
