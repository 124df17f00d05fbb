//! Status verbs displayed by the progress reporter.
//!
//! Verbs are right-aligned to 12 characters when printed, which lines
//! them up like cargo's output.

pub const CLEARING: &str = "Clearing";
pub const CLEARED: &str = "Cleared";
pub const REMOVED: &str = "Removed";
pub const DONE: &str = "Done";
pub const FAILED: &str = "Failed";
