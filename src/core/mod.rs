mod progress;
use progress::Progress;

mod execute;
pub use execute::*;

pub mod verbs;
