pub mod output;

pub use output::{ErrorOutput, IndexOutput, IndexedOption, OptionValue, ResolveOutput, ResolvedOption};
