//! Pattern expansion adapters

mod glob_expander;

pub use glob_expander::GlobPatternExpander;
