//! Presentation helpers with no GUI dependency.

pub mod labels;
