//! CLI command implementations.

pub mod email;
pub mod parse;
