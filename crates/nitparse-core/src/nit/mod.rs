//! NIT line-item extraction module.

mod parser;
pub mod rules;

pub use parser::ItemParser;
