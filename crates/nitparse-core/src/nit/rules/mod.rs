//! Named pattern rules for NIT line classification.
//!
//! The rules are kept as separate named regexes, evaluated in a fixed
//! order by the parser: the item-start rule decides whether a line
//! opens a new record, then the quantity/unit rule splits the
//! remainder. Keeping them apart keeps the precedence (leftmost match,
//! closed unit vocabulary) independently testable.

pub mod patterns;

pub use patterns::{ITEM_START, QTY_UNIT};
