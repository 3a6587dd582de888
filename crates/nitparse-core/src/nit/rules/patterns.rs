//! Regex patterns for NIT line-item extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Item-start rule: digits, exactly one delimiter, whitespace, then
    // a non-whitespace-led remainder. Applied to a trimmed line, so the
    // anchors cover the whole line. Lines like "Item 5: ..." fail the
    // leading digit requirement and are skipped.
    pub static ref ITEM_START: Regex = Regex::new(
        r"^(\d+)[.:)\]]\s+(\S.*)$"
    ).unwrap();

    // Quantity/unit rule: a decimal number followed by whitespace and
    // one of the recognized unit words. Unanchored; the parser uses the
    // leftmost occurrence. The vocabulary is closed: an unrecognized
    // unit word ("10 boxes") means no match for the whole pair.
    pub static ref QTY_UNIT: Regex = Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s+(Nos?|Units?|Pcs?|Meters?|Kgs?|Litres?|Sets?)\b"
    ).unwrap();
}
