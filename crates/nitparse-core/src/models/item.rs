//! Line-item record extracted from a NIT document.

use serde::{Deserialize, Serialize};

/// Sentinel used when a quantity or unit could not be detected.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel used when an item line carries no description text.
pub const NO_DESCRIPTION: &str = "No description found";

/// One line item extracted from a NIT document.
///
/// All fields are carried as the literal surface forms from the source
/// text. `item_no` keeps leading zeros, `quantity` keeps any fractional
/// part exactly as written, and `unit` keeps its original casing and
/// singular/plural form. Items are flat, independent records in source
/// order; numbering like "1.1" implies no nesting here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Sequence label as it appeared in the document (`^\d+$`).
    pub item_no: String,

    /// Free text before the quantity/unit token, or the whole remainder
    /// when no token was detected. Never empty: [`NO_DESCRIPTION`] is
    /// substituted for an empty extraction.
    pub description: String,

    /// Numeric literal verbatim, or [`NOT_AVAILABLE`]. Detected in
    /// lockstep with `unit` from a single combined match.
    pub quantity: String,

    /// Recognized unit word verbatim, or [`NOT_AVAILABLE`].
    pub unit: String,

    /// Free text after the unit token; empty when absent or when no
    /// quantity/unit was detected.
    pub specifications: String,
}

impl Item {
    /// Whether a quantity/unit token was detected on this item's line.
    pub fn has_quantity(&self) -> bool {
        self.quantity != NOT_AVAILABLE
    }
}
