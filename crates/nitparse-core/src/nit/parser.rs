//! Line-item parser for NIT document text.

use tracing::{debug, trace};

use crate::models::item::{Item, NOT_AVAILABLE, NO_DESCRIPTION};

use super::rules::{ITEM_START, QTY_UNIT};

/// Parser that extracts line items from linearized NIT text.
///
/// The parser is a pure function over its input: it holds no state
/// between calls, performs no I/O, and is total over all strings.
/// Lines that do not open an item are skipped silently; there is no
/// continuation-line merging, so each item comes from exactly one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemParser;

impl ItemParser {
    /// Create a new item parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse NIT text into an ordered list of items.
    ///
    /// Every input is valid: the empty string yields an empty list, and
    /// input without line breaks is treated as a single candidate line.
    /// Each call returns a fresh, independently owned list.
    pub fn parse(&self, text: &str) -> Vec<Item> {
        let mut items = Vec::new();

        for line in text.lines() {
            let line = line.trim();

            let Some(caps) = ITEM_START.captures(line) else {
                trace!("skipping non-item line: {line:?}");
                continue;
            };

            let item_no = caps[1].to_string();
            let rest = &caps[2];

            items.push(self.decompose(item_no, rest));
        }

        debug!("parsed {} items from {} characters", items.len(), text.len());
        items
    }

    /// Split the remainder of an item-start line around the first
    /// quantity/unit token, if any.
    fn decompose(&self, item_no: String, rest: &str) -> Item {
        let (description, quantity, unit, specifications) = match QTY_UNIT.captures(rest) {
            Some(caps) => {
                let m = caps.get(0).unwrap();
                (
                    rest[..m.start()].trim().to_string(),
                    caps[1].to_string(),
                    caps[2].to_string(),
                    rest[m.end()..].trim().to_string(),
                )
            }
            None => (
                rest.trim().to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                String::new(),
            ),
        };

        let description = if description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            description
        };

        Item {
            item_no,
            description,
            quantity,
            unit,
            specifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(
        item_no: &str,
        description: &str,
        quantity: &str,
        unit: &str,
        specifications: &str,
    ) -> Item {
        Item {
            item_no: item_no.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            specifications: specifications.to_string(),
        }
    }

    #[test]
    fn test_parse_mixed_lines() {
        let parser = ItemParser::new();
        let items = parser.parse("1. Steel Rod 25 Kg heavy duty\n2. Paint Brush\n");

        assert_eq!(
            items,
            vec![
                item("1", "Steel Rod", "25", "Kg", "heavy duty"),
                item("2", "Paint Brush", "N/A", "N/A", ""),
            ]
        );
    }

    #[test]
    fn test_parse_skips_non_item_lines() {
        let parser = ItemParser::new();
        let items = parser.parse("Notes: see appendix\n1) Widget 3 Pcs\n");

        assert_eq!(items, vec![item("1", "Widget", "3", "Pcs", "")]);
    }

    #[test]
    fn test_parse_empty_input() {
        let parser = ItemParser::new();
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn test_parse_no_description() {
        let parser = ItemParser::new();
        let items = parser.parse("5. 100 Litres Diesel\n");

        assert_eq!(
            items,
            vec![item("5", "No description found", "100", "Litres", "Diesel")]
        );
    }

    #[test]
    fn test_parse_no_description_no_quantity_spacing() {
        let parser = ItemParser::new();
        let items = parser.parse("4. 10 Nos\n");

        assert_eq!(items, vec![item("4", "No description found", "10", "Nos", "")]);
    }

    #[test]
    fn test_specifications_keep_punctuation() {
        let parser = ItemParser::new();
        let items = parser.parse("12) Cable 50 Meters, armoured\n");

        // Trimming is whitespace-only; the leading comma survives.
        assert_eq!(
            items,
            vec![item("12", "Cable", "50", "Meters", ", armoured")]
        );
    }

    #[test]
    fn test_unit_surface_form_preserved() {
        let parser = ItemParser::new();
        let items = parser.parse("1. Rice 10.5 kgs premium\n2. Oil 2 LITRE\n");

        assert_eq!(
            items,
            vec![
                item("1", "Rice", "10.5", "kgs", "premium"),
                item("2", "Oil", "2", "LITRE", ""),
            ]
        );
    }

    #[test]
    fn test_unrecognized_unit_is_total_miss() {
        let parser = ItemParser::new();
        let items = parser.parse("3. Tape 10 boxes\n");

        assert_eq!(items, vec![item("3", "Tape 10 boxes", "N/A", "N/A", "")]);
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let parser = ItemParser::new();
        let items = parser.parse("007. Widget\n");

        assert_eq!(items[0].item_no, "007");
    }

    #[test]
    fn test_leftmost_quantity_wins() {
        let parser = ItemParser::new();
        let items = parser.parse("9. Hose 5 Meters with 2 Sets clamps\n");

        assert_eq!(
            items,
            vec![item("9", "Hose", "5", "Meters", "with 2 Sets clamps")]
        );
    }

    #[test]
    fn test_order_preserved() {
        let parser = ItemParser::new();
        let text = "3. Third\nheader noise\n1. First\n2. Second\n";
        let numbers: Vec<String> = parser
            .parse(text)
            .into_iter()
            .map(|i| i.item_no)
            .collect();

        assert_eq!(numbers, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_whitespace_trim_idempotent() {
        let parser = ItemParser::new();
        let plain = parser.parse("1. Widget 3 Pcs");
        let padded = parser.parse("   \t1. Widget 3 Pcs   \t");

        assert_eq!(plain, padded);
    }

    #[test]
    fn test_input_without_line_breaks() {
        let parser = ItemParser::new();
        let items = parser.parse("1. Lone Widget 3 Pcs");

        assert_eq!(items, vec![item("1", "Lone Widget", "3", "Pcs", "")]);
    }

    #[test]
    fn test_no_digit_prefixed_lines() {
        let parser = ItemParser::new();
        let text = "NOTICE INVITING TENDER\nItem 5: something\nsee annexure A\n";

        assert!(parser.parse(text).is_empty());
    }
}
