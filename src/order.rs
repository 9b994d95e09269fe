//! Order Table Logic
//!
//! Pure operations on the order lines; the store and components call these.

use serde::Serialize;

use crate::models::InventoryItem;

/// One table row. Every cell is display text because quantity and notes are
/// freely editable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderLine {
    pub code: String,
    pub description: String,
    pub quantity: String,
    pub uom: String,
    pub notes: String,
}

impl OrderLine {
    pub fn new(item: &InventoryItem, quantity: i64) -> Self {
        Self {
            code: item.code.clone(),
            description: item.description.clone(),
            quantity: quantity.to_string(),
            uom: item.uom.clone(),
            notes: String::new(),
        }
    }
}

/// Editable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Quantity,
    Notes,
}

/// What `add_item` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Incremented,
}

/// Leading integer of a cell, `0` if there is none.
///
/// Accepts leading whitespace and an optional sign, then reads decimal digits
/// up to the first non-digit ("2 boxes" is 2, "abc" is 0).
pub fn parse_quantity(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    if negative { -value } else { value }
}

/// Add `quantity` of `item`: bump the row with the same code or append a row.
pub fn add_item(lines: &mut Vec<OrderLine>, item: &InventoryItem, quantity: i64) -> AddOutcome {
    match lines.iter_mut().find(|line| line.code == item.code) {
        Some(line) => {
            let current = parse_quantity(&line.quantity);
            line.quantity = current.saturating_add(quantity).to_string();
            AddOutcome::Incremented
        }
        None => {
            lines.push(OrderLine::new(item, quantity));
            AddOutcome::Inserted
        }
    }
}

/// Remove the row for `code`; returns whether a row was removed
pub fn remove_line(lines: &mut Vec<OrderLine>, code: &str) -> bool {
    let before = lines.len();
    lines.retain(|line| line.code != code);
    lines.len() != before
}

/// Overwrite an editable cell of the row for `code`
pub fn set_field(lines: &mut [OrderLine], code: &str, field: EditableField, value: String) -> bool {
    match lines.iter_mut().find(|line| line.code == code) {
        Some(line) => {
            match field {
                EditableField::Quantity => line.quantity = value,
                EditableField::Notes => line.notes = value,
            }
            true
        }
        None => false,
    }
}

/// Sum of parsed quantities
pub fn total_quantity(lines: &[OrderLine]) -> i64 {
    lines
        .iter()
        .map(|line| parse_quantity(&line.quantity))
        .fold(0i64, i64::saturating_add)
}

/// Export row: No., Description, Quantity, UoM Name, Remark, Warehouse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow(
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
);

pub fn export_rows(lines: &[OrderLine], warehouse: &str) -> Vec<ExportRow> {
    lines
        .iter()
        .map(|line| {
            ExportRow(
                line.code.clone(),
                line.description.clone(),
                line.quantity.clone(),
                line.uom.clone(),
                line.notes.clone(),
                warehouse.to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str) -> InventoryItem {
        InventoryItem {
            code: code.to_string(),
            description: format!("Item {}", code),
            uom: "EA".to_string(),
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("  12"), 12);
        assert_eq!(parse_quantity("2 boxes"), 2);
        assert_eq!(parse_quantity("-4"), -4);
        assert_eq!(parse_quantity("+7"), 7);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-"), 0);
        assert_eq!(parse_quantity("1.9"), 1);
        assert_eq!(parse_quantity("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_add_new_item_inserts_row() {
        let mut lines = Vec::new();
        assert_eq!(add_item(&mut lines, &item("A"), 1), AddOutcome::Inserted);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].code, "A");
        assert_eq!(lines[0].description, "Item A");
        assert_eq!(lines[0].quantity, "1");
        assert_eq!(lines[0].uom, "EA");
        assert_eq!(lines[0].notes, "");
    }

    #[test]
    fn test_add_existing_item_increments_instead_of_duplicating() {
        let mut lines = Vec::new();
        add_item(&mut lines, &item("A"), 1);
        add_item(&mut lines, &item("B"), 1);
        assert_eq!(add_item(&mut lines, &item("A"), 1), AddOutcome::Incremented);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, "2");
        assert_eq!(lines[1].quantity, "1");
    }

    #[test]
    fn test_increment_after_manual_edit() {
        let mut lines = Vec::new();
        add_item(&mut lines, &item("A"), 1);

        set_field(&mut lines, "A", EditableField::Quantity, "oops".to_string());
        add_item(&mut lines, &item("A"), 1);
        assert_eq!(lines[0].quantity, "1");

        set_field(&mut lines, "A", EditableField::Quantity, "10 pcs".to_string());
        add_item(&mut lines, &item("A"), 5);
        assert_eq!(lines[0].quantity, "15");
    }

    #[test]
    fn test_code_match_is_exact() {
        let mut lines = Vec::new();
        add_item(&mut lines, &item("a1"), 1);
        add_item(&mut lines, &item("A1"), 1);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_remove_and_edit_notes() {
        let mut lines = Vec::new();
        add_item(&mut lines, &item("A"), 1);
        add_item(&mut lines, &item("B"), 1);

        assert!(set_field(&mut lines, "B", EditableField::Notes, "rush".to_string()));
        assert!(!set_field(&mut lines, "Z", EditableField::Notes, "x".to_string()));
        assert_eq!(lines[1].notes, "rush");

        assert!(remove_line(&mut lines, "A"));
        assert!(!remove_line(&mut lines, "A"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].code, "B");
    }

    #[test]
    fn test_total_and_export_rows() {
        let mut lines = Vec::new();
        add_item(&mut lines, &item("A"), 3);
        add_item(&mut lines, &item("B"), 1);
        set_field(&mut lines, "B", EditableField::Notes, "fragile".to_string());

        assert_eq!(total_quantity(&lines), 4);

        let rows = export_rows(&lines, "WH1");
        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            serde_json::json!([
                ["A", "Item A", "3", "EA", "", "WH1"],
                ["B", "Item B", "1", "EA", "fragile", "WH1"]
            ])
        );
    }
}
