//! Bill of Materials
//!
//! Parent/child associations: parsing the `CODE:QTY` entries the association
//! form collects, and flattening a fetched BOM into table additions.

use crate::models::{BomEntry, InventoryItem};

/// One `CODE:QTY` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationEntry {
    pub code: String,
    pub quantity: u32,
}

impl AssociationEntry {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let (code, qty) = raw
            .split_once(':')
            .ok_or_else(|| format!("'{}' is not CODE:QTY", raw.trim()))?;
        Self::new(code, qty)
    }

    pub fn new(code: &str, quantity: &str) -> Result<Self, String> {
        let code = code.trim();
        if code.is_empty() {
            return Err("Item code is empty".to_string());
        }
        if code.contains(':') {
            return Err(format!("Item code '{}' must not contain ':'", code));
        }
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| format!("Quantity for '{}' must be a positive whole number", code))?;
        Ok(Self { code: code.to_string(), quantity })
    }

    pub fn to_wire(&self) -> String {
        format!("{}:{}", self.code, self.quantity)
    }
}

/// Parent with its children, ready for `/associate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDraft {
    pub parent: AssociationEntry,
    pub children: Vec<AssociationEntry>,
}

impl AssociationDraft {
    /// Build from the form fields. Children are `CODE:QTY` entries separated
    /// by commas, semicolons or newlines.
    pub fn from_form(parent_code: &str, parent_qty: &str, children: &str) -> Result<Self, String> {
        let parent = AssociationEntry::new(parent_code, parent_qty)?;
        let children = children
            .split(|c| c == ',' || c == ';' || c == '\n')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(AssociationEntry::parse)
            .collect::<Result<Vec<_>, _>>()?;

        if children.iter().any(|c| c.code == parent.code) {
            return Err(format!("'{}' cannot be its own child", parent.code));
        }
        Ok(Self { parent, children })
    }

    /// Parent first, then children
    pub fn to_items(&self) -> Vec<String> {
        std::iter::once(&self.parent)
            .chain(self.children.iter())
            .map(AssociationEntry::to_wire)
            .collect()
    }
}

/// Items to add for a fetched BOM, parent first
pub fn bom_additions(parent: &BomEntry, children: &[BomEntry]) -> Vec<(InventoryItem, i64)> {
    std::iter::once(parent)
        .chain(children.iter())
        .map(|entry| (entry.item.clone(), entry.quantity))
        .collect()
}
