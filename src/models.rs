//! Frontend Models
//!
//! Data structures matching the inventory endpoints' JSON.

use serde::{Deserialize, Deserializer};

/// Inventory row as returned by `/search` (other columns are ignored)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Item Code", deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(rename = "Item Description", deserialize_with = "lenient_string", default)]
    pub description: String,
    #[serde(rename = "Inventory UoM", deserialize_with = "lenient_string", default)]
    pub uom: String,
}

/// Inventory row plus a quantity, as returned by `/fetch`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BomEntry {
    #[serde(flatten)]
    pub item: InventoryItem,
    #[serde(rename = "Quantity", deserialize_with = "lenient_quantity")]
    pub quantity: i64,
}

/// Reply from `/fetch`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BomReply {
    Found {
        parent: BomEntry,
        #[serde(default)]
        children: Vec<BomEntry>,
    },
    Missing { error: String },
}

/// Reply from `/associate` and `/export`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ServerReply {
    Success { success: String },
    Failure { error: String },
}

impl ServerReply {
    pub fn into_result(self) -> Result<String, String> {
        match self {
            ServerReply::Success { success } => Ok(success),
            ServerReply::Failure { error } => Err(error),
        }
    }
}

/// Spreadsheet cells may come back as numbers or null; render them as text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Cell>::deserialize(deserializer)? {
        Some(Cell::Text(s)) => s,
        Some(Cell::Int(n)) => n.to_string(),
        Some(Cell::Float(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(Cell::Float(f)) => f.to_string(),
        Some(Cell::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

/// JS numbers arrive as floats once buffered through `flatten`.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Qty {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Qty::deserialize(deserializer)? {
        Qty::Int(n) => Ok(n),
        Qty::Float(f) if f.fract() == 0.0 => Ok(f as i64),
        Qty::Float(f) => Err(serde::de::Error::custom(format!("fractional quantity {}", f))),
        Qty::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("bad quantity {:?}", s))),
    }
}
