//! Row-level data model for the options dataset.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// A single cell of the source file, coerced to its column's type.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell.
    Null,
    /// Integral number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// Anything else, kept verbatim.
    Text(String),
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Type shared by every cell of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every non-empty cell is an integer and no cell is empty.
    Integer,
    /// Every non-empty cell is a number.
    Float,
    /// Every non-empty cell is a boolean literal.
    Bool,
    /// Anything else.
    Text,
}

impl ColumnType {
    /// Infers the narrowest type fitting every cell: integer, float, bool, then text.
    ///
    /// An integer column with empty cells widens to float, since an empty
    /// cell has no integer representation.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let (mut integer, mut float, mut boolean) = (true, true, true);
        let mut any_empty = false;
        let mut any_value = false;

        for raw in cells {
            let s = raw.trim();
            if s.is_empty() {
                any_empty = true;
                continue;
            }
            any_value = true;
            integer &= s.parse::<i64>().is_ok();
            float &= s.parse::<f64>().is_ok();
            boolean &= parse_bool(s).is_some();
        }

        if !any_value {
            Self::Float
        } else if integer && !any_empty {
            Self::Integer
        } else if float {
            Self::Float
        } else if boolean {
            Self::Bool
        } else {
            Self::Text
        }
    }

    /// Converts one raw cell of a column of this type.
    #[must_use]
    pub fn coerce(self, raw: &str) -> CellValue {
        let s = raw.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        let parsed = match self {
            Self::Integer => s.parse().ok().map(CellValue::Integer),
            Self::Float => s.parse().ok().map(CellValue::Float),
            Self::Bool => parse_bool(s).map(CellValue::Bool),
            Self::Text => None,
        };
        parsed.unwrap_or_else(|| CellValue::Text(raw.to_string()))
    }
}

/// One options-contract snapshot.
///
/// The three typed fields drive filtering and aggregation; `None` marks a
/// missing (empty or NaN) cell, which no range matches and which bounds
/// skip. `cells` holds every column of the row in header order and is what
/// gets serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Strike price.
    pub strike: Option<f64>,
    /// Days remaining until expiration.
    pub days_to_expiration: Option<i64>,
    /// Implied volatility.
    pub implied_volatility: Option<f64>,
    headers: Arc<[String]>,
    cells: Vec<CellValue>,
}

impl Record {
    /// Builds a record from its typed fields and the full row.
    ///
    /// `cells` must be aligned with `headers`.
    #[must_use]
    pub fn new(
        strike: Option<f64>,
        days_to_expiration: Option<i64>,
        implied_volatility: Option<f64>,
        headers: Arc<[String]>,
        cells: Vec<CellValue>,
    ) -> Self {
        debug_assert_eq!(headers.len(), cells.len());
        Self {
            strike,
            days_to_expiration,
            implied_volatility,
            headers,
            cells,
        }
    }

    /// Iterates over `(column, value)` pairs in file order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in self.columns() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Ordered rows read from the source file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Arc<[String]>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from a header and its rows.
    #[must_use]
    pub fn new(headers: Arc<[String]>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// Column names in file order, duplicates already renamed.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in file order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
