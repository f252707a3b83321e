//! CSV loader for the options dataset.
//!
//! The file is read in full on every call; nothing is cached between calls,
//! so edits to the file are picked up by the next request.

use super::DatasetError;
use super::record::{ColumnType, Dataset, Record};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;


/// Strike price column.
pub const STRIKE_COLUMN: &str = "strike";
/// Days to expiration column.
pub const DAYS_COLUMN: &str = "days_to_expiration";
/// Implied volatility column.
pub const IV_COLUMN: &str = "implied_volatility";

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = [STRIKE_COLUMN, DAYS_COLUMN, IV_COLUMN];

/// Reads the dataset from a configured file path.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole file, preserving row order.
    ///
    /// # Errors
    /// Returns [`DatasetError::Unavailable`] if the file cannot be opened, or
    /// any parse error reported by [`DatasetLoader::from_reader`].
    pub fn load(&self) -> Result<Dataset, DatasetError> {
        let file = File::open(&self.path).map_err(|source| DatasetError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        debug!(
            "Loaded {} rows with columns {:?} from {}",
            dataset.len(),
            dataset.headers(),
            self.path.display()
        );
        Ok(dataset)
    }

    /// Parses delimited text with a header row.
    ///
    /// Duplicate header names get a `.1`, `.2`, ... suffix. Each column gets
    /// one type inferred across all rows. Empty or NaN cells in a required
    /// column load as missing values.
    ///
    /// # Errors
    /// Returns error if the header is missing, a required column is absent,
    /// rows are ragged or not UTF-8, or a required cell is not a finite number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
        let mut reader = csv::Reader::from_reader(reader);

        let headers: Arc<[String]> = dedup_headers(reader.headers()?.iter()).into();
        if headers.is_empty() {
            return Err(DatasetError::MissingHeader);
        }

        let mut required = [0usize; 3];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;
        }
        let [strike_idx, days_idx, iv_idx] = required;

        let rows = reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, _>>()?;
        let column_types: Vec<ColumnType> = (0..headers.len())
            .map(|col| ColumnType::infer(rows.iter().map(|row| row.get(col).unwrap_or(""))))
            .collect();

        let mut records = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let row_no = idx + 1;
            let field = |i: usize| row.get(i).unwrap_or("");

            let strike = parse_float(row_no, STRIKE_COLUMN, field(strike_idx))?;
            let days = parse_days(row_no, field(days_idx))?;
            let iv = parse_float(row_no, IV_COLUMN, field(iv_idx))?;
            let cells = column_types
                .iter()
                .zip(row.iter())
                .map(|(ty, raw)| ty.coerce(raw))
                .collect();

            records.push(Record::new(strike, days, iv, Arc::clone(&headers), cells));
        }

        Ok(Dataset::new(headers, records))
    }
}

/// Renames repeated header names to `name.1`, `name.2`, ...
fn dedup_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for name in raw {
        let base = name.trim();
        let mut candidate = base.to_string();
        let mut suffix = 0;
        while headers.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}.{suffix}");
        }
        headers.push(candidate);
    }
    headers
}

fn invalid(row: usize, column: &str, value: &str) -> DatasetError {
    DatasetError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

/// Empty and NaN cells are missing; infinities and text are rejected.
fn parse_float(row: usize, column: &str, raw: &str) -> Result<Option<f64>, DatasetError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_nan() => Ok(None),
        Ok(f) if f.is_finite() => Ok(Some(f)),
        _ => Err(invalid(row, column, raw)),
    }
}

/// Integers, or floats with no fractional part (`"30.0"`).
fn parse_days(row: usize, raw: &str) -> Result<Option<i64>, DatasetError> {
    if let Ok(days) = raw.trim().parse::<i64>() {
        return Ok(Some(days));
    }
    match parse_float(row, DAYS_COLUMN, raw)? {
        None => Ok(None),
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
        Some(_) => Err(invalid(row, DAYS_COLUMN, raw)),
    }
}
