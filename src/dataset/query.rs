//! Range filtering and column bounds over a [`Dataset`].

use super::DatasetError;
use super::record::{Dataset, Record};


/// Inclusive `[min, max]` range over one column.
///
/// An inverted range (`min > max`) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange<T> {
    /// Lower bound, inclusive.
    pub min: T,
    /// Upper bound, inclusive.
    pub max: T,
}

impl<T: PartialOrd> ValueRange<T> {
    /// Creates a range.
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min <= value <= max`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}

/// Caller-supplied ranges for the three numeric columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    /// Strike price range.
    pub strike: ValueRange<f64>,
    /// Days to expiration range.
    pub days: ValueRange<i64>,
    /// Implied volatility range.
    pub iv: ValueRange<f64>,
}

impl RangeFilter {
    /// Returns `true` if the record falls within all three ranges.
    ///
    /// A record missing any of the three values never matches.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        within(&self.strike, record.strike)
            && within(&self.days, record.days_to_expiration)
            && within(&self.iv, record.implied_volatility)
    }
}

fn within<T: PartialOrd>(range: &ValueRange<T>, value: Option<T>) -> bool {
    value.is_some_and(|v| range.contains(&v))
}

/// Min/max of each numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetBounds {
    /// Strike price bounds.
    pub strike: ValueRange<f64>,
    /// Days to expiration bounds.
    pub days: ValueRange<i64>,
    /// Implied volatility bounds.
    pub iv: ValueRange<f64>,
}

/// Min/max over the present values of one column, `None` if there are none.
fn column_range<T, I>(values: I) -> Option<ValueRange<T>>
where
    T: PartialOrd + Copy,
    I: Iterator<Item = Option<T>>,
{
    values.flatten().fold(None, |acc, v| match acc {
        None => Some(ValueRange::new(v, v)),
        Some(range) => Some(ValueRange::new(
            if v < range.min { v } else { range.min },
            if v > range.max { v } else { range.max },
        )),
    })
}

impl Dataset {
    /// Returns the rows matching `filter`, in file order.
    #[must_use]
    pub fn filter(&self, filter: &RangeFilter) -> Vec<Record> {
        self.records()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Computes per-column bounds, skipping missing values.
    ///
    /// # Errors
    /// Returns [`DatasetError::Empty`] if any of the three columns has no
    /// values, which includes a dataset with no rows.
    pub fn bounds(&self) -> Result<DatasetBounds, DatasetError> {
        let records = self.records();
        let strike = column_range(records.iter().map(|r| r.strike));
        let days = column_range(records.iter().map(|r| r.days_to_expiration));
        let iv = column_range(records.iter().map(|r| r.implied_volatility));

        match (strike, days, iv) {
            (Some(strike), Some(days), Some(iv)) => Ok(DatasetBounds { strike, days, iv }),
            _ => Err(DatasetError::Empty),
        }
    }
}
