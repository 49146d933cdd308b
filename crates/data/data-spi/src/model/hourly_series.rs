//! Hourly time series model.
//!
//! Providers return hourly data as a time axis plus named numeric columns
//! aligned to it. Individual cells may be null (sensors offline, gaps in the
//! archive), so columns hold `Option<f64>` and [`HourlySeries::records`]
//! skips any hour with a missing value.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// A set of named hourly columns sharing one time axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    time: Vec<DateTime<Utc>>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

/// One fully populated hour from a series: a timestamp plus a value for
/// every column.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    /// The hour this record describes
    pub timestamp: DateTime<Utc>,
    /// Column name to value
    pub values: BTreeMap<String, f64>,
}

impl HourlyRecord {
    /// Look up a column value by name.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }
}

impl HourlySeries {
    /// Create an empty series (the "no data" result).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a series from a time axis and named columns.
    ///
    /// Every column must have exactly one value per timestamp.
    pub fn new(
        time: Vec<DateTime<Utc>>,
        columns: BTreeMap<String, Vec<Option<f64>>>,
    ) -> Result<Self> {
        for (name, values) in &columns {
            if values.len() != time.len() {
                return Err(DataError::MalformedSeries(format!(
                    "column '{}' has {} values for {} timestamps",
                    name,
                    values.len(),
                    time.len()
                )));
            }
        }
        Ok(Self { time, columns })
    }

    /// Number of hours in the series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Names of the columns in this series, in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// The raw values of one column, if present.
    pub fn column(&self, field: &str) -> Option<&[Option<f64>]> {
        self.columns.get(field).map(Vec::as_slice)
    }

    /// Materialize the fully populated hours, in time-axis order.
    ///
    /// Hours where any column is null are dropped.
    pub fn records(&self) -> Vec<HourlyRecord> {
        let mut records = Vec::with_capacity(self.time.len());
        'hours: for (i, &timestamp) in self.time.iter().enumerate() {
            let mut values = BTreeMap::new();
            for (name, column) in &self.columns {
                match column[i] {
                    Some(v) => {
                        values.insert(name.clone(), v);
                    }
                    None => continue 'hours,
                }
            }
            records.push(HourlyRecord { timestamp, values });
        }
        records
    }

    /// Append another series with the same column set.
    ///
    /// Used to stitch backfill batches together; fetch order is preserved.
    pub fn extend(&mut self, other: HourlySeries) -> Result<()> {
        if self.is_empty() {
            *self = other;
            return Ok(());
        }
        if self.field_names() != other.field_names() {
            return Err(DataError::MalformedSeries(format!(
                "cannot extend series with fields {:?} using fields {:?}",
                self.field_names(),
                other.field_names()
            )));
        }
        self.time.extend(other.time);
        for (name, values) in other.columns {
            // unwrap is safe: field sets were just compared
            self.columns.get_mut(&name).unwrap().extend(values);
        }
        Ok(())
    }
}
