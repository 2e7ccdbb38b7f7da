//! In-memory tabular dataset loaded once from CSV.

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::io::Read;

/// A single value of the table.
///
/// Numbers are wrapped in `OrderedFloat` so cells can be compared, hashed
/// and used as grouping keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Numeric value (every non-empty field of the column parsed as f64)
    Number(OrderedFloat<f64>),
    /// Free text value
    Text(String),
    /// Empty field or NA marker
    Missing,
}

impl Cell {
    /// Creates a numeric cell.
    pub fn number(value: f64) -> Self {
        Cell::Number(OrderedFloat(value))
    }

    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Returns the numeric value, if this is a number cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(value.into_inner()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{}", format_number(value.into_inner())),
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Missing => Ok(()),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Number(value) => serializer.serialize_f64(value.into_inner()),
            Cell::Text(text) => serializer.serialize_str(text),
            Cell::Missing => serializer.serialize_none(),
        }
    }
}

/// Formats a number the way it appears in the source file: integral values
/// without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Field values read as missing, matching pandas' default NA markers.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Cell>,
}

impl Column {
    /// Builds a column from raw CSV fields, inferring its kind.
    ///
    /// Empty fields and NA markers become `Missing`; the column is numeric
    /// when every remaining field parses as `f64`.
    fn from_raw(name: String, raw: Vec<String>) -> Self {
        let numeric = raw
            .iter()
            .filter(|field| !is_na(field))
            .all(|field| field.parse::<f64>().is_ok());

        let values = raw
            .into_iter()
            .map(|field| {
                if is_na(&field) {
                    Cell::Missing
                } else if numeric {
                    // Parse checked above
                    field.parse::<f64>().map(Cell::number).unwrap_or(Cell::Missing)
                } else {
                    Cell::Text(field)
                }
            })
            .collect();

        Column {
            name,
            kind: if numeric { ColumnKind::Numeric } else { ColumnKind::Text },
            values,
        }
    }

    /// Distinct non-missing values in first-seen order.
    pub fn distinct_values(&self) -> Vec<&Cell> {
        let mut seen = HashSet::new();
        self.values
            .iter()
            .filter(|cell| !cell.is_missing())
            .filter(|cell| seen.insert(*cell))
            .collect()
    }

    /// Smallest and largest numeric value, or `None` for an empty column.
    pub fn numeric_bounds(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter_map(Cell::as_f64)
            .fold(None, |bounds, value| match bounds {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}

/// Immutable, column-oriented table.
///
/// Constructed once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Parses a CSV document with a header row.
    ///
    /// # Errors
    /// Returns `DatasetError::Empty` when there is no header row and
    /// `DatasetError::Csv` for malformed input (ragged rows, bad UTF-8).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|header| header.to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(DatasetError::Empty);
        }

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut row_count = 0;

        for record in csv_reader.records() {
            let record = record?;
            for (column, field) in raw_columns.iter_mut().zip(record.iter()) {
                column.push(field.to_string());
            }
            row_count += 1;
        }

        let columns = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, raw)| Column::from_raw(name, raw))
            .collect();

        Ok(Dataset { columns, row_count })
    }

    /// Parses an in-memory CSV document.
    pub fn from_csv_str(text: &str) -> Result<Self, DatasetError> {
        Self::from_csv_reader(text.as_bytes())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Result<usize, DatasetError> {
        self.columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        Ok(&self.columns[self.column_index(name)?])
    }

    /// Looks up a column and checks that it is numeric.
    pub fn numeric_column(&self, name: &str) -> Result<&Column, DatasetError> {
        let column = self.column(name)?;
        if column.kind != ColumnKind::Numeric {
            return Err(DatasetError::NotNumeric(name.to_string()));
        }
        Ok(column)
    }

    /// Distinct non-missing values of a column in first-seen order.
    pub fn distinct_values(&self, name: &str) -> Result<Vec<&Cell>, DatasetError> {
        Ok(self.column(name)?.distinct_values())
    }
}

/// Errors raised while parsing or querying a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// CSV could not be parsed
    Csv(String),
    /// Referenced column does not exist
    MissingColumn(String),
    /// Column exists but holds non-numeric values
    NotNumeric(String),
    /// No header row, or no values where at least one is required
    Empty,
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Csv(msg) => write!(f, "CSV error: {}", msg),
            DatasetError::MissingColumn(name) => write!(f, "Missing column: {}", name),
            DatasetError::NotNumeric(name) => write!(f, "Column is not numeric: {}", name),
            DatasetError::Empty => write!(f, "Dataset is empty"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::Csv(err.to_string())
    }
}
