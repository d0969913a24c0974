//! Enrollment dataset with polars backend.
//!
//! The dataset is read once per process from a static CSV file and shared as
//! an immutable [`Arc<Dataset>`]. Aggregations run over the typed
//! [`EnrollmentRecord`] rows; the polars frame is kept for full-dataset export
//! so every column of the source file survives the download.
//!
//! ## Missing values
//!
//! `UG TOTAL` is nullable. A blank cell becomes `None`, never `0.0`, and a
//! (university, language, year) combination may be missing from the file
//! entirely.

use crate::constants::{COL_LANGUAGE, COL_SURVEY_YEAR, COL_UG_TOTAL, COL_UNIVERSITY};
use crate::data::error::{DataError, DataResult};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use polars::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Process-wide cache keyed by canonical source path.
///
/// The lock is held across the load so concurrent first accesses wait for a
/// single read of the file.
static DATASET_CACHE: Lazy<Mutex<HashMap<PathBuf, Arc<Dataset>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// One row of the source file
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrollmentRecord {
    pub language: String,
    pub university: String,
    pub survey_year: i32,
    /// Undergraduate total; `None` when the cell is blank
    pub ug_total: Option<f64>,
}

impl EnrollmentRecord {
    pub fn new(
        language: impl Into<String>,
        university: impl Into<String>,
        survey_year: i32,
        ug_total: Option<f64>,
    ) -> Self {
        Self {
            language: language.into(),
            university: university.into(),
            survey_year,
            ug_total,
        }
    }
}

/// Immutable in-memory enrollment table
pub struct Dataset {
    /// Human-readable name (file stem)
    pub name: String,
    records: Vec<EnrollmentRecord>,
    /// Source frame, all columns, file row order
    frame: DataFrame,
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("name", &self.name)
            .field("rows", &self.records.len())
            .finish()
    }
}

impl Dataset {
    /// Read and validate a CSV file. Does not consult the cache.
    pub fn from_csv(path: &Path) -> DataResult<Self> {
        let start = std::time::Instant::now();

        if !path.exists() {
            return Err(DataError::NotFound(path.to_path_buf()));
        }

        // Full-file schema inference: a late float in an integer column must
        // not turn into a parse failure.
        let frame = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_separator(b',')
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        let records = records_from_frame(&frame)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Data")
            .to_string();

        tracing::debug!(
            "Loaded dataset {} with {} rows x {} cols in {:?}",
            path.display(),
            records.len(),
            frame.width(),
            start.elapsed()
        );

        Ok(Self {
            name,
            records,
            frame,
        })
    }

    /// Build a dataset from typed records (same validation as a file load)
    pub fn from_records(records: Vec<EnrollmentRecord>) -> DataResult<Self> {
        check_unique(&records)?;
        let frame = frame_from_records(&records)?;
        Ok(Self {
            name: "Data".to_string(),
            records,
            frame,
        })
    }

    pub fn records(&self) -> &[EnrollmentRecord] {
        &self.records
    }

    /// The source frame, used for full-dataset export
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct languages in order of first appearance
    pub fn languages(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.language.as_str())
            .filter(|language| seen.insert(*language))
            .collect()
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.records.iter().any(|r| r.language == language)
    }

    /// Records for one language, in file order
    pub fn for_language<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a EnrollmentRecord> + 'a {
        self.records.iter().filter(move |r| r.language == language)
    }
}

/// Load the dataset at `path`, reusing the process-wide copy when the same
/// source has already been read.
pub fn load_dataset(path: impl AsRef<Path>) -> DataResult<Arc<Dataset>> {
    let path = path.as_ref();
    let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let mut cache = DATASET_CACHE.lock();
    if let Some(dataset) = cache.get(&key) {
        tracing::trace!("Dataset cache hit for {}", key.display());
        return Ok(Arc::clone(dataset));
    }

    let dataset = Arc::new(Dataset::from_csv(path)?);
    cache.insert(key, Arc::clone(&dataset));
    Ok(dataset)
}

fn required_column<'a>(frame: &'a DataFrame, name: &'static str) -> DataResult<&'a Column> {
    frame.column(name).map_err(|_| DataError::MissingColumn(name))
}

fn records_from_frame(frame: &DataFrame) -> DataResult<Vec<EnrollmentRecord>> {
    let languages = required_column(frame, COL_LANGUAGE)?;
    let universities = required_column(frame, COL_UNIVERSITY)?;
    let years = required_column(frame, COL_SURVEY_YEAR)?;
    let totals = required_column(frame, COL_UG_TOTAL)?;

    let mut records = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let invalid = |reason: String| DataError::InvalidRow {
            row: row + 1,
            reason,
        };

        let language = cell_text(languages, row)
            .ok_or_else(|| invalid(format!("missing {COL_LANGUAGE}")))?;
        let university = cell_text(universities, row)
            .ok_or_else(|| invalid(format!("missing {COL_UNIVERSITY}")))?;
        let survey_year = cell_year(years, row).map_err(&invalid)?;
        let ug_total = cell_number(totals, row).map_err(&invalid)?;

        records.push(EnrollmentRecord {
            language,
            university,
            survey_year,
            ug_total,
        });
    }

    check_unique(&records)?;
    Ok(records)
}

fn check_unique(records: &[EnrollmentRecord]) -> DataResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let key = (
            record.university.as_str(),
            record.language.as_str(),
            record.survey_year,
        );
        if !seen.insert(key) {
            return Err(DataError::DuplicateRecord {
                university: record.university.clone(),
                language: record.language.clone(),
                year: record.survey_year,
            });
        }
    }
    Ok(())
}

fn frame_from_records(records: &[EnrollmentRecord]) -> DataResult<DataFrame> {
    let languages: Vec<&str> = records.iter().map(|r| r.language.as_str()).collect();
    let universities: Vec<&str> = records.iter().map(|r| r.university.as_str()).collect();
    let years: Vec<i32> = records.iter().map(|r| r.survey_year).collect();
    let totals: Vec<Option<f64>> = records.iter().map(|r| r.ug_total).collect();

    let frame = df!(
        COL_LANGUAGE => languages,
        COL_UNIVERSITY => universities,
        COL_SURVEY_YEAR => years,
        COL_UG_TOTAL => totals
    )?;
    Ok(frame)
}

/// Category cell as text; `None` for null or blank
pub(crate) fn cell_text(column: &Column, row: usize) -> Option<String> {
    let text = match column.get(row).ok()? {
        AnyValue::Null => return None,
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => format!("{}", other),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cell_year(column: &Column, row: usize) -> Result<i32, String> {
    let value = column.get(row).map_err(|e| e.to_string())?;
    let year = match value {
        AnyValue::Null => return Err(format!("missing {COL_SURVEY_YEAR}")),
        AnyValue::Int8(v) => v as i64,
        AnyValue::Int16(v) => v as i64,
        AnyValue::Int32(v) => v as i64,
        AnyValue::Int64(v) => v,
        AnyValue::UInt8(v) => v as i64,
        AnyValue::UInt16(v) => v as i64,
        AnyValue::UInt32(v) => v as i64,
        AnyValue::UInt64(v) => v as i64,
        AnyValue::Float32(v) if v.fract() == 0.0 => v as i64,
        AnyValue::Float64(v) if v.fract() == 0.0 => v as i64,
        AnyValue::String(s) => parse_year(s)?,
        AnyValue::StringOwned(s) => parse_year(s.as_str())?,
        other => return Err(format!("{COL_SURVEY_YEAR} is not an integer: {:?}", other)),
    };
    i32::try_from(year).map_err(|_| format!("{COL_SURVEY_YEAR} out of range: {year}"))
}

fn parse_year(s: &str) -> Result<i64, String> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| format!("{COL_SURVEY_YEAR} is not an integer: {s:?}"))
}

/// Numeric cell; blank and NaN are absent values, not zero
pub(crate) fn cell_number(column: &Column, row: usize) -> Result<Option<f64>, String> {
    let value = column.get(row).map_err(|e| e.to_string())?;
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(v as f64),
        AnyValue::Int16(v) => Some(v as f64),
        AnyValue::Int32(v) => Some(v as f64),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(v as f64),
        AnyValue::UInt16(v) => Some(v as f64),
        AnyValue::UInt32(v) => Some(v as f64),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(v as f64),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_number(s)?,
        AnyValue::StringOwned(s) => parse_number(s.as_str())?,
        other => return Err(format!("{COL_UG_TOTAL} is not numeric: {:?}", other)),
    };
    Ok(number.filter(|v| !v.is_nan()))
}

fn parse_number(s: &str) -> Result<Option<f64>, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    // Thousands separators appear in some survey exports
    trimmed
        .replace(',', "")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("{COL_UG_TOTAL} is not numeric: {s:?}"))
}
