//! CSV export of the ranking table and of the full dataset.

use crate::constants::{
    COL_RANK, COL_UG_TOTAL, COL_UNIVERSITY, CSV_CONTENT_TYPE, FULL_EXPORT_FILE,
    RANKING_EXPORT_SUFFIX,
};
use crate::data::dataset::Dataset;
use crate::data::error::{DataError, DataResult};
use crate::data::ranking::RankingRow;
use polars::prelude::*;

/// A downloadable CSV payload
#[derive(Clone, Debug, PartialEq)]
pub struct CsvDownload {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Ranking table as CSV: header row, columns `RANK,UNIV,UG TOTAL`, no index
/// column. Blank totals are written as empty fields.
pub fn ranking_csv(rows: &[RankingRow]) -> DataResult<String> {
    let ranks: Vec<u32> = rows.iter().map(|r| r.rank as u32).collect();
    let universities: Vec<&str> = rows.iter().map(|r| r.university.as_str()).collect();
    let totals: Vec<Option<f64>> = rows.iter().map(|r| r.ug_total).collect();

    let mut frame = df!(
        COL_RANK => ranks,
        COL_UNIVERSITY => universities,
        COL_UG_TOTAL => totals
    )?;
    write_csv(&mut frame)
}

/// The whole source table as CSV, every column, file order
pub fn dataset_csv(dataset: &Dataset) -> DataResult<String> {
    let mut frame = dataset.frame().clone();
    write_csv(&mut frame)
}

/// Download of the ranking for `language`
pub fn ranking_download(language: &str, rows: &[RankingRow]) -> DataResult<CsvDownload> {
    Ok(CsvDownload {
        file_name: ranking_file_name(language),
        content_type: CSV_CONTENT_TYPE,
        body: ranking_csv(rows)?,
    })
}

/// Download of the full dataset, independent of the selection
pub fn dataset_download(dataset: &Dataset) -> DataResult<CsvDownload> {
    Ok(CsvDownload {
        file_name: FULL_EXPORT_FILE.to_string(),
        content_type: CSV_CONTENT_TYPE,
        body: dataset_csv(dataset)?,
    })
}

/// `{language}_rankings.csv`, with path separators and quotes replaced
pub fn ranking_file_name(language: &str) -> String {
    let stem: String = language
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' | '\r' | '\n' => '_',
            c => c,
        })
        .collect();
    format!("{stem}{RANKING_EXPORT_SUFFIX}")
}

fn write_csv(frame: &mut DataFrame) -> DataResult<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_separator(b',')
        .finish(frame)?;
    String::from_utf8(buffer)
        .map_err(|e| DataError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
