//! Ranking engine: institutions for one language in one survey year.

use crate::data::dataset::{Dataset, EnrollmentRecord};
use serde::Serialize;
use std::cmp::Ordering;

/// One ranked institution
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankingRow {
    /// 1-based position in the sorted order
    pub rank: usize,
    pub university: String,
    pub ug_total: Option<f64>,
}

/// Records matching `language` in `year`, in file order
pub fn snapshot<'a>(
    dataset: &'a Dataset,
    language: &'a str,
    year: i32,
) -> impl Iterator<Item = &'a EnrollmentRecord> + 'a {
    dataset
        .for_language(language)
        .filter(move |r| r.survey_year == year)
}

/// Rank institutions by `UG TOTAL`, largest first.
///
/// The sort is stable, so tied totals keep file order. Blank totals sort
/// after every present value. An unknown language yields an empty ranking.
pub fn rank_institutions(dataset: &Dataset, language: &str, year: i32) -> Vec<RankingRow> {
    let mut rows: Vec<&EnrollmentRecord> = snapshot(dataset, language, year).collect();
    rows.sort_by(|a, b| descending(a.ug_total, b.ug_total));

    rows.into_iter()
        .enumerate()
        .map(|(i, record)| RankingRow {
            rank: i + 1,
            university: record.university.clone(),
            ug_total: record.ug_total,
        })
        .collect()
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
