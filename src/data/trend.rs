//! Trend aggregator: mean enrollment per survey year, home vs. peers.
//!
//! Both series cover every year in the file, not just the ranking snapshot.
//! They are independent: a year present in one series may be missing from
//! the other, and no alignment or interpolation is done.

use crate::data::comparison::{Side, mean};
use crate::data::dataset::Dataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean `UG TOTAL` for one survey year
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub mean: f64,
}

/// Home and peer series for one language, each ascending by year
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrendSeries {
    pub home: Vec<TrendPoint>,
    pub peers: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn side(&self, side: Side) -> &[TrendPoint] {
        match side {
            Side::Home => &self.home,
            Side::Peers => &self.peers,
        }
    }

    /// Sides with no points, home first
    pub fn missing_sides(&self) -> Vec<Side> {
        [Side::Home, Side::Peers]
            .into_iter()
            .filter(|side| self.side(*side).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.peers.is_empty()
    }

    /// Years used for x-axis tick labels: the home series' years when it
    /// has any, otherwise the peer series' years.
    pub fn tick_years(&self) -> Vec<i32> {
        let source = if self.home.is_empty() {
            &self.peers
        } else {
            &self.home
        };
        source.iter().map(|p| p.year).collect()
    }
}

/// Group `language` rows by side and survey year and average each group.
///
/// Years whose totals are all blank have no mean and are left out.
pub fn enrollment_trends(dataset: &Dataset, language: &str, home_institution: &str) -> TrendSeries {
    let mut home: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    let mut peers: BTreeMap<i32, Vec<f64>> = BTreeMap::new();

    for record in dataset.for_language(language) {
        let groups = match Side::of(&record.university, home_institution) {
            Side::Home => &mut home,
            Side::Peers => &mut peers,
        };
        let totals = groups.entry(record.survey_year).or_default();
        totals.extend(record.ug_total);
    }

    TrendSeries {
        home: yearly_means(home),
        peers: yearly_means(peers),
    }
}

/// BTreeMap iteration gives ascending, de-duplicated years
fn yearly_means(groups: BTreeMap<i32, Vec<f64>>) -> Vec<TrendPoint> {
    groups
        .into_iter()
        .filter_map(|(year, totals)| mean(&totals).map(|mean| TrendPoint { year, mean }))
        .collect()
}
