//! Comparison aggregator: home institution against the mean of its peers.

use crate::data::dataset::Dataset;
use crate::data::ranking::snapshot;
use serde::Serialize;

/// Which half of the home/peer split a value belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Peers,
}

impl Side {
    /// Split rule shared by comparison and trend aggregation
    pub fn of(university: &str, home_institution: &str) -> Self {
        if university == home_institution {
            Side::Home
        } else {
            Side::Peers
        }
    }
}

/// Peer average and home value for one language in one year.
///
/// Each side is independently absent; absent is never reported as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Comparison {
    pub peer_average: Option<f64>,
    pub home_value: Option<f64>,
}

impl Comparison {
    /// Sides with no value, peers first
    pub fn missing_sides(&self) -> Vec<Side> {
        let mut sides = Vec::with_capacity(2);
        if self.peer_average.is_none() {
            sides.push(Side::Peers);
        }
        if self.home_value.is_none() {
            sides.push(Side::Home);
        }
        sides
    }

    /// True when neither side has a value
    pub fn is_empty(&self) -> bool {
        self.peer_average.is_none() && self.home_value.is_none()
    }
}

/// Compare the home institution with the rest of the snapshot for
/// `language` in `year`.
///
/// Blank peer totals are skipped when averaging. A home row with a blank
/// total counts as absent.
pub fn compare_with_peers(
    dataset: &Dataset,
    language: &str,
    year: i32,
    home_institution: &str,
) -> Comparison {
    let mut home_value = None;
    let mut peer_totals = Vec::new();

    for record in snapshot(dataset, language, year) {
        match Side::of(&record.university, home_institution) {
            Side::Home => home_value = home_value.or(record.ug_total),
            Side::Peers => peer_totals.extend(record.ug_total),
        }
    }

    Comparison {
        peer_average: mean(&peer_totals),
        home_value,
    }
}

/// Arithmetic mean; `None` for no values
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
