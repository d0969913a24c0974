//! Render model for one selection.
//!
//! [`build_report`] is the whole recompute pass run on every selection
//! change: a pure function from the dataset and the chosen language to the
//! ranking, comparison, trend series and the warnings the page must show.
//! It has no knowledge of HTML or HTTP.

use crate::data::{
    Comparison, Dataset, RankingRow, Side, TrendSeries, compare_with_peers, enrollment_trends,
    rank_institutions,
};
use crate::settings::{DashboardSettings, Labels};
use serde::Serialize;

/// The language chosen in the dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub language: String,
}

impl Selection {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// The requested language, or the first language of the dataset when
    /// nothing was requested. `None` only for an empty dataset.
    ///
    /// A requested language that the dataset does not contain is kept as
    /// is; the report then carries no-data warnings.
    pub fn resolve(dataset: &Dataset, requested: Option<&str>) -> Option<Self> {
        match requested.map(str::trim).filter(|l| !l.is_empty()) {
            Some(language) => {
                if !dataset.has_language(language) {
                    tracing::debug!("Requested language {} is not in the dataset", language);
                }
                Some(Self::new(language))
            }
            None => dataset.languages().first().map(|l| Self::new(*l)),
        }
    }
}

/// Page section a warning is shown in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Ranking,
    Comparison,
    Trend,
}

/// A non-fatal data condition surfaced to the user
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The language has no rows for this section at all
    NoDataForSelection { section: Section, language: String },
    /// One side of the home/peer split has no rows; the other side is shown
    MissingSide {
        section: Section,
        side: Side,
        language: String,
    },
}

impl Warning {
    pub fn section(&self) -> Section {
        match self {
            Warning::NoDataForSelection { section, .. } | Warning::MissingSide { section, .. } => {
                *section
            }
        }
    }

    /// User-facing text
    pub fn message(&self, labels: &Labels, target_year: i32) -> String {
        match self {
            Warning::NoDataForSelection {
                section: Section::Ranking,
                language,
            } => format!("No {target_year} rankings available for {language}."),
            Warning::NoDataForSelection {
                section: Section::Comparison,
                language,
            } => format!("No enrollment data available for {language}."),
            Warning::NoDataForSelection {
                section: Section::Trend,
                language,
            } => format!("No data available for {language}. Please select another language."),
            Warning::MissingSide { side, language, .. } => {
                let who = match side {
                    Side::Home => &labels.home_short,
                    Side::Peers => &labels.peer_name,
                };
                format!("No enrollment data available for {who} in {language}.")
            }
        }
    }
}

/// Everything the page shows for one selection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardReport {
    pub language: String,
    pub target_year: i32,
    pub home_institution: String,
    pub ranking: Vec<RankingRow>,
    pub comparison: Comparison,
    pub trend: TrendSeries,
    pub warnings: Vec<Warning>,
}

impl DashboardReport {
    pub fn warnings_for(&self, section: Section) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.section() == section)
    }
}

/// Recompute the render model for `selection`.
pub fn build_report(
    dataset: &Dataset,
    selection: &Selection,
    settings: &DashboardSettings,
) -> DashboardReport {
    let language = selection.language.as_str();
    let year = settings.target_year;
    let home = settings.home_institution.as_str();

    let ranking = rank_institutions(dataset, language, year);
    let comparison = compare_with_peers(dataset, language, year, home);
    let trend = enrollment_trends(dataset, language, home);

    let mut warnings = Vec::new();

    if ranking.is_empty() {
        warnings.push(Warning::NoDataForSelection {
            section: Section::Ranking,
            language: language.to_string(),
        });
    }

    // Both sides missing collapses into one warning
    if comparison.is_empty() {
        warnings.push(Warning::NoDataForSelection {
            section: Section::Comparison,
            language: language.to_string(),
        });
    } else {
        warnings.extend(comparison.missing_sides().into_iter().map(|side| {
            Warning::MissingSide {
                section: Section::Comparison,
                side,
                language: language.to_string(),
            }
        }));
    }

    if trend.is_empty() {
        warnings.push(Warning::NoDataForSelection {
            section: Section::Trend,
            language: language.to_string(),
        });
    } else {
        warnings.extend(trend.missing_sides().into_iter().map(|side| {
            Warning::MissingSide {
                section: Section::Trend,
                side,
                language: language.to_string(),
            }
        }));
    }

    for warning in &warnings {
        tracing::debug!(?warning, "Selection warning");
    }

    DashboardReport {
        language: language.to_string(),
        target_year: year,
        home_institution: home.to_string(),
        ranking,
        comparison,
        trend,
        warnings,
    }
}
