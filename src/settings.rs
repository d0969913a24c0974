//! Dashboard settings.
//!
//! Settings are optional: without a settings file every field takes the
//! default below, which reproduces the stock OU vs. public AAU dashboard.
//! A partial file overrides only the fields it names.

use crate::constants::{DATASET_FILE, DEFAULT_BIND_ADDRESS, HOME_INSTITUTION, TARGET_YEAR};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display strings used in headings, warnings, tables and the chart legend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Page title
    pub title: String,
    /// Short name of the home institution ("OU")
    pub home_short: String,
    /// Full name of the home institution, used in the chart legend
    pub home_name: String,
    /// Peer set as written in sentences
    pub peer_name: String,
    /// Peer set as a chart series name
    pub peer_series: String,
    /// Comparison table label for the peer average
    pub peer_average: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "OU v. Public AAU Foreign Language Enrollment Dashboard".to_string(),
            home_short: "OU".to_string(),
            home_name: "University of Oklahoma".to_string(),
            peer_name: "public AAU institutions".to_string(),
            peer_series: "Public AAU Institutions".to_string(),
            peer_average: "Average at Public AAU's".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// CSV input, relative to the working directory
    pub data_path: PathBuf,
    /// `UNIV` value of the distinguished institution
    pub home_institution: String,
    /// Survey year used for ranking and comparison
    pub target_year: i32,
    /// Listen address of the HTTP server
    pub bind_address: String,
    /// Launch the default browser once the server is up
    pub open_browser: bool,
    pub labels: Labels,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATASET_FILE),
            home_institution: HOME_INSTITUTION.to_string(),
            target_year: TARGET_YEAR,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            open_browser: false,
            labels: Labels::default(),
        }
    }
}

impl DashboardSettings {
    /// Load settings from `path`; a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// URL the server is reachable at
    pub fn dashboard_url(&self) -> String {
        format!("http://{}/", self.bind_address)
    }
}
