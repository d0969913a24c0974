//! Application-wide constants.
//!
//! Centralizes the fixed names and values of the enrollment dataset so the
//! loader, the aggregators and the presentation layer agree on them.

// ============================================================================
// Dataset
// ============================================================================

/// Input file, resolved relative to the working directory
pub const DATASET_FILE: &str = "institutions.csv";

/// Language column (category)
pub const COL_LANGUAGE: &str = "LANGUAGE";

/// University column (category)
pub const COL_UNIVERSITY: &str = "UNIV";

/// Survey year column (integer)
pub const COL_SURVEY_YEAR: &str = "SRVY_YEAR";

/// Undergraduate total enrollment column (numeric, nullable)
pub const COL_UG_TOTAL: &str = "UG TOTAL";

/// Rank column added to ranking tables and exports
pub const COL_RANK: &str = "RANK";

// ============================================================================
// Comparison
// ============================================================================

/// The distinguished university tracked against its peers
pub const HOME_INSTITUTION: &str = "U OF OKLAHOMA";

/// Most recent survey year, used for ranking and comparison snapshots
pub const TARGET_YEAR: i32 = 2021;

// ============================================================================
// Presentation
// ============================================================================

/// Home institution series color (crimson)
pub const HOME_COLOR: (u8, u8, u8) = (0x84, 0x16, 0x17);

/// Peer average series color (blue)
pub const PEER_COLOR: (u8, u8, u8) = (0x00, 0x70, 0xb9);

/// Trend chart size in pixels
pub const CHART_SIZE: (u32, u32) = (1000, 600);

/// Marker half-size in pixels
pub const MARKER_SIZE: i32 = 4;

// ============================================================================
// Export & Server
// ============================================================================

/// File name offered for the full dataset download
pub const FULL_EXPORT_FILE: &str = "institutions.csv";

/// Suffix of the per-language ranking download
pub const RANKING_EXPORT_SUFFIX: &str = "_rankings.csv";

/// MIME type of both downloads
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Default listen address for the dashboard server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";

/// Optional settings file, resolved relative to the working directory
pub const SETTINGS_FILE: &str = "langboard.json";

/// Dashboard page route
pub const PAGE_PATH: &str = "/";

/// Ranking download route, takes `?language=`
pub const RANKING_DOWNLOAD_PATH: &str = "/download/rankings.csv";

/// Full dataset download route
pub const DATASET_DOWNLOAD_PATH: &str = "/download/institutions.csv";
