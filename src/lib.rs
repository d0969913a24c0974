//! Foreign language enrollment dashboard.
//!
//! Loads the enrollment table once, and for a selected language computes a
//! ranking of institutions in the target year, a home institution vs. peer
//! average comparison and per-year trend series. The results are rendered as
//! an HTML page with an SVG chart and offered as CSV downloads.

pub mod constants;
pub mod data;
pub mod render;
pub mod report;
pub mod server;
pub mod settings;
