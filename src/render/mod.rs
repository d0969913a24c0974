//! Presentation layer: HTML page, tables and the trend chart.
//!
//! Everything here is a view over a [`crate::report::DashboardReport`]; no
//! aggregation happens in this module.

mod chart;
mod page;
mod table;

pub use chart::*;
pub use page::*;
pub use table::*;

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `#rrggbb` for an RGB triple
pub fn hex_color((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
