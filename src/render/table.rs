//! HTML tables with an optional highlighted row.
//!
//! Columns are emitted in the order given; nothing is reordered. A
//! highlighted row gets the home institution's crimson background with
//! white bold text, every other row the default style.

use crate::constants::HOME_COLOR;
use crate::data::{Comparison, RankingRow};
use crate::render::{escape_html, hex_color};
use crate::settings::Labels;

const CELL_STYLE: &str = "border: 1px solid black; padding: 5px;";
const HEADER_STYLE: &str = "border: 1px solid black; padding: 5px; text-align: left;";

/// One body row of a table
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub highlighted: bool,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

/// Render headers and rows as a bordered HTML table
pub fn render_table(headers: &[&str], rows: &[TableRow]) -> String {
    let mut html = String::from(r#"<table style="width:100%; border-collapse: collapse;">"#);

    html.push_str("<thead><tr>");
    for header in headers {
        html.push_str(&format!(
            r#"<th style="{HEADER_STYLE}">{}</th>"#,
            escape_html(header)
        ));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    for row in rows {
        if row.highlighted {
            html.push_str(&format!(
                r#"<tr class="home" style="background-color: {}; color: white; font-weight: bold;">"#,
                hex_color(HOME_COLOR)
            ));
        } else {
            html.push_str("<tr>");
        }
        for cell in &row.cells {
            html.push_str(&format!(
                r#"<td style="{CELL_STYLE}">{}</td>"#,
                escape_html(cell)
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    html
}

/// Ranking table, home institution row highlighted
pub fn ranking_table(rows: &[RankingRow], home_institution: &str) -> String {
    let body: Vec<TableRow> = rows
        .iter()
        .map(|row| {
            TableRow::new(vec![
                row.rank.to_string(),
                row.university.clone(),
                row.ug_total.map(format_total).unwrap_or_default(),
            ])
            .highlighted(row.university == home_institution)
        })
        .collect();

    render_table(&["RANK", "UNIV", "UG TOTAL"], &body)
}

/// Two-row comparison table; `None` when both sides are absent
pub fn comparison_table(comparison: &Comparison, labels: &Labels) -> Option<String> {
    if comparison.is_empty() {
        return None;
    }

    let display = |value: Option<f64>| match value {
        Some(v) => (v.trunc() as i64).to_string(),
        None => "none".to_string(),
    };

    let body = [
        TableRow::new(vec![
            labels.peer_average.clone(),
            display(comparison.peer_average),
        ]),
        TableRow::new(vec![
            labels.home_short.clone(),
            display(comparison.home_value),
        ]),
    ];
    Some(render_table(&["Metric", "UG TOTAL"], &body))
}

/// Whole numbers without a fraction, others to one decimal place
pub fn format_total(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
