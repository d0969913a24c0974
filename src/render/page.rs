//! Full dashboard page.

use crate::constants::{DATASET_DOWNLOAD_PATH, PAGE_PATH, RANKING_DOWNLOAD_PATH};
use crate::render::{comparison_table, escape_html, ranking_table};
use crate::report::{DashboardReport, Section};
use crate::settings::DashboardSettings;

const STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 960px; margin: 2em auto; padding: 0 1em; color: #262730; }
    h1 { font-size: 2em; }
    h2 { margin-top: 1.6em; }
    .warning { background: #fffce7; border-left: 4px solid #ffbd45; padding: 0.6em 1em; margin: 0.6em 0; }
    .empty { color: #808495; font-style: italic; }
    .chart svg { width: 100%; height: auto; }
    a.button { display: inline-block; padding: 0.4em 1em; border: 1px solid #ccc; border-radius: 4px; text-decoration: none; color: inherit; }
    select { font-size: 1em; padding: 0.3em; }
"#;

const INTRO: &str = r#"<p>Welcome to my dashboard for comparing foreign language enrollments at OU with enrollments at public AAU institutions.</p>
<p>To assist in the discussion about the foreign language requirement in the Dodge Family College of Arts and Sciences (DFCAS) at the University of Oklahoma, this dashboard shows an analysis of data from the <a href="https://www.mla.org/">Modern Language Association's</a> <a href="https://apps.mla.org/flsurvey_search">Language Enrollment Database, 1958&ndash;2021</a>.</p>
<p><strong>NOTE</strong>: The numbers displayed here are from the MLA report's 'UG TOTAL' column, representing all enrollment in a given language at lower and upper levels.</p>
<p>Use the dropdown to select a language. The reports will change to show the results.</p>"#;

/// Render the dashboard for one report.
///
/// `languages` populates the dropdown in the given order. `chart_svg` is
/// the rendered trend chart, `None` when there is nothing to plot.
pub fn render_page(
    report: &DashboardReport,
    languages: &[&str],
    chart_svg: Option<&str>,
    settings: &DashboardSettings,
) -> String {
    let labels = &settings.labels;
    let language = escape_html(&report.language);
    let mut body = String::new();

    body.push_str(&language_selector(languages, &report.language));

    // Rankings
    body.push_str(&format!("<h2>Institution Rankings for {language}</h2>"));
    body.push_str(&warnings(report, Section::Ranking, settings));
    body.push_str(&format!(
        "<p>Ranking for {language} in {}</p>",
        report.target_year
    ));
    body.push_str(&ranking_table(&report.ranking, &report.home_institution));

    // Comparison
    body.push_str(&format!(
        "<h2>{} vs. Average for All AAU Institutions for {language}</h2>",
        escape_html(&labels.home_short)
    ));
    body.push_str(&warnings(report, Section::Comparison, settings));
    if let Some(table) = comparison_table(&report.comparison, labels) {
        body.push_str(&table);
    }

    // Trends
    body.push_str(&format!("<h2>Enrollment Trends for {language}</h2>"));
    body.push_str(&warnings(report, Section::Trend, settings));
    if let Some(svg) = chart_svg {
        body.push_str(r#"<div class="chart">"#);
        body.push_str(svg);
        body.push_str("</div>");
    }

    // Downloads
    let ranking_href = format!(
        "{RANKING_DOWNLOAD_PATH}?language={}",
        urlencoding::encode(&report.language)
    );
    body.push_str(&format!("<h2>Download Data for {language}</h2>"));
    body.push_str("<p>Download a CSV file for the selected language.</p>");
    body.push_str(&format!(
        r#"<p><a class="button" href="{}" download>Download Rankings as CSV</a></p>"#,
        escape_html(&ranking_href)
    ));
    body.push_str("<h2>Download the Entire Dataset</h2>");
    body.push_str(&format!(
        "<p>Click below to download the entire set of data on foreign language enrollment at {} and {}.</p>",
        escape_html(&labels.peer_name),
        escape_html(&labels.home_short)
    ));
    body.push_str(&format!(
        r#"<p><a class="button" href="{DATASET_DOWNLOAD_PATH}" download>Download All Data</a></p>"#
    ));

    document(&labels.title, &body)
}

/// Page for a dataset without a single language
pub fn render_empty_page(settings: &DashboardSettings) -> String {
    document(
        &settings.labels.title,
        r#"<p class="empty">The dataset contains no records.</p>"#,
    )
}

fn document(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
{INTRO}
{body}
</body>
</html>"#
    )
}

fn language_selector(languages: &[&str], selected: &str) -> String {
    let mut html = format!(
        r#"<form method="get" action="{PAGE_PATH}"><label for="language">Select a Language:</label> <select id="language" name="language" onchange="this.form.submit()">"#
    );
    for language in languages {
        let escaped = escape_html(language);
        let marker = if *language == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{escaped}"{marker}>{escaped}</option>"#
        ));
    }
    html.push_str("</select> <noscript><button type=\"submit\">Show</button></noscript></form>");
    html
}

fn warnings(report: &DashboardReport, section: Section, settings: &DashboardSettings) -> String {
    report
        .warnings_for(section)
        .map(|warning| {
            format!(
                r#"<div class="warning">{}</div>"#,
                escape_html(&warning.message(&settings.labels, report.target_year))
            )
        })
        .collect()
}
