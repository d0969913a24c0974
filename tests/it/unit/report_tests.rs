//! Warning rules and section contents of the render model.

use crate::helpers::{HOME, TestDatasetBuilder, sample_dataset};
use langboard::data::{Side, TrendPoint};
use langboard::report::{Section, Selection, Warning, build_report};
use langboard::settings::DashboardSettings;

fn report_for(language: &str) -> langboard::report::DashboardReport {
    build_report(
        &sample_dataset(),
        &Selection::new(language),
        &DashboardSettings::default(),
    )
}

#[test]
fn test_spanish_has_no_warnings() {
    let report = report_for("Spanish");

    assert!(report.warnings.is_empty());
    assert_eq!(report.comparison.home_value, Some(500.0));
    assert_eq!(report.comparison.peer_average, Some(500.0));

    let order: Vec<&str> = report.ranking.iter().map(|r| r.university.as_str()).collect();
    assert_eq!(order, vec!["THIRD U", HOME, "OTHER U"]);
}

#[test]
fn test_peers_only_language_warns_about_home_once_per_section() {
    let report = report_for("Korean");

    let comparison: Vec<&Warning> = report.warnings_for(Section::Comparison).collect();
    assert_eq!(
        comparison,
        vec![&Warning::MissingSide {
            section: Section::Comparison,
            side: Side::Home,
            language: "Korean".to_string(),
        }]
    );

    let trend: Vec<&Warning> = report.warnings_for(Section::Trend).collect();
    assert_eq!(trend.len(), 1);
    assert!(report.trend.home.is_empty());
    assert_eq!(
        report.trend.peers,
        vec![
            TrendPoint { year: 2016, mean: 20.0 },
            TrendPoint { year: 2021, mean: 35.0 },
        ]
    );

    // The ranking still lists the peer that reported in 2021
    assert_eq!(report.ranking.len(), 1);
    assert_eq!(report.warnings_for(Section::Ranking).count(), 0);
}

#[test]
fn test_missing_home_message_text() {
    let report = report_for("Korean");
    let settings = DashboardSettings::default();

    let messages: Vec<String> = report
        .warnings_for(Section::Comparison)
        .map(|w| w.message(&settings.labels, report.target_year))
        .collect();
    assert_eq!(
        messages,
        vec!["No enrollment data available for OU in Korean.".to_string()]
    );
}

#[test]
fn test_missing_peers_warning() {
    let dataset = TestDatasetBuilder::new().home("Cherokee", 2021, 12.0).build();
    let settings = DashboardSettings::default();
    let report = build_report(&dataset, &Selection::new("Cherokee"), &settings);

    let messages: Vec<String> = report
        .warnings
        .iter()
        .map(|w| w.message(&settings.labels, report.target_year))
        .collect();
    assert_eq!(
        messages,
        vec![
            "No enrollment data available for public AAU institutions in Cherokee.".to_string(),
            "No enrollment data available for public AAU institutions in Cherokee.".to_string(),
        ]
    );
    assert_eq!(report.warnings[0].section(), Section::Comparison);
    assert_eq!(report.warnings[1].section(), Section::Trend);
}

#[test]
fn test_unknown_language_collapses_to_one_warning_per_section() {
    let report = report_for("Klingon");
    let settings = DashboardSettings::default();

    assert!(report.ranking.is_empty());
    assert_eq!(report.comparison.home_value, None);
    assert_eq!(report.comparison.peer_average, None);
    assert!(report.trend.is_empty());

    let messages: Vec<(Section, String)> = report
        .warnings
        .iter()
        .map(|w| (w.section(), w.message(&settings.labels, report.target_year)))
        .collect();
    assert_eq!(
        messages,
        vec![
            (
                Section::Ranking,
                "No 2021 rankings available for Klingon.".to_string()
            ),
            (
                Section::Comparison,
                "No enrollment data available for Klingon.".to_string()
            ),
            (
                Section::Trend,
                "No data available for Klingon. Please select another language.".to_string()
            ),
        ]
    );
}

#[test]
fn test_comparison_ignores_other_years() {
    // Home reported only in 2016; the 2021 comparison has no home value
    let dataset = TestDatasetBuilder::new()
        .home("Latin", 2016, 80.0)
        .peer("Latin", "OTHER U", 2021, 40.0)
        .build();
    let report = build_report(&dataset, &Selection::new("Latin"), &DashboardSettings::default());

    assert_eq!(report.comparison.home_value, None);
    assert_eq!(report.comparison.peer_average, Some(40.0));
    assert_eq!(report.warnings_for(Section::Comparison).count(), 1);
    // The trend still shows the home point
    assert_eq!(report.trend.home, vec![TrendPoint { year: 2016, mean: 80.0 }]);
    assert_eq!(report.warnings_for(Section::Trend).count(), 0);
}

#[test]
fn test_selection_resolution() {
    let dataset = sample_dataset();

    assert_eq!(
        Selection::resolve(&dataset, None),
        Some(Selection::new("Spanish"))
    );
    assert_eq!(
        Selection::resolve(&dataset, Some("  Korean ")),
        Some(Selection::new("Korean"))
    );
    assert_eq!(
        Selection::resolve(&dataset, Some("")),
        Some(Selection::new("Spanish"))
    );

    // Unknown languages are kept so the page can warn about them
    assert_eq!(
        Selection::resolve(&dataset, Some("Klingon")),
        Some(Selection::new("Klingon"))
    );

    let empty = TestDatasetBuilder::new().build();
    assert_eq!(Selection::resolve(&empty, None), None);
}

#[test]
fn test_custom_target_year() {
    let settings = DashboardSettings {
        target_year: 2016,
        ..DashboardSettings::default()
    };
    let report = build_report(&sample_dataset(), &Selection::new("Spanish"), &settings);

    assert_eq!(report.target_year, 2016);
    assert_eq!(report.comparison.home_value, Some(450.0));
    assert_eq!(report.comparison.peer_average, Some(320.0));
    assert_eq!(report.ranking[0].university, HOME);
}
