//! Snapshot tests for the serialized render model.
//!
//! Run `cargo insta review` to accept changes.

use crate::helpers::sample_dataset;
use insta::assert_json_snapshot;
use langboard::data::{Comparison, rank_institutions};
use langboard::report::{Section, Selection, Warning, build_report};
use langboard::settings::DashboardSettings;

#[test]
fn test_comparison_snapshot() {
    let comparison = Comparison {
        peer_average: Some(500.0),
        home_value: None,
    };
    assert_json_snapshot!(comparison, @r#"
    {
      "peer_average": 500.0,
      "home_value": null
    }
    "#);
}

#[test]
fn test_warning_snapshot() {
    let warning = Warning::NoDataForSelection {
        section: Section::Trend,
        language: "Klingon".to_string(),
    };
    assert_json_snapshot!(warning, @r#"
    {
      "kind": "no_data_for_selection",
      "section": "trend",
      "language": "Klingon"
    }
    "#);
}

#[test]
fn test_ranking_snapshot() {
    let ranking = rank_institutions(&sample_dataset(), "Spanish", 2021);
    assert_json_snapshot!(ranking, @r#"
    [
      {
        "rank": 1,
        "university": "THIRD U",
        "ug_total": 700.0
      },
      {
        "rank": 2,
        "university": "U OF OKLAHOMA",
        "ug_total": 500.0
      },
      {
        "rank": 3,
        "university": "OTHER U",
        "ug_total": 300.0
      }
    ]
    "#);
}

#[test]
fn test_korean_warnings_snapshot() {
    let report = build_report(
        &sample_dataset(),
        &Selection::new("Korean"),
        &DashboardSettings::default(),
    );
    assert_json_snapshot!(report.warnings, @r#"
    [
      {
        "kind": "missing_side",
        "section": "comparison",
        "side": "home",
        "language": "Korean"
      },
      {
        "kind": "missing_side",
        "section": "trend",
        "side": "home",
        "language": "Korean"
      }
    ]
    "#);
}
