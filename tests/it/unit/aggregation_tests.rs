//! Ordering and completeness properties of the aggregations, checked over a
//! seeded random dataset.

use crate::helpers::{HOME, TestDatasetBuilder};
use langboard::data::{
    Dataset, Side, compare_with_peers, enrollment_trends, rank_institutions,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LANGUAGES: &[&str] = &["Spanish", "French", "German", "Latin", "Korean", "Hebrew"];
const UNIVERSITIES: &[&str] = &[HOME, "A U", "B U", "C U", "D U", "E U", "F U"];
const YEARS: &[i32] = &[2006, 2009, 2013, 2016, 2021];

/// Every (language, university, year) present with probability 0.7; totals
/// drawn from a small range so ties occur, and about one in ten blank.
fn random_dataset(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = TestDatasetBuilder::new();
    for language in LANGUAGES {
        for university in UNIVERSITIES {
            for year in YEARS {
                if rng.gen_bool(0.7) {
                    let total = if rng.gen_bool(0.1) {
                        None
                    } else {
                        Some(rng.gen_range(0..40) as f64 * 5.0)
                    };
                    builder = builder.record(language, university, *year, total);
                }
            }
        }
    }
    builder.build()
}

#[test]
fn test_ranking_is_descending_with_contiguous_ranks() {
    for seed in 0..8 {
        let dataset = random_dataset(seed);
        for language in LANGUAGES {
            let ranking = rank_institutions(&dataset, language, 2021);
            let expected_len = dataset
                .for_language(language)
                .filter(|r| r.survey_year == 2021)
                .count();
            assert_eq!(ranking.len(), expected_len);

            let ranks: Vec<usize> = ranking.iter().map(|r| r.rank).collect();
            assert_eq!(ranks, (1..=expected_len).collect::<Vec<_>>());

            for pair in ranking.windows(2) {
                match (pair[0].ug_total, pair[1].ug_total) {
                    (Some(a), Some(b)) => assert!(b <= a, "{language}: {b} ranked below {a}"),
                    (None, Some(_)) => panic!("{language}: blank total ranked above a value"),
                    _ => {}
                }
            }
        }
    }
}

#[test]
fn test_trend_years_strictly_ascending() {
    for seed in 0..8 {
        let dataset = random_dataset(seed);
        for language in LANGUAGES {
            let trend = enrollment_trends(&dataset, language, HOME);
            for side in [Side::Home, Side::Peers] {
                let years: Vec<i32> = trend.side(side).iter().map(|p| p.year).collect();
                assert!(
                    years.windows(2).all(|w| w[0] < w[1]),
                    "{language} {side:?}: {years:?}"
                );
            }
        }
    }
}

#[test]
fn test_trend_means_match_hand_computed_groups() {
    let dataset = random_dataset(42);
    let trend = enrollment_trends(&dataset, "French", HOME);

    for point in &trend.peers {
        let totals: Vec<f64> = dataset
            .for_language("French")
            .filter(|r| r.university != HOME && r.survey_year == point.year)
            .filter_map(|r| r.ug_total)
            .collect();
        let expected = totals.iter().sum::<f64>() / totals.len() as f64;
        assert!((point.mean - expected).abs() < 1e-9);
    }
}

#[test]
fn test_comparison_matches_ranking_snapshot() {
    for seed in 0..8 {
        let dataset = random_dataset(seed);
        for language in LANGUAGES {
            let ranking = rank_institutions(&dataset, language, 2021);
            let comparison = compare_with_peers(&dataset, language, 2021, HOME);

            let home = ranking.iter().find(|r| r.university == HOME);
            assert_eq!(comparison.home_value, home.and_then(|r| r.ug_total));

            let peers: Vec<f64> = ranking
                .iter()
                .filter(|r| r.university != HOME)
                .filter_map(|r| r.ug_total)
                .collect();
            match comparison.peer_average {
                Some(avg) => {
                    let expected = peers.iter().sum::<f64>() / peers.len() as f64;
                    assert!((avg - expected).abs() < 1e-9);
                }
                None => assert!(peers.is_empty()),
            }
        }
    }
}
