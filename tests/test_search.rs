use chrono::NaiveDate;

use sunset_spots::dataset::SUNSET_SPOTS;
use sunset_spots::search::*;
use sunset_spots::types::{SearchOptions, SunsetSearchResult, SunsetSpot, Terrain};

const SPOT: SunsetSpot = SunsetSpot {
    id: "spot",
    name: "Spot",
    city: "Somewhere",
    state: "CO",
    latitude: 40.0,
    longitude: -105.0,
    rating: 4.0,
    elevation_meters: 300.0,
    ideal_azimuth: 270.0,
    terrain: Terrain::DesertRidge,
    description: "",
    access: "",
    best_seasons: &[],
    features: &["view"],
    tips: &[],
};

fn solstice() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 21).unwrap()
}

fn options(radius_km: f64, limit: usize) -> SearchOptions {
    SearchOptions {
        radius_km,
        limit,
        date: Some(solstice()),
    }
}

fn ids<'a>(result: &SunsetSearchResult<'a>) -> Vec<&'a str> {
    result.matches.iter().map(|m| m.spot.id).collect()
}

fn considered_ids<'a>(result: &SunsetSearchResult<'a>, n: usize) -> Vec<&'a str> {
    result.considered.iter().take(n).map(|m| m.spot.id).collect()
}

fn assert_sorted_desc(result: &SunsetSearchResult<'_>) {
    for pair in result.matches.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "{} ({}) before {} ({})",
            pair[0].spot.id,
            pair[0].match_score,
            pair[1].spot.id,
            pair[1].match_score
        );
    }
}

/// `n` spots spaced ~11 km apart heading north from (40, -105).
fn spots_north(n: usize, names: &'static [&'static str]) -> Vec<SunsetSpot> {
    (0..n)
        .map(|i| SunsetSpot {
            id: names[i],
            latitude: 40.0 + 0.1 * i as f64,
            rating: 5.0 - 0.2 * i as f64,
            ..SPOT
        })
        .collect()
}

// ── Defaults ──

#[test]
fn test_default_options() {
    let o = SearchOptions::default();
    assert_eq!(o.radius_km, 50.0);
    assert_eq!(o.limit, 5);
    assert_eq!(o.date, None);
}

// ── Built-in dataset ──

#[test]
fn test_san_francisco_includes_twin_peaks_first() {
    let result = find_top_sunset_spots(37.7749, -122.4194, &options(50.0, 5));
    let top = &result.matches[0];
    assert_eq!(top.spot.name, "Twin Peaks Summit");
    assert!(top.distance_km < 5.0, "{}", top.distance_km);
    assert_eq!(result.considered.len(), SUNSET_SPOTS.len());
}

#[test]
fn test_san_francisco_backfills_sparse_radius() {
    // only two spots lie within 50 km, so three are topped up from further away
    let result = find_top_sunset_spots(37.7749, -122.4194, &options(50.0, 5));
    assert_eq!(
        ids(&result),
        vec![
            "twin-peaks",
            "crissy-field",
            "haleakala-summit",
            "mather-point",
            "cadillac-mountain"
        ]
    );
    let within = result.matches.iter().filter(|m| m.distance_km <= 50.0).count();
    assert_eq!(within, 2);
    assert_sorted_desc(&result);
}

#[test]
fn test_backfill_output_stays_sorted() {
    // at 5 km only Twin Peaks qualifies, and it no longer outranks Haleakalā
    let result = find_top_sunset_spots(37.7749, -122.4194, &options(5.0, 5));
    assert_eq!(result.matches.len(), 5);
    assert!(ids(&result).contains(&"twin-peaks"));
    assert_eq!(result.matches[0].spot.id, "haleakala-summit");
    assert_eq!(ids(&result), considered_ids(&result, 5));
    assert_sorted_desc(&result);
}

#[test]
fn test_no_backfill_when_enough_within_radius() {
    let result = find_top_sunset_spots(37.7749, -122.4194, &options(200.0, 2));
    assert_eq!(ids(&result), vec!["twin-peaks", "crissy-field"]);
    assert!(result.matches.iter().all(|m| m.distance_km <= 200.0));
}

#[test]
fn test_backfill_with_nothing_in_radius() {
    // central Nebraska, hundreds of km from every spot
    for limit in 1..=8 {
        let result = find_top_sunset_spots(41.0, -100.0, &options(5.0, limit));
        assert_eq!(result.matches.len(), limit.min(SUNSET_SPOTS.len()));
        assert_eq!(ids(&result), considered_ids(&result, limit));
        assert_sorted_desc(&result);
    }
}

#[test]
fn test_considered_sorted_and_complete() {
    let result = find_top_sunset_spots(30.0, -97.0, &options(50.0, 5));
    assert_eq!(result.considered.len(), SUNSET_SPOTS.len());
    for pair in result.considered.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
}

#[test]
fn test_matches_sorted_across_queries() {
    let queries = [
        (37.7749, -122.4194),
        (34.05, -118.24),
        (47.6, -122.3),
        (44.35, -68.2),
        (0.0, 0.0),
        (-33.9, 151.2),
    ];
    for &(lat, lon) in &queries {
        for radius in [5.0, 50.0, 200.0] {
            for limit in [1, 3, 5, 8] {
                let result = find_top_sunset_spots(lat, lon, &options(radius, limit));
                assert!(result.matches.len() <= limit);
                assert!(!result.matches.is_empty());
                assert_sorted_desc(&result);
            }
        }
    }
}

#[test]
fn test_search_deterministic() {
    let a = find_top_sunset_spots(36.0, -112.0, &options(120.0, 6));
    let b = find_top_sunset_spots(36.0, -112.0, &options(120.0, 6));
    assert_eq!(a, b);
}

#[test]
fn test_sunset_computed_for_user_position() {
    let result = find_top_sunset_spots(37.7749, -122.4194, &options(50.0, 5));
    assert_eq!(
        result.sunset,
        sunset_spots::angles::sunset_details(37.7749, -122.4194, solstice())
    );
}

// ── Custom datasets ──

#[test]
fn test_limit_honoured_when_radius_is_dense() {
    let spots = spots_north(6, &["a", "b", "c", "d", "e", "f"]);
    let result = find_top_sunset_spots_in(&spots, 40.0, -105.0, &options(100.0, 4));
    assert_eq!(ids(&result), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_three_within_radius_suppresses_backfill() {
    let mut spots = spots_north(3, &["near-1", "near-2", "near-3"]);
    spots.push(SunsetSpot {
        id: "far-famous",
        latitude: 45.0,
        rating: 5.0,
        elevation_meters: 3000.0,
        ..SPOT
    });
    spots.push(SunsetSpot {
        id: "far-other",
        latitude: 46.0,
        ..SPOT
    });
    let result = find_top_sunset_spots_in(&spots, 40.0, -105.0, &options(50.0, 5));
    assert_eq!(ids(&result), vec!["near-1", "near-2", "near-3"]);
}

#[test]
fn test_partial_backfill_tops_up_to_limit() {
    let spots = vec![
        SunsetSpot {
            id: "near",
            ..SPOT
        },
        SunsetSpot {
            id: "far-1",
            latitude: 45.0,
            ..SPOT
        },
        SunsetSpot {
            id: "far-2",
            latitude: 46.0,
            rating: 2.0,
            ..SPOT
        },
    ];
    let result = find_top_sunset_spots_in(&spots, 40.0, -105.0, &options(50.0, 2));
    assert_eq!(ids(&result), vec!["near", "far-1"]);
}

#[test]
fn test_dataset_smaller_than_limit() {
    let spots = spots_north(2, &["x", "y"]);
    let result = find_top_sunset_spots_in(&spots, 10.0, 10.0, &options(5.0, 8));
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.considered.len(), 2);
}

#[test]
fn test_empty_dataset() {
    let result = find_top_sunset_spots_in(&[], 40.0, -105.0, &options(50.0, 5));
    assert!(result.matches.is_empty());
    assert!(result.considered.is_empty());
}

#[test]
fn test_ties_keep_dataset_order() {
    let spots = vec![
        SunsetSpot { id: "first", ..SPOT },
        SunsetSpot { id: "second", ..SPOT },
        SunsetSpot { id: "third", ..SPOT },
    ];
    let result = find_top_sunset_spots_in(&spots, 40.0, -105.0, &options(50.0, 3));
    assert_eq!(ids(&result), vec!["first", "second", "third"]);

    let reversed: Vec<_> = spots.iter().rev().cloned().collect();
    let result = find_top_sunset_spots_in(&reversed, 40.0, -105.0, &options(50.0, 3));
    assert_eq!(ids(&result), vec!["third", "second", "first"]);
}

#[test]
fn test_min_fill_threshold() {
    assert_eq!(MIN_FILL, 3);
}
