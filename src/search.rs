use chrono::Utc;
use tracing::debug;

use crate::angles;
use crate::dataset::SUNSET_SPOTS;
use crate::scoring::score_spot;
use crate::types::{SearchOptions, SunsetSearchResult, SunsetSpot};

/// Below this many in-radius hits the result is topped up from outside the radius.
pub const MIN_FILL: usize = 3;

pub fn find_top_sunset_spots(
    latitude: f64,
    longitude: f64,
    options: &SearchOptions,
) -> SunsetSearchResult<'static> {
    find_top_sunset_spots_in(SUNSET_SPOTS, latitude, longitude, options)
}

pub fn find_top_sunset_spots_in<'a>(
    spots: &'a [SunsetSpot],
    latitude: f64,
    longitude: f64,
    options: &SearchOptions,
) -> SunsetSearchResult<'a> {
    let date = options.date.unwrap_or_else(|| Utc::now().date_naive());
    let sunset = angles::sunset_details(latitude, longitude, date);
    let radius_km = options.radius_km;

    let mut considered: Vec<_> = spots
        .iter()
        .map(|spot| score_spot(spot, latitude, longitude, sunset.azimuth_degrees, radius_km))
        .collect();
    // stable: equal scores keep dataset order
    considered.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    let desired = options.limit.min(considered.len()).max(1);
    let mut selected = vec![false; considered.len()];
    let mut picked = 0;

    for (idx, m) in considered.iter().enumerate() {
        if picked == desired {
            break;
        }
        if m.distance_km <= radius_km {
            selected[idx] = true;
            picked += 1;
        }
    }
    let within_radius = picked;

    if picked < desired.min(MIN_FILL) {
        for flag in selected.iter_mut() {
            if picked == desired {
                break;
            }
            if !*flag {
                *flag = true;
                picked += 1;
            }
        }
    }

    let matches: Vec<_> = considered
        .iter()
        .zip(&selected)
        .filter(|&(_, &keep)| keep)
        .map(|(m, _)| m.clone())
        .collect();

    debug!(
        considered = considered.len(),
        within_radius,
        backfilled = picked - within_radius,
        radius_km,
        "ranked sunset spots"
    );

    SunsetSearchResult {
        sunset,
        matches,
        considered,
    }
}
