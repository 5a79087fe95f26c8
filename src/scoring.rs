use crate::geo::haversine_distance_km;
use crate::types::{SpotScores, SunsetSpot, SunsetSpotMatch};

pub const RATING_WEIGHT: f64 = 0.35;
pub const DISTANCE_WEIGHT: f64 = 0.25;
pub const ELEVATION_WEIGHT: f64 = 0.15;
pub const ORIENTATION_WEIGHT: f64 = 0.20;
pub const FEATURES_WEIGHT: f64 = 0.05;

pub const MAX_RATING: f64 = 5.0;
pub const ELEVATION_SATURATION_METERS: f64 = 700.0;
pub const FEATURE_SATURATION_COUNT: f64 = 4.0;

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Smaller arc between two compass bearings, in [0, 180].
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

impl SpotScores {
    pub fn weighted(&self) -> f64 {
        self.rating * RATING_WEIGHT
            + self.distance * DISTANCE_WEIGHT
            + self.elevation * ELEVATION_WEIGHT
            + self.orientation * ORIENTATION_WEIGHT
            + self.features * FEATURES_WEIGHT
    }
}

pub fn score_spot<'a>(
    spot: &'a SunsetSpot,
    user_lat: f64,
    user_lon: f64,
    sunset_azimuth: f64,
    radius_km: f64,
) -> SunsetSpotMatch<'a> {
    let distance_km = haversine_distance_km(user_lat, user_lon, spot.latitude, spot.longitude);
    let alignment_delta = angular_difference(sunset_azimuth, spot.ideal_azimuth);

    let scores = SpotScores {
        rating: clamp01(spot.rating / MAX_RATING),
        distance: clamp01(1.0 - distance_km / radius_km.max(1.0)),
        elevation: clamp01(spot.elevation_meters / ELEVATION_SATURATION_METERS),
        orientation: clamp01(1.0 - alignment_delta / 180.0),
        features: clamp01(spot.features.len() as f64 / FEATURE_SATURATION_COUNT),
    };

    SunsetSpotMatch {
        spot,
        distance_km,
        alignment_delta,
        match_score: scores.weighted(),
        scores,
    }
}
