pub mod angles;
pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod scoring;
pub mod search;
pub mod server;
pub mod types;

pub use angles::{
    day_length_minutes, day_of_year, deg_to_rad, equation_of_time, minutes_to_timestamp,
    normalize_angle, rad_to_deg, solar_declination, solar_noon_minutes, sunset_azimuth,
    sunset_details, sunset_details_at, sunset_details_today, sunset_hour_angle,
    DEGREES_PER_HOUR, GOLDEN_HOUR_MINUTES, MINUTES_PER_DEGREE, SOLAR_NOON_MINUTES,
};

pub use api::{
    build_response, clamp_number, resolve_query, respond, round_to, ResolvedQuery,
    ResponseMetadata, SpotResponse, SunsetSpotsResponse,
};

pub use config::Config;
pub use dataset::SUNSET_SPOTS;
pub use error::{AppError, StartupError};
pub use geo::{haversine_distance_km, EARTH_RADIUS_KM};

pub use scoring::{
    angular_difference, clamp01, score_spot, DISTANCE_WEIGHT, ELEVATION_WEIGHT,
    FEATURES_WEIGHT, ORIENTATION_WEIGHT, RATING_WEIGHT,
};

pub use search::{find_top_sunset_spots, find_top_sunset_spots_in, MIN_FILL};
pub use server::{build_router, init_tracing, start_server};

pub use types::{
    SearchOptions, SpotScores, SunsetDetails, SunsetSearchResult, SunsetSpot, SunsetSpotMatch,
    Terrain,
};
