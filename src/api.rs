//! Query boundary for `GET /api/sunset-spots`.
//!
//! Required coordinates must read as finite numbers or the request is
//! rejected with a 400. The optional radius and limit are never rejected:
//! anything malformed or out of range is clamped into its valid window.

use std::collections::HashMap;

use axum::{extract::Query, Json};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::search::find_top_sunset_spots;
use crate::types::{
    SearchOptions, SpotScores, SunsetDetails, SunsetSearchResult, SunsetSpotMatch, Terrain,
};

pub const MIN_RADIUS_KM: f64 = 5.0;
pub const MAX_RADIUS_KM: f64 = 200.0;
pub const DEFAULT_RADIUS_KM: f64 = 50.0;
pub const MIN_LIMIT: f64 = 1.0;
pub const MAX_LIMIT: f64 = 8.0;
pub const DEFAULT_LIMIT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotResponse<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub description: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub rating: f64,
    pub elevation_meters: f64,
    pub ideal_azimuth: f64,
    pub alignment_delta: f64,
    pub match_score: f64,
    pub scores: SpotScores,
    pub terrain: Terrain,
    pub features: &'a [&'a str],
    pub best_seasons: &'a [&'a str],
    pub access: &'a str,
    pub tips: &'a [&'a str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub considered_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunsetSpotsResponse<'a> {
    pub query: ResolvedQuery,
    pub sunset: SunsetDetails,
    pub spots: Vec<SpotResponse<'a>>,
    pub metadata: ResponseMetadata,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// NaN clamps to the minimum rather than propagating.
pub fn clamp_number(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Reads the longest leading decimal literal, ignoring any trailing text
/// (`"10km"` is 10). Only `Infinity` is accepted as a non-finite spelling;
/// input with no numeric prefix yields NaN.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// First of `keys` present in the query, even if its value is empty.
fn first_param<'p>(params: &'p HashMap<String, String>, keys: &[&str]) -> Option<&'p str> {
    keys.iter().find_map(|key| params.get(*key).map(String::as_str))
}

fn optional_number(raw: Option<&str>, default: f64) -> f64 {
    match raw {
        Some(value) if !value.is_empty() => parse_number(value),
        _ => default,
    }
}

pub fn resolve_query(params: &HashMap<String, String>) -> Result<ResolvedQuery, AppError> {
    let (Some(lat), Some(lng)) = (
        first_param(params, &["lat"]),
        first_param(params, &["lng", "lon"]),
    ) else {
        return Err(AppError::MissingCoordinates);
    };

    let latitude = parse_number(lat);
    let longitude = parse_number(lng);
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(AppError::InvalidCoordinates);
    }

    let radius_km = clamp_number(
        optional_number(first_param(params, &["radiusKm", "radius"]), DEFAULT_RADIUS_KM),
        MIN_RADIUS_KM,
        MAX_RADIUS_KM,
    );
    let limit = clamp_number(
        optional_number(first_param(params, &["limit"]), DEFAULT_LIMIT),
        MIN_LIMIT,
        MAX_LIMIT,
    )
    .round() as usize;

    Ok(ResolvedQuery {
        latitude,
        longitude,
        radius_km,
        limit,
    })
}

impl<'a> From<&SunsetSpotMatch<'a>> for SpotResponse<'a> {
    fn from(m: &SunsetSpotMatch<'a>) -> Self {
        let spot = m.spot;
        Self {
            id: spot.id,
            name: spot.name,
            city: spot.city,
            state: spot.state,
            description: spot.description,
            latitude: spot.latitude,
            longitude: spot.longitude,
            distance_km: round_to(m.distance_km, 2),
            rating: spot.rating,
            elevation_meters: spot.elevation_meters,
            ideal_azimuth: spot.ideal_azimuth,
            alignment_delta: round_to(m.alignment_delta, 1),
            match_score: round_to(m.match_score, 3),
            scores: m.scores,
            terrain: spot.terrain,
            features: spot.features,
            best_seasons: spot.best_seasons,
            access: spot.access,
            tips: spot.tips,
        }
    }
}

pub fn build_response<'a>(
    query: ResolvedQuery,
    result: SunsetSearchResult<'a>,
) -> SunsetSpotsResponse<'a> {
    SunsetSpotsResponse {
        query,
        spots: result.matches.iter().map(SpotResponse::from).collect(),
        metadata: ResponseMetadata {
            considered_count: result.considered.len(),
        },
        sunset: result.sunset,
    }
}

/// Resolves the raw query and runs a search for `date`.
pub fn respond(
    params: &HashMap<String, String>,
    date: NaiveDate,
) -> Result<SunsetSpotsResponse<'static>, AppError> {
    let query = resolve_query(params)?;
    let options = SearchOptions {
        radius_km: query.radius_km,
        limit: query.limit,
        date: Some(date),
    };
    let result = find_top_sunset_spots(query.latitude, query.longitude, &options);
    Ok(build_response(query, result))
}

pub async fn sunset_spots_handler(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SunsetSpotsResponse<'static>>, AppError> {
    let response = respond(&params, Utc::now().date_naive()).inspect_err(|e| {
        debug!("Rejected sunset spot query: {e}");
    })?;

    debug!(
        latitude = response.query.latitude,
        longitude = response.query.longitude,
        radius_km = response.query.radius_km,
        limit = response.query.limit,
        returned = response.spots.len(),
        "Served sunset spot query"
    );

    Ok(Json(response))
}
