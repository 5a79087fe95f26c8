use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::types::SunsetDetails;

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const SOLAR_NOON_MINUTES: f64 = 720.0;
pub const GOLDEN_HOUR_MINUTES: f64 = 45.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

/// Apparent minus mean solar time, in minutes.
pub fn equation_of_time(n: i32) -> f64 {
    let b = (2.0 * std::f64::consts::PI / 364.0) * (n - 81) as f64;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Solar declination in radians.
pub fn solar_declination(n: i32) -> f64 {
    0.409 * ((2.0 * std::f64::consts::PI / 365.0) * n as f64 - 1.39).sin()
}

/// Sunset hour angle in radians, in [0, π].
///
/// During polar night or midnight sun the acos argument leaves [-1, 1]; it is
/// clamped so the result collapses to 0 (sun never rises) or π (sun never
/// sets).
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    (-lat_rad.tan() * declination.tan()).clamp(-1.0, 1.0).acos()
}

/// Minutes after UTC midnight at which the sun crosses the local meridian.
pub fn solar_noon_minutes(longitude: f64, eot: f64) -> f64 {
    SOLAR_NOON_MINUTES - MINUTES_PER_DEGREE * longitude - eot
}

pub fn sunset_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let az_rad = hour_angle
        .sin()
        .atan2(hour_angle.cos() * lat_rad.sin() - declination.tan() * lat_rad.cos());
    normalize_angle(rad_to_deg(az_rad))
}

pub fn day_length_minutes(hour_angle_deg: f64) -> f64 {
    (2.0 * hour_angle_deg / DEGREES_PER_HOUR) * 60.0
}

/// Renders a minute offset from the date's UTC midnight as an ISO-8601
/// timestamp, floored to the millisecond. Offsets outside [0, 1440) roll
/// into the neighbouring day.
pub fn minutes_to_timestamp(date: NaiveDate, minutes: f64) -> String {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let offset = Duration::milliseconds((minutes * 60_000.0).floor() as i64);
    (midnight + offset).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn sunset_details(latitude: f64, longitude: f64, date: NaiveDate) -> SunsetDetails {
    let n = day_of_year(date);
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let ha = sunset_hour_angle(latitude, decl);
    let ha_deg = rad_to_deg(ha);

    let sunset_minutes = solar_noon_minutes(longitude, eot) + ha_deg * MINUTES_PER_DEGREE;
    let golden_hour_minutes = sunset_minutes - GOLDEN_HOUR_MINUTES;

    SunsetDetails {
        sunset_iso: minutes_to_timestamp(date, sunset_minutes),
        golden_hour_start_iso: minutes_to_timestamp(date, golden_hour_minutes),
        azimuth_degrees: sunset_azimuth(latitude, decl, ha),
        day_length_minutes: day_length_minutes(ha_deg),
    }
}

/// Only the UTC calendar date of `dt` matters; the time of day is ignored.
pub fn sunset_details_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SunsetDetails {
    let utc = dt.with_timezone(&Utc);
    sunset_details(latitude, longitude, utc.date_naive())
}

pub fn sunset_details_today(latitude: f64, longitude: f64) -> SunsetDetails {
    sunset_details_at(latitude, longitude, &Utc::now())
}
