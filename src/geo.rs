use crate::angles::deg_to_rad;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres on a spherical Earth.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = deg_to_rad(lat1);
    let lat2_rad = deg_to_rad(lat2);
    let d_lat = deg_to_rad(lat2 - lat1);
    let d_lon = deg_to_rad(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * (lat1_rad.cos() * lat2_rad.cos());
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
