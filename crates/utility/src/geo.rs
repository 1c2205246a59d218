pub const EARTH_RADIUS_MI: f64 = 3959.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Great-circle distance between two points in statute miles.
/// Defined for any real degree inputs; out-of-range values are not rejected.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MI * c
}

/// Display form for a distance in miles.
///
/// Tiered so that very close results never read as "0 mi" and far results
/// do not carry noisy decimals:
/// - below 0.1 → `"< 0.1 mi"`
/// - below 1 → one decimal, e.g. `"0.7 mi"`
/// - otherwise → whole miles, e.g. `"12 mi"`
///
/// Negative input is a caller contract violation and is clamped to 0.
pub fn format_distance(miles: f64) -> String {
    let miles = miles.max(0.0);
    if miles < 0.1 {
        "< 0.1 mi".to_owned()
    } else if miles < 1.0 {
        format!("{:.1} mi", miles)
    } else {
        format!("{} mi", miles.round() as i64)
    }
}

pub fn calculate_bounding_box(
    lat: f64,
    lon: f64,
    radius_mi: f64,
) -> ((f64, f64), (f64, f64)) {
    let lat_rad = to_radians(lat);
    let lon_rad = to_radians(lon);

    // Latitude bounds
    let min_lat = lat_rad - radius_mi / EARTH_RADIUS_MI;
    let max_lat = lat_rad + radius_mi / EARTH_RADIUS_MI;

    // Longitude bounds (adjusted by latitude)
    let min_lon = lon_rad - radius_mi / (EARTH_RADIUS_MI * lat_rad.cos());
    let max_lon = lon_rad + radius_mi / (EARTH_RADIUS_MI * lat_rad.cos());

    (
        (to_degrees(min_lat), to_degrees(min_lon)),
        (to_degrees(max_lat), to_degrees(max_lon)),
    )
}
