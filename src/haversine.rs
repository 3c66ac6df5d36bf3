use super::*;

/// Great-circle distance in kilometers between two points.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS`], rounded to two
/// decimals. Points closer than five meters therefore measure exactly `0.0`
/// and are treated as duplicates by the clusterer.
///
/// Symmetric, and zero for identical points. NaN in, NaN out: callers are
/// expected to have checked [`Point::is_finite`].
pub fn haversine(a: &Point, b: &Point) -> Kilometers {
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlon = (b.lon() - a.lon()).to_radians();
    let sin_lat = (dlat / 2.).sin();
    let sin_lon = (dlon / 2.).sin();
    let h = sin_lat * sin_lat
        + sin_lon * sin_lon * a.lat().to_radians().cos() * b.lat().to_radians().cos();
    // rounding can push antipodal h a hair past 1
    let h = h.clamp(0., 1.);
    let arc = 2. * h.sqrt().atan2((1. - h).sqrt());
    (arc * EARTH_RADIUS * DISTANCE_PRECISION).round() / DISTANCE_PRECISION
}
