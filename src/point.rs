use super::*;
use serde::Deserialize;
use serde::Serialize;

/// A geodetic coordinate in decimal degrees.
///
/// Ranges are not enforced: latitudes outside [-90, 90] or longitudes outside
/// [-180, 180] simply produce odd distances. Finiteness is checked once, at
/// the [`Clusterer`] boundary, via [`Point::is_finite`].
///
/// Serializes as a two-element array `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Degrees, Degrees)", into = "(Degrees, Degrees)")]
pub struct Point {
    lat: Degrees,
    lon: Degrees,
}

impl Point {
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }
    pub fn lat(&self) -> Degrees {
        self.lat
    }
    pub fn lon(&self) -> Degrees {
        self.lon
    }
    /// Both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
    /// Great-circle distance to another point, see [`haversine`].
    pub fn distance(&self, other: &Self) -> Kilometers {
        haversine(self, other)
    }
    /// Planar mean of latitudes and longitudes. Not a spherical centroid.
    /// Sums in slice order so repeated calls over the same members agree bit for bit.
    pub fn mean(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (lat, lon) = points
            .iter()
            .fold((0., 0.), |(lat, lon), p| (lat + p.lat, lon + p.lon));
        Some(Self::new(lat / n, lon / n))
    }
    /// Total order for sorting point sets, NaN-safe.
    pub fn order(a: &Self, b: &Self) -> std::cmp::Ordering {
        a.lat.total_cmp(&b.lat).then(a.lon.total_cmp(&b.lon))
    }
}

impl From<(Degrees, Degrees)> for Point {
    fn from((lat, lon): (Degrees, Degrees)) -> Self {
        Self::new(lat, lon)
    }
}
impl From<[Degrees; 2]> for Point {
    fn from([lat, lon]: [Degrees; 2]) -> Self {
        Self::new(lat, lon)
    }
}
impl From<Point> for (Degrees, Degrees) {
    fn from(p: Point) -> Self {
        (p.lat, p.lon)
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        Self::new(
            rand::random_range(-90.0..=90.0),
            rand::random_range(-180.0..=180.0),
        )
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_members() {
        let points = [Point::new(0., 0.), Point::new(0., 0.01)];
        assert_eq!(Point::mean(&points), Some(Point::new(0., 0.005)));
    }

    #[test]
    fn mean_of_nothing() {
        assert_eq!(Point::mean(&[]), None);
    }

    #[test]
    fn finite_coordinates() {
        assert!(Point::new(45., -120.).is_finite());
        assert!(!Point::new(f64::NAN, 0.).is_finite());
        assert!(!Point::new(0., f64::INFINITY).is_finite());
    }

    #[test]
    fn serializes_as_pair() {
        let p = Point::new(52.5, 13.25);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[52.5,13.25]");
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), p);
    }
}
