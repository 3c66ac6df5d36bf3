use super::*;
use serde::Deserialize;
use serde::Serialize;

/// What the globe needs to draw one cluster: where, and how heavy.
///
/// `size` is the member count scaled down by [`MARKER_SCALE`] and is used
/// directly as point altitude by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: Degrees,
    pub lng: Degrees,
    pub weight: usize,
    pub size: f64,
}

impl From<&Cluster> for Marker {
    fn from(cluster: &Cluster) -> Self {
        Self {
            lat: cluster.centroid().lat(),
            lng: cluster.centroid().lon(),
            weight: cluster.len(),
            size: cluster.len() as f64 / MARKER_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_member_count() {
        let mut cluster = Cluster::seed(Point::new(10., 20.));
        (0..50).for_each(|_| cluster.absorb(Point::new(10., 20.)));
        let marker = Marker::from(&cluster);
        assert_eq!(marker.lat, 10.);
        assert_eq!(marker.lng, 20.);
        assert_eq!(marker.weight, 50);
        assert_eq!(marker.size, 0.5);
    }

    #[test]
    fn field_names() {
        let marker = Marker::from(&Cluster::spawn(Point::new(1., 2.)));
        let json = serde_json::to_value(marker).unwrap();
        assert_eq!(json["lat"], 1.);
        assert_eq!(json["lng"], 2.);
        assert_eq!(json["weight"], 1);
        assert_eq!(json["size"], 0.01);
    }
}
