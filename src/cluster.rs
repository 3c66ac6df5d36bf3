use super::*;
use serde::Deserialize;
use serde::Serialize;

/// A centroid and the points currently assigned to it.
///
/// The centroid is not necessarily one of the members. Between passes the
/// member list is cleared while the centroid is kept, so the next pass
/// assigns against last pass's means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    centroid: Point,
    members: Vec<Point>,
}

impl Cluster {
    /// An empty cluster centered on the given point, used for the first centroid.
    pub fn seed(centroid: Point) -> Self {
        Self {
            centroid,
            members: Vec::new(),
        }
    }
    /// A cluster centered on a point that fit nowhere else, with that point as its only member.
    pub fn spawn(point: Point) -> Self {
        Self {
            centroid: point,
            members: vec![point],
        }
    }
    pub fn centroid(&self) -> Point {
        self.centroid
    }
    pub fn members(&self) -> &[Point] {
        &self.members
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn absorb(&mut self, point: Point) {
        self.members.push(point);
    }
    pub fn clear(&mut self) {
        self.members.clear();
    }
    /// Moves the centroid to the mean of the members.
    /// Returns whether either coordinate changed (exact comparison).
    pub fn recenter(&mut self) -> bool {
        match Point::mean(&self.members) {
            Some(mean) if mean != self.centroid => {
                self.centroid = mean;
                true
            }
            _ => false,
        }
    }
    pub fn into_members(self) -> Vec<Point> {
        self.members
    }
}

impl From<Vec<Point>> for Cluster {
    /// Centers the cluster on the mean of the given members.
    fn from(members: Vec<Point>) -> Self {
        let mut cluster = Self::seed(Point::mean(&members).unwrap_or(Point::new(0., 0.)));
        cluster.members = members;
        cluster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_contains_itself() {
        let p = Point::new(12., 34.);
        let cluster = Cluster::spawn(p);
        assert_eq!(cluster.centroid(), p);
        assert_eq!(cluster.members(), &[p]);
    }

    #[test]
    fn recenter_reports_movement() {
        let mut cluster = Cluster::seed(Point::new(0., 0.));
        cluster.absorb(Point::new(0., 0.));
        cluster.absorb(Point::new(0., 0.01));
        assert!(cluster.recenter());
        assert_eq!(cluster.centroid(), Point::new(0., 0.005));
        assert!(!cluster.recenter());
    }

    #[test]
    fn recenter_empty_is_noop() {
        let mut cluster = Cluster::seed(Point::new(7., 7.));
        assert!(!cluster.recenter());
        assert_eq!(cluster.centroid(), Point::new(7., 7.));
    }

    #[test]
    fn clear_keeps_centroid() {
        let mut cluster = Cluster::spawn(Point::new(1., 2.));
        cluster.clear();
        assert!(cluster.is_empty());
        assert_eq!(cluster.centroid(), Point::new(1., 2.));
    }
}
