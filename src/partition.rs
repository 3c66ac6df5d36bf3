use super::*;
use serde::Deserialize;
use serde::Serialize;

/// The disjoint, exhaustive grouping of an input point set.
///
/// Every input point appears in exactly one cluster's member list, and every
/// centroid is the mean of its members. Alongside the clusters it records
/// how it was reached: the admission radius, the number of passes run, and
/// whether the last pass was a fixed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    clusters: Vec<Cluster>,
    threshold: Kilometers,
    passes: usize,
    converged: bool,
}

impl Partition {
    pub fn new(
        clusters: Vec<Cluster>,
        threshold: Kilometers,
        passes: usize,
        converged: bool,
    ) -> Self {
        Self {
            clusters,
            threshold,
            passes,
            converged,
        }
    }
    /// Nothing in, nothing out.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0., 0, true)
    }
    /// One cluster per point.
    pub fn singletons(points: &[Point]) -> Self {
        let clusters = points.iter().copied().map(Cluster::spawn).collect();
        Self::new(clusters, 0., 0, true)
    }
    /// All points in a single cluster.
    pub fn whole(points: &[Point]) -> Self {
        match points.is_empty() {
            true => Self::empty(),
            false => Self::new(vec![Cluster::from(points.to_vec())], 0., 0, true),
        }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }
    pub fn len(&self) -> usize {
        self.clusters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
    pub fn threshold(&self) -> Kilometers {
        self.threshold
    }
    pub fn passes(&self) -> usize {
        self.passes
    }
    pub fn converged(&self) -> bool {
        self.converged
    }
    /// Every assigned point, cluster by cluster.
    pub fn members(&self) -> impl Iterator<Item = &Point> {
        self.clusters.iter().flat_map(|c| c.members().iter())
    }
    /// Centroids in cluster order.
    pub fn centroids(&self) -> impl Iterator<Item = Point> + '_ {
        self.clusters.iter().map(Cluster::centroid)
    }
    /// Display records, one per cluster.
    pub fn markers(&self) -> Vec<Marker> {
        self.clusters.iter().map(Marker::from).collect()
    }
    /// Promotes a best-effort result to [`ClusterError::NonConvergence`].
    pub fn converged_or_err(self) -> Result<Self, ClusterError> {
        match self.converged {
            true => Ok(self),
            false => Err(ClusterError::NonConvergence {
                passes: self.passes,
                clusters: self.len(),
            }),
        }
    }
}

impl IntoIterator for Partition {
    type Item = Cluster;
    type IntoIter = std::vec::IntoIter<Cluster>;
    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

/// Trivial partition a caller falls back on when clustering fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Fallback {
    /// One cluster per point.
    Singletons,
    /// Every point in one cluster.
    Whole,
}

impl Fallback {
    pub fn apply(&self, points: &[Point]) -> Partition {
        match self {
            Self::Singletons => Partition::singletons(points),
            Self::Whole => Partition::whole(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![Point::new(0., 0.), Point::new(2., 2.), Point::new(4., 4.)]
    }

    #[test]
    fn singletons_fallback() {
        let partition = Fallback::Singletons.apply(&points());
        assert_eq!(partition.len(), 3);
        assert!(partition.clusters().iter().all(|c| c.len() == 1));
        assert!(partition.clusters().iter().all(|c| c.members()[0] == c.centroid()));
    }

    #[test]
    fn whole_fallback() {
        let partition = Fallback::Whole.apply(&points());
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.clusters()[0].centroid(), Point::new(2., 2.));
        assert_eq!(partition.members().count(), 3);
    }

    #[test]
    fn whole_of_nothing_is_empty() {
        assert!(Fallback::Whole.apply(&[]).is_empty());
    }

    #[test]
    fn unconverged_promotes_to_error() {
        let partition = Partition::new(vec![Cluster::spawn(Point::new(1., 1.))], 0., 9, false);
        assert_eq!(
            partition.converged_or_err(),
            Err(ClusterError::NonConvergence {
                passes: 9,
                clusters: 1
            })
        );
        assert!(Partition::empty().converged_or_err().is_ok());
    }
}
