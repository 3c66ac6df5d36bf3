//! Assignment passes and the bounded convergence loop.

use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Which clusters a point may join during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Visibility {
    /// Clusters spawned earlier in the same pass are candidates for later
    /// points. Assignment is online within a pass and batch across passes.
    #[default]
    Online,
    /// Only clusters alive at the start of the pass are candidates.
    Batch,
}

/// How the first centroid is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Seed {
    /// Uniformly random index from thread-local entropy.
    #[default]
    Entropy,
    /// Uniformly random index from a `SmallRng` seeded with this value.
    Fixed(u64),
    /// This exact input index.
    Index(usize),
}

/// Per-run configuration and driver for adaptive threshold clustering.
///
/// A run validates the input, derives a [`Threshold`] once, seeds a single
/// empty cluster on one input point, then repeats [`Clusterer::pass`] until
/// a pass neither spawns a cluster nor moves a centroid. The loop gives up
/// after `passes` passes and returns the last partition flagged as not
/// converged, since points sitting near the admission radius can oscillate.
///
/// Runs share nothing. The only randomness is the first centroid, chosen
/// through the configured [`Seed`] or a caller-supplied [`Rng`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clusterer {
    bias: Bias,
    passes: usize,
    visibility: Visibility,
    seed: Seed,
}

impl Default for Clusterer {
    fn default() -> Self {
        Self {
            bias: Bias::default(),
            passes: MAX_PASSES,
            visibility: Visibility::default(),
            seed: Seed::default(),
        }
    }
}

impl Clusterer {
    pub fn with_bias(mut self, bias: impl Into<Bias>) -> Self {
        self.bias = bias.into();
        self
    }
    /// At least one pass always runs.
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes.max(1);
        self
    }
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
    pub fn bias(&self) -> Bias {
        self.bias
    }
    pub fn passes(&self) -> usize {
        self.passes
    }
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl Clusterer {
    /// Clusters with the configured [`Seed`].
    pub fn cluster(&self, points: &[Point]) -> Result<Partition, ClusterError> {
        match self.seed {
            Seed::Index(index) => self.cluster_from(points, index),
            Seed::Fixed(seed) => self.cluster_with(points, &mut SmallRng::seed_from_u64(seed)),
            Seed::Entropy => self.cluster_with(points, &mut rand::rng()),
        }
    }

    /// Clusters with the first centroid drawn uniformly from `rng`.
    pub fn cluster_with<R>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<Partition, ClusterError>
    where
        R: Rng,
    {
        Self::validate(points)?;
        match points.len() {
            0 | 1 => self.cluster_from(points, 0),
            n => self.cluster_from(points, rng.random_range(0..n)),
        }
    }

    /// Clusters with the first centroid at `points[index]`.
    ///
    /// Fewer than two points cannot produce a threshold, so they short-circuit
    /// to an empty partition or a single singleton cluster.
    pub fn cluster_from(
        &self,
        points: &[Point],
        index: usize,
    ) -> Result<Partition, ClusterError> {
        Self::validate(points)?;
        match points.len() {
            0 => return Ok(Partition::empty()),
            1 => return Ok(Partition::singletons(points)),
            n if index >= n => return Err(ClusterError::SeedOutOfRange { index, len: n }),
            _ => {}
        }
        let threshold = Threshold::estimate(points, self.bias)?;
        let radius = threshold.value();
        log::info!("{:<32}{:<32}", "clustering points", points.len());
        log::debug!("{:<32}{:<32}", "admission threshold", threshold);
        let mut clusters = vec![Cluster::seed(points[index])];
        let mut passes = 0;
        let converged = loop {
            passes += 1;
            let changed = self.pass(points, &mut clusters, radius);
            log::debug!("{:<32}{:<32}", format!("pass {:>4}", passes), clusters.len());
            if !changed {
                break true;
            }
            if passes >= self.passes {
                break false;
            }
        };
        match converged {
            true => log::info!("{:<32}{:<32}", "clusters stable", clusters.len()),
            false => log::warn!(
                "{:<32}{:<32}",
                "convergence not confirmed",
                format!("{} clusters after {} passes", clusters.len(), passes)
            ),
        }
        Ok(Partition::new(clusters, radius, passes, converged))
    }

    /// Clusters independent point sets in parallel, one result per set.
    ///
    /// With [`Seed::Fixed`] each set gets its own seed derived from the base
    /// seed and the set's position, so results do not depend on scheduling.
    pub fn cluster_many(&self, sets: &[Vec<Point>]) -> Vec<Result<Partition, ClusterError>> {
        sets.par_iter()
            .enumerate()
            .map(|(i, points)| self.derive(i).cluster(points))
            .collect()
    }

    /// One full sweep over `clusters`. Returns whether anything changed.
    ///
    /// 1. Clear members, keeping centroids
    /// 2. Assign each point, in input order, to its nearest visible centroid
    ///    if closer than `radius` (or exactly on it), else spawn a cluster
    /// 3. Drop clusters left without members
    /// 4. Move every centroid to its members' mean
    pub fn pass(
        &self,
        points: &[Point],
        clusters: &mut Vec<Cluster>,
        radius: Kilometers,
    ) -> bool {
        clusters.iter_mut().for_each(Cluster::clear);
        let spawned = self.assign(points, clusters, radius);
        clusters.retain(|c| !c.is_empty());
        let moved = clusters
            .iter_mut()
            .fold(false, |moved, c| c.recenter() || moved);
        spawned || moved
    }

    fn assign(&self, points: &[Point], clusters: &mut Vec<Cluster>, radius: Kilometers) -> bool {
        let frozen = clusters.len();
        let mut spawned = false;
        for point in points {
            let visible = match self.visibility {
                Visibility::Online => clusters.len(),
                Visibility::Batch => frozen,
            };
            match Self::nearest(point, &clusters[..visible]) {
                (Some(j), d) if d < radius || d == 0. => clusters[j].absorb(*point),
                _ => {
                    clusters.push(Cluster::spawn(*point));
                    spawned = true;
                }
            }
        }
        spawned
    }

    /// Closest centroid by strict `<` scan from infinity, so ties go to the
    /// lowest index and a point with no finite distance matches nothing.
    fn nearest(point: &Point, clusters: &[Cluster]) -> (Option<usize>, Kilometers) {
        clusters
            .iter()
            .map(|c| point.distance(&c.centroid()))
            .enumerate()
            .fold((None, Kilometers::INFINITY), |(best, min), (j, d)| {
                if d < min { (Some(j), d) } else { (best, min) }
            })
    }

    fn validate(points: &[Point]) -> Result<(), ClusterError> {
        match points.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(ClusterError::MalformedCoordinate {
                index,
                point: points[index],
            }),
            None => Ok(()),
        }
    }

    fn derive(&self, i: usize) -> Self {
        use std::hash::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        match self.seed {
            Seed::Fixed(seed) => {
                let ref mut hasher = DefaultHasher::default();
                (seed, i).hash(hasher);
                self.with_seed(Seed::Fixed(hasher.finish()))
            }
            Seed::Index(_) | Seed::Entropy => *self,
        }
    }
}
