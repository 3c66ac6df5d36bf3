use super::*;

/// Errors raised while clustering a point set.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Too few points to measure a spread of sequential distances.
    InvalidInput(usize),
    /// A latitude or longitude is NaN or infinite.
    MalformedCoordinate { index: usize, point: Point },
    /// An explicit initial centroid index past the end of the input.
    SeedOutOfRange { index: usize, len: usize },
    /// The pass cap was reached before the clusters settled.
    NonConvergence { passes: usize, clusters: usize },
}

impl ClusterError {
    /// Whether the caller handed over an unusable point set.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::NonConvergence { .. })
    }
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(n) => {
                write!(f, "invalid input: {} point(s), need at least 2", n)
            }
            Self::MalformedCoordinate { index, point } => {
                write!(f, "malformed coordinate at index {}: {}", index, point)
            }
            Self::SeedOutOfRange { index, len } => {
                write!(f, "initial index {} out of range for {} points", index, len)
            }
            Self::NonConvergence { passes, clusters } => write!(
                f,
                "no convergence after {} passes ({} clusters)",
                passes, clusters
            ),
        }
    }
}

impl std::error::Error for ClusterError {}
