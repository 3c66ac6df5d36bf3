use super::*;

/// Multiplier on the sequential-distance spread.
///
/// Smaller values yield more, tighter clusters. NaN (and absence) fall back
/// to [`DEFAULT_BIAS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bias(f64);

impl Bias {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self(DEFAULT_BIAS)
    }
}
impl From<f64> for Bias {
    fn from(bias: f64) -> Self {
        match bias.is_nan() {
            true => Self::default(),
            false => Self(bias),
        }
    }
}
impl From<Option<f64>> for Bias {
    fn from(bias: Option<f64>) -> Self {
        bias.map(Self::from).unwrap_or_default()
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Admission radius derived from the input itself.
///
/// Distances are taken between *positionally* consecutive points, i.e.
/// `points[i]` against `points[i - 1]` in the order given, not between
/// spatial neighbors. This approximates typical local spacing without a
/// sort, and makes the threshold depend on input order.
///
/// The radius is the population standard deviation of those distances times
/// the [`Bias`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    mean: Kilometers,
    stdev: Kilometers,
    bias: Bias,
}

impl Threshold {
    /// Fails with [`ClusterError::InvalidInput`] below two points, where the
    /// distance sequence is empty and the statistics are undefined.
    pub fn estimate(points: &[Point], bias: impl Into<Bias>) -> Result<Self, ClusterError> {
        if points.len() < 2 {
            return Err(ClusterError::InvalidInput(points.len()));
        }
        let steps = Self::steps(points).collect::<Vec<Kilometers>>();
        let n = steps.len() as f64;
        let mean = steps.iter().sum::<Kilometers>() / n;
        let variance = steps
            .iter()
            .map(|d| (d - mean) * (d - mean))
            .sum::<Kilometers>()
            / n;
        Ok(Self {
            mean,
            stdev: variance.sqrt(),
            bias: bias.into(),
        })
    }
    /// Distances between each point and its predecessor in input order.
    pub fn steps(points: &[Point]) -> impl Iterator<Item = Kilometers> + '_ {
        points.windows(2).map(|w| w[1].distance(&w[0]))
    }
    /// The admission radius. Zero spread yields zero regardless of bias.
    pub fn value(&self) -> Kilometers {
        if self.stdev == 0. {
            0.
        } else {
            self.stdev * self.bias.value()
        }
    }
    pub fn mean(&self) -> Kilometers {
        self.mean
    }
    pub fn stdev(&self) -> Kilometers {
        self.stdev
    }
    pub fn bias(&self) -> Bias {
        self.bias
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2}km (mean {:.2} stdev {:.2} bias {})",
            self.value(),
            self.mean,
            self.stdev,
            self.bias
        )
    }
}
