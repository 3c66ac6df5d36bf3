//! Command-line front end: registry JSON in, partition or markers JSON out.

use super::*;
use anyhow::Context;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cluster geodetic coordinates with an adaptive threshold", long_about = None)]
pub struct Args {
    /// JSON file of registry nodes or [lat, lon] pairs; stdin when absent
    pub input: Option<std::path::PathBuf>,
    /// Multiplier on the sequential-distance stdev (smaller = more clusters)
    #[arg(short, long, default_value_t = FRONTEND_BIAS)]
    pub bias: f64,
    /// Seed for picking the first centroid
    #[arg(short, long, conflicts_with = "index")]
    pub seed: Option<u64>,
    /// Exact input index of the first centroid
    #[arg(short, long)]
    pub index: Option<usize>,
    /// Maximum assignment passes
    #[arg(short, long, default_value_t = MAX_PASSES)]
    pub passes: usize,
    /// Which clusters a point may join mid-pass
    #[arg(long, value_enum, default_value_t = Visibility::Online)]
    pub visibility: Visibility,
    /// Treat a missing convergence as a failure
    #[arg(long)]
    pub strict: bool,
    /// Partition to emit instead of failing
    #[arg(long, value_enum)]
    pub fallback: Option<Fallback>,
    /// Emit {lat, lng, weight, size} markers instead of full clusters
    #[arg(short, long)]
    pub markers: bool,
    /// Log per-pass progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn clusterer(&self) -> Clusterer {
        let seed = match (self.index, self.seed) {
            (Some(index), _) => Seed::Index(index),
            (None, Some(seed)) => Seed::Fixed(seed),
            (None, None) => Seed::Entropy,
        };
        Clusterer::default()
            .with_bias(self.bias)
            .with_passes(self.passes)
            .with_visibility(self.visibility)
            .with_seed(seed)
    }

    pub fn points(&self) -> anyhow::Result<Vec<Point>> {
        match self.input {
            Some(ref path) => std::fs::File::open(path)
                .with_context(|| format!("open {}", path.display()))
                .map(std::io::BufReader::new)
                .and_then(Registry::read),
            None => Registry::read(std::io::stdin().lock()),
        }
    }

    /// Clusters, applying strictness and the fallback policy.
    pub fn partition(&self, points: &[Point]) -> anyhow::Result<Partition> {
        let result = self
            .clusterer()
            .cluster(points)
            .and_then(|p| match self.strict {
                true => p.converged_or_err(),
                false => Ok(p),
            });
        match (result, self.fallback) {
            (Ok(partition), _) => Ok(partition),
            (Err(e), Some(fallback)) => {
                log::warn!("{:<32}{:<32}", "falling back", format!("{:?}: {}", fallback, e));
                Ok(fallback.apply(points))
            }
            (Err(e), None) => Err(e.into()),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let points = self.points()?;
        log::info!("{:<32}{:<32}", "loaded points", points.len());
        let partition = self.partition(&points)?;
        let json = match self.markers {
            true => serde_json::to_string_pretty(&partition.markers())?,
            false => serde_json::to_string_pretty(&partition)?,
        };
        let ref mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        Ok(())
    }
}
