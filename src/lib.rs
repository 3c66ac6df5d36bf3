//! Adaptive threshold clustering of geodetic coordinates.
//!
//! Groups latitude/longitude pairs into an unknown number of clusters. The
//! admission radius is not supplied by the caller; it is derived from the
//! input itself as a multiple of the spread of consecutive point-to-point
//! distances.
//!
//! ## Pipeline
//!
//! 1. **Validate**: Reject non-finite coordinates before any distance is taken
//! 2. **Estimate**: Derive a [`Threshold`] from sequential haversine distances
//! 3. **Assign**: Sweep points into the nearest [`Cluster`], spawning new ones
//! 4. **Converge**: Repeat passes until nothing spawns or moves, up to a cap
//!
//! ## Core Types
//!
//! - [`Point`]: A coordinate in decimal degrees
//! - [`Cluster`]: A centroid and the points currently assigned to it
//! - [`Partition`]: The final disjoint, exhaustive grouping
//! - [`Clusterer`]: Per-run configuration and the convergence driver
//!
//! ## Boundaries
//!
//! - [`Registry`]: Parses node registry JSON into points
//! - [`Marker`]: Display record derived from a cluster
mod cluster;
mod clusterer;
mod error;
mod haversine;
mod marker;
mod partition;
mod point;
mod registry;
mod threshold;

#[cfg(feature = "cli")]
pub mod cli;

pub use cluster::*;
pub use clusterer::*;
pub use error::*;
pub use haversine::*;
pub use marker::*;
pub use partition::*;
pub use point::*;
pub use registry::*;
pub use tests::*;
pub use threshold::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Latitudes and longitudes in decimal degrees.
pub type Degrees = f64;
/// Great-circle distances and thresholds.
pub type Kilometers = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GEODESY
// ============================================================================
/// Mean Earth radius used by the haversine approximation.
pub const EARTH_RADIUS: Kilometers = 6371.0;
/// Distances are rounded to this many units per kilometer (two decimals).
pub const DISTANCE_PRECISION: f64 = 100.0;

// ============================================================================
// CLUSTERING
// Threshold = population stdev of sequential distances × bias.
// ============================================================================
/// Multiplier applied to the sequential-distance stdev when none is given.
pub const DEFAULT_BIAS: f64 = 1.0;
/// Bias used by the globe front end. Smaller means more, tighter clusters.
pub const FRONTEND_BIAS: f64 = 0.05;
/// Upper bound on assignment passes before giving up on convergence.
pub const MAX_PASSES: usize = 1000;

// ============================================================================
// DISPLAY
// ============================================================================
/// Member count is divided by this to obtain a marker's altitude.
pub const MARKER_SCALE: f64 = 100.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays machine readable.
/// Verbose mode lowers the filter from INFO to DEBUG.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    // a second init (e.g. from a test harness) keeps the first logger
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}
