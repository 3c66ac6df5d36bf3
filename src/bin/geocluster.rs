//! Geocluster Binary
//!
//! Clusters registry coordinates and prints the partition as JSON.
//!
//! Options: --bias, --seed, --index, --passes, --visibility, --strict, --fallback, --markers

use clap::Parser;
use geocluster::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    geocluster::log(args.verbose);
    args.run()
}
