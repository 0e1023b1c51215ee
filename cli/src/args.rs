use std::path::PathBuf;

use clap::Parser;
use xorshift64_core_rs::Width;

/// Print xorshift values.
///
/// With no arguments, prints two values from seed 1 followed by one value
/// from seed 2.
#[derive(Debug, Parser)]
#[command(name = "xorshift64", version)]
pub struct Opt {
    #[arg(
        long,
        help = "Seed a single stream instead of running the demo",
        value_name = "SEED",
        conflicts_with = "config"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        help = "Number of values to draw from --seed",
        value_name = "COUNT",
        default_value = "1",
        requires = "seed"
    )]
    pub count: usize,

    #[arg(
        long,
        help = "Integer semantics: u64 or int32",
        value_name = "WIDTH",
        default_value = "u64",
        conflicts_with = "config"
    )]
    pub width: Width,

    #[arg(long, help = "Reject seeds that leave the generator stuck at zero")]
    pub strict: bool,

    #[arg(
        long,
        help = "Path to a JSON generator config (sets its own seed and width)",
        value_name = "CONFIG"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print a JSON snapshot of the last generator after its values")]
    pub checkpoint: bool,
}
