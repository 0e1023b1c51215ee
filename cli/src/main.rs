//! `xorshift64` command-line demo
//!
//! Values go to stdout, one per line. Logs go to stderr, filtered by
//! `XORSHIFT64_LOG` (default `warn`).

mod args;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use xorshift64_core_rs::{
    GeneratorConfig, GeneratorSnapshot, Width, Xorshift, Xorshift64, Xorshift64Int32,
};

use crate::args::Opt;

fn init_logging() {
    let format = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let filter =
        EnvFilter::try_from_env("XORSHIFT64_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}

/// Build one generator from `config`, print its values, optionally its snapshot
fn run_stream<G: Xorshift>(config: &GeneratorConfig, checkpoint: bool) -> Result<()> {
    let mut rng: G = config
        .build()
        .with_context(|| format!("Failed to build generator for seed {}", config.seed))?;

    debug!(seed = config.seed, draws = config.draws, "drawing");
    for _ in 0..config.draws {
        println!("{}", rng.step());
    }

    if checkpoint {
        let snapshot = GeneratorSnapshot::capture(&rng, config.draws as u64);
        println!("{}", snapshot.to_json()?);
    }
    Ok(())
}

fn run(config: &GeneratorConfig, checkpoint: bool) -> Result<()> {
    match config.width {
        Width::U64 => run_stream::<Xorshift64>(config, checkpoint),
        Width::Int32 => run_stream::<Xorshift64Int32>(config, checkpoint),
    }
}

/// Streams of the demonstration harness at the requested width
fn demo_configs(opt: &Opt) -> [GeneratorConfig; 2] {
    GeneratorConfig::demo(opt.width, opt.strict)
}

/// Seed 1 advanced twice, then an independent seed 2 advanced once
fn run_demo(opt: &Opt) -> Result<()> {
    let [first, second] = demo_configs(opt);
    run(&first, false)?;
    run(&second, opt.checkpoint)
}

fn load_config(opt: &Opt) -> Result<Option<GeneratorConfig>> {
    if let Some(path) = &opt.config {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = GeneratorConfig::from_json(&json)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.strict |= opt.strict;
        return Ok(Some(config));
    }

    Ok(opt.seed.map(|seed| GeneratorConfig {
        seed,
        width: opt.width,
        strict: opt.strict,
        draws: opt.count,
    }))
}

fn main() -> Result<()> {
    init_logging();
    let opt = Opt::parse();

    match load_config(&opt)? {
        Some(config) => {
            info!(seed = config.seed, width = %config.width, "running single stream");
            run(&config, opt.checkpoint)
        }
        None => {
            info!(width = %opt.width, "running demo");
            run_demo(&opt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Opt::command().debug_assert();
    }

    #[test]
    fn test_no_args_runs_demo() {
        let opt = Opt::parse_from(["xorshift64"]);
        assert!(load_config(&opt).unwrap().is_none());
        assert_eq!(opt.width, Width::U64);
    }

    #[test]
    fn test_seed_flags_become_config() {
        let opt = Opt::parse_from([
            "xorshift64", "--seed", "5", "--count", "3", "--width", "int32", "--strict",
        ]);
        let config = load_config(&opt).unwrap().unwrap();
        assert_eq!(
            config,
            GeneratorConfig {
                seed: 5,
                width: Width::Int32,
                strict: true,
                draws: 3,
            }
        );
    }

    #[test]
    fn test_demo_configs_in_run_order() {
        for width in [Width::U64, Width::Int32] {
            let opt = Opt::parse_from(["xorshift64", "--width", width.to_string().as_str()]);
            let [first, second] = demo_configs(&opt);

            assert_eq!((first.seed, first.draws, first.width), (1, 2, width));
            assert_eq!((second.seed, second.draws, second.width), (2, 1, width));
            assert!(run_demo(&opt).is_ok());
        }
    }

    #[test]
    fn test_strict_demo_configs() {
        let opt = Opt::parse_from(["xorshift64", "--strict"]);
        assert!(demo_configs(&opt).iter().all(|config| config.strict));
    }

    #[test]
    fn test_config_file_sets_width() {
        let path = std::env::temp_dir().join(format!(
            "xorshift64-cli-width-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"seed": 3, "width": "int32"}"#).unwrap();

        let opt = Opt::parse_from(["xorshift64", "--config", path.to_str().unwrap()]);
        let config = load_config(&opt).unwrap().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, 3);
        assert_eq!(config.width, Width::Int32);
    }

    #[test]
    fn test_width_conflicts_with_config() {
        let result = Opt::try_parse_from([
            "xorshift64", "--config", "generator.json", "--width", "int32",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_count_requires_seed() {
        assert!(Opt::try_parse_from(["xorshift64", "--count", "3"]).is_err());
    }

    #[test]
    fn test_bad_width_rejected() {
        assert!(Opt::try_parse_from(["xorshift64", "--width", "u8"]).is_err());
    }

    #[test]
    fn test_strict_zero_seed_fails() {
        let opt = Opt::parse_from(["xorshift64", "--seed", "0", "--strict"]);
        let config = load_config(&opt).unwrap().unwrap();
        assert!(run(&config, false).is_err());
    }
}
