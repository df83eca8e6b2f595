//! SriGen CLI - Subresource Integrity digest generation
//!
//! Digests files, directories and remote assets into SRI records, or
//! compares two targets by sha256 digest.

use clap::Parser;
use srigen::config::{CliArgs, HashSelection};
use srigen::core::{compare, validate_compare_targets, Generator};
use srigen::error::Result;
use srigen::output::write_report;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CliArgs::parse();

    // Initialize logging; -v raises the default level to debug
    let filter = match std::env::var_os("RUST_LOG") {
        Some(_) => EnvFilter::from_default_env(),
        None if args.verbose > 0 => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    if args.compare {
        return run_compare(args);
    }

    let generator = Generator::new(args.algorithm);
    let records = generator.generate(&args.targets)?;

    write_report(&records, args.out.as_deref())
}

fn run_compare(args: &CliArgs) -> Result<()> {
    validate_compare_targets(&args.targets)?;

    // Comparison is always sha256, whatever -a says
    let generator = Generator::new(HashSelection::Sha256);
    let outcome = compare(&generator, &args.targets[0], &args.targets[1])?;

    println!("{}  {}", outcome.digest_a, args.targets[0]);
    println!("{}  {}", outcome.digest_b, args.targets[1]);

    if !outcome.equal {
        eprintln!("digests do not match");
        std::process::exit(2);
    }

    println!("digests match");
    Ok(())
}
