//! Times dynamic method dispatch: twenty name-routed accessor calls per
//! iteration, results discarded.

use std::hint::black_box;

use anyhow::Result;
use clap::Parser;
use vmbench_harness::{Stopwatch, report_seconds};
use vmbench_workloads::{DispatchObject, METHOD_NAMES};

#[derive(Parser)]
#[command(
    name = "dispatch",
    version,
    about = "Time name-routed method dispatch over a twenty-field receiver"
)]
struct Args {
    /// Iterations over the full method sequence
    #[arg(short, long, default_value_t = 50_000)]
    iterations: u32,
}

fn main() -> Result<()> {
    vmbench_cli::init_diagnostics();
    let args = Args::parse();

    let object = DispatchObject::new();

    let stopwatch = Stopwatch::start();
    for _ in 0..args.iterations {
        for name in METHOD_NAMES {
            // The fixed sequence only hits explicit methods; the error arm
            // exists for the routing contract, not for this loop.
            black_box(object.call(name)?);
        }
    }
    report_seconds(stopwatch.elapsed());
    Ok(())
}
