//! Times allocation-heavy construction of fresh float sequences, one per
//! iteration, each dropped immediately.

use std::hint::black_box;

use clap::Parser;
use vmbench_harness::{Stopwatch, report_seconds};
use vmbench_workloads::alloc;

#[derive(Parser)]
#[command(
    name = "sequence-alloc",
    version,
    about = "Time repeated construction of random float sequences"
)]
struct Args {
    /// Number of sequences to build
    #[arg(short, long, default_value_t = 10_000)]
    iterations: u32,

    /// Elements per sequence
    #[arg(short, long, default_value_t = 1_000)]
    len: usize,
}

fn main() {
    vmbench_cli::init_diagnostics();
    let args = Args::parse();

    let stopwatch = Stopwatch::start();
    for _ in 0..args.iterations {
        // Bound for the iteration, then dropped; reclamation is part of
        // the measured workload.
        black_box(alloc::float_sequence(args.len));
    }
    report_seconds(stopwatch.elapsed());
}
