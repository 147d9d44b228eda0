//! Times allocation-heavy construction of fresh string-keyed float
//! mappings, one per iteration, each dropped immediately.

use std::hint::black_box;

use clap::Parser;
use vmbench_harness::{Stopwatch, report_seconds};
use vmbench_workloads::alloc;

#[derive(Parser)]
#[command(
    name = "mapping-alloc",
    version,
    about = "Time repeated construction of string-keyed random float mappings"
)]
struct Args {
    /// Number of mappings to build
    #[arg(short, long, default_value_t = 10_000)]
    iterations: u32,

    /// Entries per mapping
    #[arg(short, long, default_value_t = 1_000)]
    len: usize,
}

fn main() {
    vmbench_cli::init_diagnostics();
    let args = Args::parse();

    let stopwatch = Stopwatch::start();
    for _ in 0..args.iterations {
        black_box(alloc::float_mapping(args.len));
    }
    report_seconds(stopwatch.elapsed());
}
