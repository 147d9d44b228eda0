//! Times repeated mutation of one switch through chained toggle calls:
//! ten toggle-toggle-read groups per outer iteration.

use std::hint::black_box;

use clap::Parser;
use vmbench_harness::{Stopwatch, report_seconds};
use vmbench_workloads::Switch;

#[derive(Parser)]
#[command(
    name = "mutation-chain",
    version,
    about = "Time chained toggle mutation of a single switch object"
)]
struct Args {
    /// Outer loop iterations
    #[arg(short, long, default_value_t = 100_000)]
    iterations: u32,
}

fn main() {
    vmbench_cli::init_diagnostics();
    let args = Args::parse();

    let mut switch = Switch::new(true);

    let stopwatch = Stopwatch::start();
    for _ in 0..args.iterations {
        // The ten chain groups are unrolled so only the outer loop's
        // control flow sits inside the measured region.
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
        black_box(switch.toggle().toggle().state());
    }
    report_seconds(stopwatch.elapsed());

    // Every toggle-toggle pair round-trips, so the switch ends where it
    // started.
    tracing::debug!(state = switch.state(), "final switch state");
}
