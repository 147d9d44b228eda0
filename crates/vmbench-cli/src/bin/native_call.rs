//! Times a single native `fib` call through the foreign-call boundary.
//!
//! Prints the returned value, then the elapsed seconds. A missing library
//! aborts before anything reaches stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use vmbench_ffi::{FibLibrary, default_library_path};
use vmbench_harness::{Stopwatch, report_seconds};

#[derive(Parser)]
#[command(
    name = "native-call",
    version,
    about = "Time one native fib() call across the foreign-call boundary"
)]
struct Args {
    /// Shared library to load; relative paths resolve against the working directory
    #[arg(long, default_value_os_t = default_library_path())]
    library: PathBuf,

    /// Argument passed to the native routine
    #[arg(short, long, default_value_t = 35)]
    n: i64,
}

fn main() -> Result<()> {
    vmbench_cli::init_diagnostics();
    let args = Args::parse();

    let library = FibLibrary::load(&args.library)?;
    tracing::debug!(path = %args.library.display(), "native library loaded");

    let stopwatch = Stopwatch::start();
    let result = library.fib(args.n);
    println!("{result}");
    report_seconds(stopwatch.elapsed());
    Ok(())
}
