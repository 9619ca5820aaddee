//! Accuracy and speed of `sin16::sine` against the platform `sin`.
//!
//! Sweeps every 14-bit angle to report the approximation error, then times
//! `--iters` calls of each implementation.
//!
//! ```text
//! cargo run --release -p sin16-demos --bin sine_bench -- --iters 50000000
//! ```

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use clap::Parser;
use sin16::{angle_to_radians, init_table, sine, Angle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SCALE: f64 = 32767.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Measure sin16 error and speed against libm sin")]
struct Args {
    /// Calls per timed run
    #[arg(long, default_value_t = 10_000_000)]
    iters: u32,
    /// Only run the error sweep
    #[arg(long)]
    error_only: bool,
}

/// Error of the approximation over the whole angle domain.
#[derive(Debug)]
struct ErrorStats {
    max_abs: f64,
    mean_abs: f64,
    worst: Angle,
}

fn check_error() -> ErrorStats {
    let mut max_abs = 0.0;
    let mut total = 0.0;
    let mut worst = Angle::ZERO;
    for raw in 0..0x4000u16 {
        let angle = Angle::new(raw);
        let exact = SCALE * angle_to_radians(angle).sin();
        let err = (sine(angle) as f64 - exact).abs();
        total += err;
        if err > max_abs {
            max_abs = err;
            worst = angle;
        }
    }
    ErrorStats {
        max_abs,
        mean_abs: total / 16384.0,
        worst,
    }
}

/// Time `iters` calls of `f` over a sweeping angle.
fn bench<F>(name: &str, iters: u32, mut f: F) -> Duration
where
    F: FnMut(Angle) -> i32,
{
    let start = Instant::now();
    let mut acc = 0i32;
    for i in 0..iters {
        acc = acc.wrapping_add(f(black_box(Angle::new(i as u16))));
    }
    let elapsed = start.elapsed();
    black_box(acc);
    debug!(name, ?elapsed, "bench run complete");
    elapsed
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    init_table();

    let stats = check_error();
    info!(
        max_abs = stats.max_abs,
        mean_abs = stats.mean_abs,
        worst = stats.worst.raw(),
        "error sweep over 16384 angles"
    );
    println!(
        "max error {:.2} ({:.4}%) at angle {:#06x}, mean error {:.2}",
        stats.max_abs,
        stats.max_abs * 100.0 / SCALE,
        stats.worst.raw(),
        stats.mean_abs
    );
    if args.error_only {
        return Ok(());
    }

    ensure!(args.iters > 0, "--iters must be positive");

    let runs: [(&str, Duration); 3] = [
        ("sin16", bench("sin16", args.iters, |a| sine(a) as i32)),
        (
            "f64::sin",
            bench("f64::sin", args.iters, |a| (SCALE * angle_to_radians(a).sin()) as i32),
        ),
        (
            "f32::sin",
            bench("f32::sin", args.iters, |a| {
                (SCALE as f32 * (angle_to_radians(a) as f32).sin()) as i32
            }),
        ),
    ];

    for (name, elapsed) in runs {
        let ns = elapsed.as_nanos() as f64 / args.iters as f64;
        println!("{name:>10}: {:>9.3} s total, {ns:>7.2} ns/call", elapsed.as_secs_f64());
    }
    Ok(())
}
