//! Print a quarter-wave sine table as a Rust array literal.
//!
//! Regenerates the constants behind `sin16::SINE16_TABLE` (pass `--truncate`
//! to reproduce them exactly) or tables for other index widths.
//!
//! ```text
//! cargo run -p sin16-demos --bin sine_table -- --index-width 4 --truncate
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use sin16::QuarterWaveTable;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a quarter-wave sine table as a Rust literal")]
struct Args {
    /// Table index width in bits (0-8); the table holds 2^width + 1 entries
    #[arg(long, default_value_t = 4)]
    index_width: u32,
    /// Truncate samples toward zero instead of rounding to nearest
    #[arg(long)]
    truncate: bool,
    /// Name of the emitted static
    #[arg(long, default_value = "SINE16_TABLE")]
    name: String,
}

fn render<const N: usize>(truncate: bool) -> String {
    let table = if truncate {
        QuarterWaveTable::<N>::generate_truncated()
    } else {
        QuarterWaveTable::<N>::generate()
    };
    table.to_string()
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let body = match args.index_width {
        0 => render::<2>(args.truncate),
        1 => render::<3>(args.truncate),
        2 => render::<5>(args.truncate),
        3 => render::<9>(args.truncate),
        4 => render::<17>(args.truncate),
        5 => render::<33>(args.truncate),
        6 => render::<65>(args.truncate),
        7 => render::<129>(args.truncate),
        8 => render::<257>(args.truncate),
        w => bail!("unsupported index width {w}, expected 0-8"),
    };
    let len = (1usize << args.index_width) + 1;
    info!(len, truncate = args.truncate, "rendering quarter-wave table");

    println!("pub static {}: [i16; {}] = [", args.name, len);
    for line in body.lines() {
        println!("    {line}");
    }
    println!("];");
    Ok(())
}
