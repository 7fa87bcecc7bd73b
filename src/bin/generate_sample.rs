use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a sample sales CSV for trying out csv-inspector
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to write the file
    #[arg(long, default_value = "sales_sample.csv")]
    output: PathBuf,

    /// Number of data rows
    #[arg(long, default_value_t = 200)]
    rows: usize,

    /// PRNG seed; the same seed gives the same file
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct SalesRow {
    region: &'static str,
    units: u32,
    price: f64,
    revenue: f64,
    discount_pct: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn sample_rows(count: usize, rng: &mut SimpleRng) -> Vec<SalesRow> {
    // (region, base price, typical order size)
    let regions = [
        ("north", 12.0, 40.0),
        ("south", 9.5, 65.0),
        ("east", 15.0, 25.0),
        ("west", 11.0, 50.0),
    ];

    (0..count)
        .map(|i| {
            let (region, base_price, order_size) = regions[i % regions.len()];
            let units = rng.range(0.5, 1.5) * order_size;
            let units = units.round().max(1.0) as u32;
            let price = round2(base_price * rng.range(0.9, 1.1));
            let discount_pct = round2(rng.range(0.0, 15.0));
            let revenue = round2(units as f64 * price * (1.0 - discount_pct / 100.0));
            SalesRow {
                region,
                units,
                price,
                revenue,
                discount_pct,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = SimpleRng::new(args.seed);
    let rows = sample_rows(args.rows, &mut rng);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row).context("writing sample row")?;
    }
    writer.flush().context("flushing sample file")?;
    log::info!("seed {} produced {} rows", args.seed, rows.len());

    println!("Wrote {} rows to {}", rows.len(), args.output.display());
    Ok(())
}
