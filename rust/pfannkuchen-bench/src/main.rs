//! Pfannkuchen Benchmark Runner
//!
//! Standalone binary timing the serial generator and the block runner
//! across sizes, with text/JSON/CSV output and peak memory tracking.
//!
//! Usage: `pfannkuchen-bench [text|csv|json] [iterations] [max-n]`

use pfannkuchen_core::{pfannkuchen, run_blocks, PermSize, Tally, DEFAULT_BLOCKS};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub n: usize,
    pub permutations: u64,
    pub checksum: i64,
    pub max_flips: u32,
    pub duration_ms: f64,
    pub permutations_per_sec: f64,
    pub peak_rss_kb: Option<u64>,
    pub iterations: u32,
}

/// Read peak RSS from /proc/self/status on Linux.
/// Returns None on non-Linux or if the file cannot be parsed.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        use std::fs;

        let status = fs::read_to_string("/proc/self/status").ok()?;
        for line in status.lines() {
            if line.starts_with("VmHWM:") {
                // Format: "VmHWM:   123456 kB"
                return line.split_whitespace().nth(1)?.parse::<u64>().ok();
            }
        }
        None
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn serial(size: PermSize) -> Tally {
    pfannkuchen(size)
}

fn blocked(size: PermSize) -> Tally {
    run_blocks(size, DEFAULT_BLOCKS)
}

/// Time `iterations` runs of `kernel` after a short warm up.
fn run_bench(
    name: &str,
    size: PermSize,
    kernel: fn(PermSize) -> Tally,
    iterations: u32,
) -> BenchResult {
    kernel(size);

    let mut total = Duration::ZERO;
    let mut tally = Tally::default();
    for _ in 0..iterations {
        let start = Instant::now();
        tally = kernel(size);
        total += start.elapsed();
    }

    let avg = total.as_secs_f64() / iterations as f64;
    BenchResult {
        name: name.to_string(),
        n: size.get(),
        permutations: tally.permutations,
        checksum: tally.checksum,
        max_flips: tally.max_flips,
        duration_ms: avg * 1000.0,
        permutations_per_sec: tally.permutations as f64 / avg,
        peak_rss_kb: peak_rss_kb(),
        iterations,
    }
}

fn print_csv_header() {
    println!("name,n,permutations,checksum,max_flips,duration_ms,perms_per_sec,peak_rss_kb,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{},{},{},{:.3},{:.0},{},{}",
        r.name,
        r.n,
        r.permutations,
        r.checksum,
        r.max_flips,
        r.duration_ms,
        r.permutations_per_sec,
        r.peak_rss_kb.map_or("N/A".to_string(), |v| v.to_string()),
        r.iterations,
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let output_format = args.get(1).map(|s| s.as_str()).unwrap_or("text");
    let iterations: u32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .filter(|&i| i > 0)
        .unwrap_or(5);
    let max_n: i64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(10);

    let mut results: Vec<BenchResult> = Vec::new();
    for n in 7..=max_n {
        let size = match PermSize::new(n) {
            Ok(size) => size,
            Err(e) => {
                eprintln!("Warning: {}, skipping", e);
                continue;
            }
        };
        results.push(run_bench("serial", size, serial, iterations));
        results.push(run_bench("blocks", size, blocked, iterations));
    }

    match output_format {
        "csv" => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        "json" => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: serializing results: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            println!("Pfannkuchen Benchmarks");
            println!("======================");
            println!();
            for r in &results {
                println!(
                    "[{}/n={}] {:.3}ms avg ({} iters) | {:.0} perms/s | checksum {} | max flips {} | RSS: {}",
                    r.name,
                    r.n,
                    r.duration_ms,
                    r.iterations,
                    r.permutations_per_sec,
                    r.checksum,
                    r.max_flips,
                    r.peak_rss_kb
                        .map_or("N/A".to_string(), |v| format!("{}kB", v)),
                );
            }
        }
    }
}
