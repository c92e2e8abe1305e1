//! Timing probe for a seeded dimension sweep.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does a
//!   ten-dimension sweep at 100k samples per dimension take?"
//! - Print the series the way downstream consumers receive it, one
//!   dimension/volume pair per line.

use std::time::Instant;

use nball::estimate::sweep;

fn main() {
    let start = Instant::now();
    let series = sweep(10, 100_000, 42).expect("sweep succeeds");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    for entry in &series {
        println!("The {}-ball has volume {}", entry.dimension, entry.volume);
    }
    println!("sweep_time_ms={elapsed:.3}");
}
