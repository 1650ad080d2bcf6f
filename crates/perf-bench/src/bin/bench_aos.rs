use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let aos_data: EdgeAOS = generate_benchmark_edges_aos();

    let start_time = Instant::now();
    let mut checksum: i64 = 0;

    // The processor must jump in memory for each field (from, to, weight).
    for edge in aos_data {
        let candidate = BASE_DISTANCE + edge.weight;
        checksum += candidate;
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!("--- AoS Benchmark Results ({} Edges) ---", NUM_EDGES);
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
