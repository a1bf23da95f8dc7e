//! Benchmark for spatial hash grid performance
//!
//! Measures insert, range-query, and remove throughput with 100k randomly
//! distributed clients in a 1000x1000 coordinate space. Queries are
//! performed with varying window sizes (10%, 1%, 0.1% of the space).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shgrid::prelude::*;
use std::time::Instant;

const SPACE: f64 = 1000.0;
const MAX_SIZE: f64 = 4.0;
const NUM_CLIENTS: usize = 100_000;
const NUM_QUERIES: usize = 1_000;

struct BenchClient {
    id: u64,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Client for BenchClient {
    fn id(&self) -> ClientId {
        ClientId(self.id)
    }
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn width(&self) -> f64 {
        self.w
    }
    fn height(&self) -> f64 {
        self.h
    }
}

/// Generate a random client footprint with size up to `MAX_SIZE`.
fn random_client<R: Rng>(rng: &mut R, id: u64) -> BenchClient {
    BenchClient {
        id,
        x: rng.random_range(0.0..(SPACE - MAX_SIZE)),
        y: rng.random_range(0.0..(SPACE - MAX_SIZE)),
        w: rng.random_range(0.0..MAX_SIZE),
        h: rng.random_range(0.0..MAX_SIZE),
    }
}

/// Benchmark range queries with a fixed window size.
fn bench_queries<R: Rng>(grid: &SpatialHashGrid, rng: &mut R, window: i64, label: &str) {
    let mut results = Vec::new();
    let mut total_hits = 0usize;
    let start = Instant::now();

    for _ in 0..NUM_QUERIES {
        let x0 = rng.random_range(0..(SPACE as i64 - window));
        let y0 = rng.random_range(0..(SPACE as i64 - window));
        grid.clients_in(x0, y0, x0 + window, y0 + window, &mut results);
        total_hits += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} queries {}: {}ms ({} total hits)",
        NUM_QUERIES,
        label,
        elapsed.as_millis(),
        total_hits
    );
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let clients: Vec<BenchClient> = (0..NUM_CLIENTS)
        .map(|id| random_client(&mut rng, id as u64))
        .collect();

    let mut grid = SpatialHashGrid::with_capacity(NUM_CLIENTS);

    let start = Instant::now();
    for c in &clients {
        grid.insert(c);
    }
    println!(
        "{} inserts: {}ms ({} occupied cells)",
        NUM_CLIENTS,
        start.elapsed().as_millis(),
        grid.len()
    );

    bench_queries(&grid, &mut rng, 100, "10%");
    bench_queries(&grid, &mut rng, 10, "1%");
    bench_queries(&grid, &mut rng, 1, "0.1%");

    let mut order: Vec<usize> = (0..clients.len()).collect();
    order.shuffle(&mut rng);
    let start = Instant::now();
    for idx in order {
        grid.remove(&clients[idx]);
    }
    println!("{} removes: {}ms", NUM_CLIENTS, start.elapsed().as_millis());

    assert!(grid.is_empty(), "Grid should be empty after removing every client");
}
