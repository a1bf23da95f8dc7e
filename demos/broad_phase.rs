//! Use the grid as a collision broad phase for moving entities.
//!
//! Each frame, every entity is removed under its old coordinates, moved,
//! and re-inserted; candidate pairs are then gathered by querying the
//! block of cells around each entity's footprint.

use shgrid::prelude::*;

struct Entity {
    id: u64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

const SIZE: f64 = 1.0;
const WORLD: f64 = 32.0;

impl Client for Entity {
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
        SIZE
    }
    fn height(&self) -> f64 {
        SIZE
    }
}

impl Entity {
    fn advance(&mut self) {
        self.x = (self.x + self.vx).rem_euclid(WORLD - SIZE);
        self.y = (self.y + self.vy).rem_euclid(WORLD - SIZE);
    }
}

fn main() {
    let mut entities: Vec<Entity> = (0..64)
        .map(|i| Entity {
            id: i,
            x: (i % 8) as f64 * 4.0,
            y: (i / 8) as f64 * 4.0,
            vx: 0.37 + 0.011 * i as f64,
            vy: 0.53 - 0.007 * i as f64,
        })
        .collect();

    let mut grid = SpatialHashGrid::new();
    for e in &entities {
        grid.insert(e);
    }

    let mut results = Vec::new();
    for frame in 0..10 {
        // Re-index moved entities: remove under old coordinates first.
        for e in &entities {
            grid.remove(e);
        }
        for e in &mut entities {
            e.advance();
        }
        for e in &entities {
            grid.insert(e);
        }

        // Broad phase: candidates share at least one cell with the block
        // of cells around an entity's footprint.
        let mut candidate_pairs = 0usize;
        for e in &entities {
            let x0 = e.x.floor() as i64;
            let y0 = e.y.floor() as i64;
            let x1 = (e.x + SIZE).ceil() as i64;
            let y1 = (e.y + SIZE).ceil() as i64;
            grid.clients_in(x0, y0, x1, y1, &mut results);
            candidate_pairs += results.iter().filter(|&&id| id != e.id()).count();
        }

        println!(
            "frame {:2}: {} occupied cells, {} candidate pairs (each counted twice)",
            frame,
            grid.len(),
            candidate_pairs
        );
    }
}
