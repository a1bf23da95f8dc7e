//! Insert a few clients and query a rectangular block of cells.
use shgrid::prelude::*;

struct Item {
    id: ClientId,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Client for Item {
    fn id(&self) -> ClientId {
        self.id
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

fn main() {
    let mut grid = SpatialHashGrid::new();
    let a = Item { id: ClientId(0), x: 1.0, y: 1.0, w: 1.0, h: 1.0 }; // cell (1, 1)
    let b = Item { id: ClientId(1), x: 0.5, y: 0.5, w: 1.0, h: 1.0 }; // 2x2 block
    let c = Item { id: ClientId(2), x: 5.0, y: 5.0, w: 1.0, h: 1.0 }; // far away
    grid.insert(&a);
    grid.insert(&b);
    grid.insert(&c);

    let mut results = Vec::new();
    grid.clients_in(0, 0, 2, 2, &mut results);
    println!("Clients in (0, 0)-(2, 2): {:?}", results);

    // a and b overlap the queried block, c does not; b spans all four
    // queried cells but is reported once.
    assert_eq!(results.len(), 2, "Expected 2 clients in the block");
    assert!(results.contains(&ClientId(0)), "a should be found");
    assert!(results.contains(&ClientId(1)), "b should be found");
    assert!(!results.contains(&ClientId(2)), "c should not be found");

    grid.remove(&b);
    grid.clients_in(0, 0, 2, 2, &mut results);
    println!("After removing b: {:?}", results);
    assert_eq!(results, vec![ClientId(0)], "Only a should remain in the block");
}
