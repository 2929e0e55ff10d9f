use grid_search::{find_alternates, AlternatesConfig, PathingGrid, Point};
use rand::{rngs::StdRng, SeedableRng};

// Three lanes connect S and E:
//  _____
// |     |
// | ### |
// |S   E|
// | ### |
// |     |
//  _____
// Blocking a cell of the middle lane forces the search onto one of the outer lanes.

fn main() {
    let pathing_grid = PathingGrid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    let start = Point::new(0, 2);
    let end = Point::new(4, 2);
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = find_alternates(
        &pathing_grid,
        start,
        end,
        "bfs",
        &AlternatesConfig::new(2),
        &mut rng,
    );
    for (i, path) in outcome.paths.unwrap_or_default().iter().enumerate() {
        let cells = path
            .iter()
            .map(|p| format!("({},{})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        println!("Path {i} ({} cells): {cells}", path.len());
    }
}
