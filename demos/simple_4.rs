use grid_search::{search, PathingGrid, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let pathing_grid = PathingGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    println!("{}", pathing_grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    for algorithm in ["astar", "aostar", "dijkstra", "bfs", "dfs"] {
        let outcome = search(&pathing_grid, start, end, algorithm).unwrap();
        println!("{algorithm}: expanded {} cells", outcome.visited.len());
        for p in outcome.path.unwrap() {
            println!("  {:?}", p);
        }
    }
}
