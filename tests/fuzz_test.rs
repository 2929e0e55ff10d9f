/// Fuzzes the search strategies on many random grids: a path is found exactly when start and goal
/// share a connected component, every path is a valid 4-connected walk over open cells, and the
/// optimal strategies match the length of a reference breadth-first search.
use grid_search::{find_alternates, search, Algorithm, AlternatesConfig, PathingGrid, Point};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_rows(w: usize, h: usize, rng: &mut StdRng) -> Vec<Vec<u8>> {
    (0..h)
        .map(|_| (0..w).map(|_| rng.gen_bool(0.35) as u8).collect())
        .collect()
}

fn visualize_grid(rows: &[Vec<u8>], start: &Point, end: &Point) {
    for (y, row) in rows.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if *cell != 0 {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Number of cells on a shortest path, computed independently of the library.
fn reference_length(rows: &[Vec<u8>], start: Point, goal: Point) -> Option<usize> {
    let h = rows.len() as i32;
    let w = rows[0].len() as i32;
    let open = |p: Point| {
        p.x >= 0 && p.y >= 0 && p.x < w && p.y < h && rows[p.y as usize][p.x as usize] == 0
    };
    let mut dist = vec![vec![usize::MAX; w as usize]; h as usize];
    let mut queue = VecDeque::from([start]);
    dist[start.y as usize][start.x as usize] = 1;
    while let Some(p) = queue.pop_front() {
        let d = dist[p.y as usize][p.x as usize];
        if p == goal {
            return Some(d);
        }
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if open(n) && dist[n.y as usize][n.x as usize] == usize::MAX {
                dist[n.y as usize][n.x as usize] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut rows = random_rows(N, N, &mut rng);
        rows[0][0] = 0;
        rows[N - 1][N - 1] = 0;
        let grid = PathingGrid::from_rows(&rows).unwrap();
        let reachable = grid.reachable(&start, &end);
        let shortest = reference_length(&rows, start, end);
        assert_eq!(reachable, shortest.is_some());
        for alg in Algorithm::ALL {
            let outcome = search(&grid, start, end, alg.name()).unwrap();
            // Show the grid if the result is inconsistent
            if outcome.path.is_some() != reachable {
                visualize_grid(&rows, &start, &end);
            }
            assert_eq!(outcome.path.is_some(), reachable, "{alg}");
            assert!(!outcome.visited.is_empty());
            assert_eq!(outcome.visited[0], start);
            if let Some(path) = outcome.path {
                assert!(grid.is_walkable_path(&path), "{alg}: {path:?}");
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert_eq!(outcome.visited.last(), Some(&end));
                if alg.is_optimal() {
                    assert_eq!(Some(path.len()), shortest, "{alg}");
                } else {
                    assert!(path.len() >= shortest.unwrap_or(0));
                }
            }
        }
    }
}

#[test]
fn fuzz_alternates() {
    const N: usize = 7;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let config = AlternatesConfig::default();
    for _ in 0..N_GRIDS {
        let mut rows = random_rows(N, N, &mut rng);
        rows[0][0] = 0;
        rows[N - 1][N - 1] = 0;
        let grid = PathingGrid::from_rows(&rows).unwrap();
        for alg in Algorithm::ALL {
            let outcome = find_alternates(&grid, start, end, alg.name(), &config, &mut rng);
            let Some(paths) = outcome.paths else {
                assert!(grid.unreachable(&start, &end));
                continue;
            };
            assert!(!paths.is_empty() && paths.len() <= config.max_alternates + 1);
            let primary = search(&grid, start, end, alg.name()).unwrap().path;
            assert_eq!(Some(&paths[0]), primary.as_ref());
            for (i, path) in paths.iter().enumerate() {
                assert!(grid.is_walkable_path(path));
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert!(!paths[i + 1..].contains(path));
            }
            assert!(paths[1..].windows(2).all(|w| w[0].len() <= w[1].len()));
        }
    }
}
