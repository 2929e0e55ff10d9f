use grid_search::request::{handle_request, handle_request_with_rng, Coord, Response};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};

fn answer(body: Value) -> Response {
    let mut rng = StdRng::seed_from_u64(0);
    handle_request_with_rng(&body.to_string(), &mut rng)
}

fn coords(points: &[(i32, i32)]) -> Vec<Coord> {
    points.iter().map(|&(x, y)| Coord { x, y }).collect()
}

#[test]
fn single_path_request() {
    let response = answer(json!({
        "grid": [[0, 0], [1, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": 1, "y": 1},
        "algorithm": "DFS"
    }));
    assert_eq!(response.status, 200);
    assert!(response.body.success);
    let expected = coords(&[(0, 0), (1, 0), (1, 1)]);
    assert_eq!(response.body.path.as_ref(), Some(&expected));
    assert_eq!(response.body.visited.as_ref(), Some(&expected));
    assert_eq!(response.body.paths, None);
    let json: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        json!({
            "success": true,
            "path": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}],
            "visited": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}]
        })
    );
}

#[test]
fn algorithm_defaults_to_astar() {
    let response = answer(json!({
        "grid": [[0, 0, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": "2", "y": 0.0}
    }));
    assert_eq!(response.status, 200);
    assert_eq!(
        response.body.path,
        Some(coords(&[(0, 0), (1, 0), (2, 0)]))
    );
}

#[test]
fn no_path_is_not_an_error() {
    let response = answer(json!({
        "grid": [[0, 1, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": 2, "y": 0},
        "algorithm": "bfs"
    }));
    assert_eq!(response.status, 200);
    assert!(!response.body.success);
    assert_eq!(response.body.message.as_deref(), Some("No path exists"));
    assert_eq!(response.body.visited, Some(coords(&[(0, 0)])));
}

#[test]
fn unknown_algorithm_rejected_for_single_path() {
    let response = answer(json!({
        "grid": [[0, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": 1, "y": 0},
        "algorithm": "greedy"
    }));
    assert_eq!(response.status, 400);
    assert_eq!(response.body.message.as_deref(), Some("Unknown algorithm"));
}

#[test]
fn unknown_algorithm_tolerated_for_multiple_paths() {
    let response = answer(json!({
        "grid": [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": 2, "y": 2},
        "algorithm": "greedy",
        "findMultiplePaths": true
    }));
    assert_eq!(response.status, 200);
    assert!(response.body.success);
    let paths = response.body.paths.unwrap();
    // The two ways around the centre
    assert_eq!(paths.len(), 2);
    assert_ne!(paths[0], paths[1]);
    assert!(paths.iter().all(|p| p.len() == 5));
    assert_eq!(response.body.message.as_deref(), Some("Found 2 paths"));
    assert_eq!(response.body.path, None);
}

#[test]
fn extreme_coordinates_have_no_path() {
    for multiple in [false, true] {
        let response = answer(json!({
            "grid": [[0, 0]],
            "start": {"x": 0, "y": 0},
            "goal": {"x": i32::MIN, "y": 0},
            "findMultiplePaths": multiple
        }));
        assert_eq!(response.status, 200);
        assert!(!response.body.success);
        assert_eq!(response.body.message.as_deref(), Some("No path exists"));
        assert_eq!(response.body.visited, Some(coords(&[(0, 0), (1, 0)])));
    }
    let response = answer(json!({
        "grid": [[0, 0]],
        "start": {"x": i32::MAX, "y": 0},
        "goal": {"x": 1, "y": 0},
        "algorithm": "bfs"
    }));
    assert_eq!(response.status, 200);
    assert_eq!(response.body.visited, Some(coords(&[(i32::MAX, 0)])));
}

#[test]
fn boolean_coordinates_count_as_zero_or_one() {
    let response = answer(json!({
        "grid": [[0, 0]],
        "start": {"x": false, "y": 0},
        "goal": {"x": true, "y": false}
    }));
    assert_eq!(response.status, 200);
    assert_eq!(response.body.path, Some(coords(&[(0, 0), (1, 0)])));
}

#[test]
fn multiple_paths_without_route() {
    let response = answer(json!({
        "grid": [[0, 1, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": 2, "y": 0},
        "findMultiplePaths": 1
    }));
    assert_eq!(response.status, 200);
    assert!(!response.body.success);
    assert_eq!(response.body.message.as_deref(), Some("No path exists"));
    assert_eq!(response.body.paths, None);
}

#[test]
fn malformed_requests() {
    let cases = [
        (json!({}), "No data received"),
        (json!([1, 2]), "No data received"),
        (json!({"grid": [[0]], "start": {"x": 0, "y": 0}}), "Missing required fields"),
        (
            json!({"grid": [0, 0], "start": {"x": 0, "y": 0}, "goal": {"x": 0, "y": 0}}),
            "Invalid grid format",
        ),
        (
            json!({"grid": [[0, 0], [0]], "start": {"x": 0, "y": 0}, "goal": {"x": 0, "y": 0}}),
            "Invalid grid format",
        ),
        (
            json!({"grid": [[0]], "start": {"x": 0}, "goal": {"x": 0, "y": 0}}),
            "Invalid coordinates",
        ),
        (
            json!({"grid": [[0]], "start": {"x": 0, "y": 0}, "goal": {"x": "far", "y": 0}}),
            "Invalid coordinates",
        ),
        (
            json!({"grid": [[0]], "start": [0, 0], "goal": {"x": 0, "y": 0}}),
            "Invalid coordinates",
        ),
    ];
    for (body, message) in cases {
        let response = answer(body.clone());
        assert_eq!(response.status, 400, "{body}");
        assert!(!response.body.success);
        assert_eq!(response.body.message.as_deref(), Some(message), "{body}");
    }
    let response = handle_request("not json");
    assert_eq!(response.status, 400);
    assert_eq!(response.body.message.as_deref(), Some("No data received"));
}

#[test]
fn empty_grid_has_no_path() {
    for grid in [json!([]), json!([[]])] {
        let response = answer(json!({
            "grid": grid,
            "start": {"x": 0, "y": 0},
            "goal": {"x": 0, "y": 0}
        }));
        assert_eq!(response.status, 200);
        assert!(!response.body.success);
        assert_eq!(response.body.visited, Some(Vec::new()));
    }
}
