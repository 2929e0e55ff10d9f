use grid_search::request::handle_request;

// Answers a JSON request the way an HTTP endpoint would.
fn main() {
    let body = r#"{
        "grid": [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
        "start": {"x": 0, "y": 0},
        "goal": {"x": 2, "y": 2},
        "algorithm": "aostar",
        "findMultiplePaths": true
    }"#;
    let response = handle_request(body);
    match response.to_json() {
        Ok(json) => println!("{} {}", response.status, json),
        Err(err) => eprintln!("Could not serialise response: {err}"),
    }
}
