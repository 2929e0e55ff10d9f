//! JSON request handling for path queries, independent of any HTTP server.
//!
//! A request body looks like
//!
//! ```json
//! {"grid": [[0, 0], [1, 0]], "start": {"x": 0, "y": 0}, "goal": {"x": 1, "y": 1},
//!  "algorithm": "astar", "findMultiplePaths": false}
//! ```
//!
//! Malformed input is answered with status 400 before any search runs. Not finding a path is a
//! successful response with `success: false`. A panic during the search is caught and answered
//! with status 500.
use grid_util::point::Point;
use log::{error, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::panic::{self, AssertUnwindSafe};

use crate::alternates::AlternatesConfig;
use crate::pathing_grid::PathingGrid;
use crate::solver::Algorithm;

/// A cell coordinate as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for Coord {
    fn from(p: Point) -> Coord {
        Coord { x: p.x, y: p.y }
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Point {
        Point::new(c.x, c.y)
    }
}

fn coords(points: Vec<Point>) -> Vec<Coord> {
    points.into_iter().map(Coord::from).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Coord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Vec<Coord>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<Vec<Coord>>,
}

/// Status code and body of an answered request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: ResponseBody,
}

impl Response {
    fn bad_request(message: &str) -> Response {
        Response {
            status: 400,
            body: ResponseBody {
                message: Some(message.to_owned()),
                ..ResponseBody::default()
            },
        }
    }

    fn ok(body: ResponseBody) -> Response {
        Response { status: 200, body }
    }

    fn no_path(visited: Vec<Point>) -> Response {
        Response::ok(ResponseBody {
            message: Some("No path exists".to_owned()),
            visited: Some(coords(visited)),
            ..ResponseBody::default()
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// A request that passed validation.
#[derive(Clone, Debug)]
pub struct PathRequest {
    pub grid: PathingGrid,
    pub start: Point,
    pub goal: Point,
    /// Lower-cased algorithm name, not yet resolved.
    pub algorithm: String,
    pub find_multiple_paths: bool,
}

/// Python-like truthiness of a JSON value.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Integer coordinate from a number (fractions truncated), a boolean (0 or 1) or a numeric string.
fn coordinate(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?.trunc();
                if !(i64::MIN as f64..=i64::MAX as f64).contains(&f) {
                    return None;
                }
                f as i64
            }
        },
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    i32::try_from(n).ok()
}

fn point(value: &Value) -> Option<Point> {
    Some(Point::new(
        coordinate(value.get("x")?)?,
        coordinate(value.get("y")?)?,
    ))
}

fn grid(value: &Value) -> Option<PathingGrid> {
    let rows = value
        .as_array()?
        .iter()
        .map(|row| {
            row.as_array()?
                .iter()
                .map(Value::as_i64)
                .collect::<Option<Vec<i64>>>()
        })
        .collect::<Option<Vec<Vec<i64>>>>()?;
    match PathingGrid::from_rows(&rows) {
        Ok(grid) => Some(grid),
        Err(err) => {
            warn!("Rejecting grid: {}", err);
            None
        }
    }
}

impl PathRequest {
    /// Validates a parsed request body. The error is the ready-made 400 response.
    pub fn from_json(data: &Map<String, Value>) -> Result<PathRequest, Response> {
        if data.is_empty() {
            return Err(Response::bad_request("No data received"));
        }
        let (Some(grid_value), Some(start_value), Some(goal_value)) =
            (data.get("grid"), data.get("start"), data.get("goal"))
        else {
            return Err(Response::bad_request("Missing required fields"));
        };
        let grid = grid(grid_value).ok_or_else(|| Response::bad_request("Invalid grid format"))?;
        let (Some(start), Some(goal)) = (point(start_value), point(goal_value)) else {
            return Err(Response::bad_request("Invalid coordinates"));
        };
        let algorithm = data
            .get("algorithm")
            .and_then(Value::as_str)
            .unwrap_or("astar")
            .to_lowercase();
        let find_multiple_paths = data.get("findMultiplePaths").is_some_and(truthy);
        Ok(PathRequest {
            grid,
            start,
            goal,
            algorithm,
            find_multiple_paths,
        })
    }

    /// Runs the search the request asks for.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Response {
        if self.find_multiple_paths {
            let outcome = crate::find_alternates(
                &self.grid,
                self.start,
                self.goal,
                &self.algorithm,
                &AlternatesConfig::default(),
                rng,
            );
            match outcome.paths {
                Some(paths) => Response::ok(ResponseBody {
                    success: true,
                    message: Some(format!("Found {} paths", paths.len())),
                    paths: Some(paths.into_iter().map(coords).collect()),
                    visited: Some(coords(outcome.visited)),
                    ..ResponseBody::default()
                }),
                None => Response::no_path(outcome.visited),
            }
        } else {
            let Ok(outcome) = crate::search(&self.grid, self.start, self.goal, &self.algorithm)
            else {
                return Response::bad_request("Unknown algorithm");
            };
            match outcome.path {
                Some(path) => Response::ok(ResponseBody {
                    success: true,
                    path: Some(coords(path)),
                    visited: Some(coords(outcome.visited)),
                    ..ResponseBody::default()
                }),
                None => Response::no_path(outcome.visited),
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error".to_owned()
    }
}

/// Validates and answers a raw request body, drawing perturbation choices from `rng`.
pub fn handle_request_with_rng<R: Rng + ?Sized>(body: &str, rng: &mut R) -> Response {
    let data = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(data)) => data,
        _ => return Response::bad_request("No data received"),
    };
    let request = match PathRequest::from_json(&data) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match panic::catch_unwind(AssertUnwindSafe(|| request.execute(rng))) {
        Ok(response) => response,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("Search panicked: {}", message);
            Response {
                status: 500,
                body: ResponseBody {
                    message: Some(format!("Server error: {message}")),
                    ..ResponseBody::default()
                },
            }
        }
    }
}

/// Validates and answers a raw request body using the thread-local random generator.
pub fn handle_request(body: &str) -> Response {
    handle_request_with_rng(body, &mut rand::thread_rng())
}
