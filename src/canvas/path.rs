//! Path point sequences and their `d` attribute encoding
//!
//! A path is an ordered list of points. A [`PathPoint::Gap`] lifts the pen,
//! so the next drawn point starts a new subpath with a move command.

use serde::Deserialize;
use thiserror::Error;

/// One entry of a path point sequence
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub enum PathPoint {
    /// A point the pen travels to
    Draw(f64, f64),
    /// Pen up: breaks continuity with the next drawn point
    Gap,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        PathPoint::Draw(x, y)
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, PathPoint::Gap)
    }
}

impl From<(f64, f64)> for PathPoint {
    fn from((x, y): (f64, f64)) -> Self {
        PathPoint::Draw(x, y)
    }
}

/// A missing y coordinate marks a gap, whatever the x coordinate is
impl From<(f64, Option<f64>)> for PathPoint {
    fn from((x, y): (f64, Option<f64>)) -> Self {
        match y {
            Some(y) => PathPoint::Draw(x, y),
            None => PathPoint::Gap,
        }
    }
}

/// A serialized point that is neither `[]` nor `[x, y]`
#[derive(Error, Debug, Clone, PartialEq)]
#[error("path point must be [] (gap) or [x, y], got {0} coordinate(s)")]
pub struct InvalidPathPoint(pub usize);

impl TryFrom<Vec<f64>> for PathPoint {
    type Error = InvalidPathPoint;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            [] => Ok(PathPoint::Gap),
            [x, y] => Ok(PathPoint::Draw(*x, *y)),
            other => Err(InvalidPathPoint(other.len())),
        }
    }
}

/// Convert a point sequence to an SVG path `d` attribute
///
/// The pen starts up. Every drawn point emits `M` while the pen is up and
/// `L` while it is down, then puts the pen down. Gaps emit nothing.
pub fn path_to_d(points: &[PathPoint]) -> String {
    let mut d = String::new();
    let mut pen_down = false;

    for point in points {
        match *point {
            PathPoint::Gap => pen_down = false,
            PathPoint::Draw(x, y) => {
                if !d.is_empty() {
                    d.push(' ');
                }
                let cmd = if pen_down { 'L' } else { 'M' };
                d.push_str(&format!("{}{} {}", cmd, x, y));
                pen_down = true;
            }
        }
    }

    d
}
