//! Route transposition: the text is written row by row into a grid of fixed
//! width and read along a geometric path.
//!
//! A route starts in a corner, heading along an edge. At the end of each
//! leg the row or column just covered is dropped from the open rectangle
//! and the heading turns a quarter. A spiral keeps turning the same way and
//! winds inward; a serpent turns twice per leg and flips its sense each
//! time, sweeping back and forth.

use super::walk::{apply_walk, Mode, Transposition};
use crate::error::{Result, TranspositionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }

    /// Whether a step taken from this corner stays on the grid
    fn admits(self, step: Step) -> bool {
        let column_ok = if self.is_right() { step.column <= 0 } else { step.column >= 0 };
        let row_ok = if self.is_bottom() { step.row <= 0 } else { step.row >= 0 };
        column_ok && row_ok
    }

    fn code(self) -> &'static str {
        match self {
            Corner::TopLeft => "TL",
            Corner::TopRight => "TR",
            Corner::BottomLeft => "BL",
            Corner::BottomRight => "BR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn code(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    fn reversed(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// Unit step on the grid; rows grow downward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    column: isize,
    row: isize,
}

impl Step {
    fn turn(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => Step {
                column: -self.row,
                row: self.column,
            },
            Rotation::CounterClockwise => Step {
                column: self.row,
                row: -self.column,
            },
        }
    }
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        let (column, row) = match direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        Step { column, row }
    }
}

/// Starting corner, initial heading and turning sense of a route.
///
/// Only routes whose first leg and first turn both run along the grid
/// edges are valid; there are eight, available as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Route {
    corner: Corner,
    direction: Direction,
    rotation: Rotation,
}

impl Route {
    pub const TLR: Route = Route::canonical(Corner::TopLeft, Direction::Right, Rotation::Clockwise);
    pub const TLD: Route = Route::canonical(Corner::TopLeft, Direction::Down, Rotation::CounterClockwise);
    pub const TRL: Route = Route::canonical(Corner::TopRight, Direction::Left, Rotation::CounterClockwise);
    pub const TRD: Route = Route::canonical(Corner::TopRight, Direction::Down, Rotation::Clockwise);
    pub const BLR: Route = Route::canonical(Corner::BottomLeft, Direction::Right, Rotation::CounterClockwise);
    pub const BLU: Route = Route::canonical(Corner::BottomLeft, Direction::Up, Rotation::Clockwise);
    pub const BRL: Route = Route::canonical(Corner::BottomRight, Direction::Left, Rotation::Clockwise);
    pub const BRU: Route = Route::canonical(Corner::BottomRight, Direction::Up, Rotation::CounterClockwise);

    pub const ALL: [Route; 8] = [
        Route::TLR,
        Route::TLD,
        Route::TRL,
        Route::TRD,
        Route::BLR,
        Route::BLU,
        Route::BRL,
        Route::BRU,
    ];

    const fn canonical(corner: Corner, direction: Direction, rotation: Rotation) -> Self {
        Route {
            corner,
            direction,
            rotation,
        }
    }

    pub fn new(corner: Corner, direction: Direction, rotation: Rotation) -> Result<Self> {
        let first = Step::from(direction);
        if !corner.admits(first) || !corner.admits(first.turn(rotation)) {
            return Err(TranspositionError::InvalidRoute(format!(
                "{:?} heading {:?} turning {:?} leaves the grid",
                corner, direction, rotation
            )));
        }
        Ok(Route::canonical(corner, direction, rotation))
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.corner.code(), self.direction.code())
    }
}

impl FromStr for Route {
    type Err = TranspositionError;
    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_uppercase();
        Route::ALL
            .into_iter()
            .find(|route| route.to_string() == code)
            .ok_or_else(|| TranspositionError::InvalidRoute(format!("unknown route code: {}", s)))
    }
}

impl TryFrom<String> for Route {
    type Error = TranspositionError;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.to_string()
    }
}

/// Path shape followed through the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    #[default]
    Spiral,
    Serpent,
}

impl FromStr for RouteKind {
    type Err = TranspositionError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "spiral" => Ok(Self::Spiral),
            "serpent" => Ok(Self::Serpent),
            _ => Err(TranspositionError::InvalidRoute(format!("unknown route kind: {}", s))),
        }
    }
}

pub fn route_walk(len: usize, width: usize, route: Route, kind: RouteKind) -> Result<Vec<usize>> {
    if width == 0 {
        return Err(TranspositionError::ZeroWidth);
    }

    let mut rows = len.div_ceil(width);
    let mut columns = width;
    debug!(len, width, rows, route = %route, kind = ?kind, "route grid");

    let mut row = if route.corner.is_bottom() { rows as isize - 1 } else { 0 };
    let mut column = if route.corner.is_right() { columns as isize - 1 } else { 0 };
    let mut step = Step::from(route.direction);
    let mut rotation = route.rotation;

    let mut walk = Vec::with_capacity(len);
    let mut visit = |row: isize, column: isize| {
        // Cells past the end of a ragged last row hold nothing
        if row >= 0 && column >= 0 && (column as usize) < width {
            let index = row as usize * width + column as usize;
            if index < len {
                walk.push(index);
            }
        }
    };

    while rows > 0 && columns > 0 {
        if step.row != 0 {
            for _ in 0..rows {
                visit(row, column);
                row += step.row;
            }
            row -= step.row;
            columns -= 1;
        } else {
            for _ in 0..columns {
                visit(row, column);
                column += step.column;
            }
            column -= step.column;
            rows -= 1;
        }

        step = step.turn(rotation);
        row += step.row;
        column += step.column;

        if kind == RouteKind::Serpent {
            step = step.turn(rotation);
            rotation = rotation.reversed();
        }
        trace!(rows, columns, row, column, "route leg done");
    }

    Ok(walk)
}

pub fn encrypt_route<T: Clone>(text: &[T], width: usize, route: Route, kind: RouteKind) -> Result<Vec<T>> {
    let walk = route_walk(text.len(), width, route, kind)?;
    Ok(apply_walk(text, &walk, Mode::Encrypt))
}

pub fn decrypt_route<T: Clone>(text: &[T], width: usize, route: Route, kind: RouteKind) -> Result<Vec<T>> {
    let walk = route_walk(text.len(), width, route, kind)?;
    Ok(apply_walk(text, &walk, Mode::Decrypt))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteCipher {
    pub width: usize,
    pub route: Route,
    pub kind: RouteKind,
}

impl RouteCipher {
    pub fn spiral(width: usize, route: Route) -> Self {
        Self {
            width,
            route,
            kind: RouteKind::Spiral,
        }
    }

    pub fn serpent(width: usize, route: Route) -> Self {
        Self {
            width,
            route,
            kind: RouteKind::Serpent,
        }
    }
}

impl Transposition for RouteCipher {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        route_walk(len, self.width, self.route, self.kind)
    }
}
