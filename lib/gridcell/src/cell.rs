use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// The eight neighbor directions of a square cell, cardinals first.
pub const DIRECTIONS: [Cell; 8] = [
    Cell { x: 1, y: 0 },   // east
    Cell { x: -1, y: 0 },  // west
    Cell { x: 0, y: 1 },   // south
    Cell { x: 0, y: -1 },  // north
    Cell { x: 1, y: 1 },   // south-east
    Cell { x: 1, y: -1 },  // north-east
    Cell { x: -1, y: 1 },  // south-west
    Cell { x: -1, y: -1 }, // north-west
];

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: number of king moves between two cells.
    pub fn flat_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Manhattan distance: axis-aligned tile count between two cells.
    pub fn taxi_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Unit direction (per-axis signum) toward another cell.
    pub fn toward(&self, other: &Cell) -> Cell {
        Cell {
            x: (other.x - self.x).signum(),
            y: (other.y - self.y).signum(),
        }
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS.iter().map(move |d| *self + *d)
    }

    /// Cells along the direct line to `other`, stepping diagonally while both
    /// axes have remaining delta, then along the leftover axis. Excludes
    /// `self`, includes `other`.
    pub fn line_direct(&self, other: &Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.flat_distance(other) as usize);
        let mut at = *self;
        while at != *other {
            at = at + at.toward(other);
            out.push(at);
        }
        out
    }

    /// Cells along an axis-then-axis dogleg to `other`. With `x_first` the x
    /// axis is exhausted before any y step, otherwise the reverse. Excludes
    /// `self`, includes `other`.
    pub fn line_dogleg(&self, other: &Cell, x_first: bool) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.taxi_distance(other) as usize);
        let mut at = *self;
        let legs = if x_first { [true, false] } else { [false, true] };
        for x_leg in legs {
            loop {
                let step = if x_leg {
                    Cell { x: (other.x - at.x).signum(), y: 0 }
                } else {
                    Cell { x: 0, y: (other.y - at.y).signum() }
                };
                if step == Cell::default() {
                    break;
                }
                at = at + step;
                out.push(at);
            }
        }
        out
    }
}

impl Add<Cell> for Cell {
    type Output = Cell;
    fn add(self, rhs: Cell) -> Self::Output {
        Cell { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub<Cell> for Cell {
    type Output = Cell;
    fn sub(self, rhs: Cell) -> Self::Output {
        Cell { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<i32> for Cell {
    type Output = Cell;
    fn mul(self, rhs: i32) -> Self::Output {
        Cell { x: self.x * rhs, y: self.y * rhs }
    }
}
