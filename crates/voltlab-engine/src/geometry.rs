use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer cell-index coordinate on the lab grid.
///
/// This is the space the router works in; it is distinct from pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` is one orthogonal step away.
    pub fn is_adjacent(self, other: GridPoint) -> bool {
        self.manhattan(other) == 1
    }

    /// The four orthogonal neighbours, unfiltered.
    pub fn neighbors(self) -> [GridPoint; 4] {
        [
            GridPoint::new(self.x, self.y + 1),
            GridPoint::new(self.x + 1, self.y),
            GridPoint::new(self.x, self.y - 1),
            GridPoint::new(self.x - 1, self.y),
        ]
    }

    /// Centre of this cell in unit space.
    pub fn center(self) -> UnitPoint {
        UnitPoint::new(self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous position in cell units; `(0, 0)` is the top-left corner of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: UnitPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// The grid cell containing this point.
    pub fn cell(self) -> GridPoint {
        GridPoint::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn to_pixel(self, cell_size: f64) -> PixelPoint {
        PixelPoint::new(self.x * cell_size, self.y * cell_size)
    }
}

/// Canvas position in pixels, already adjusted for pan and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_unit(self, cell_size: f64) -> UnitPoint {
        UnitPoint::new(self.x / cell_size, self.y / cell_size)
    }

    pub fn distance(self, other: PixelPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Component orientation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Advances by 90° modulo 360.
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Rotates `(x, y)` clockwise on screen (y grows downwards).
    ///
    /// Quarter turns are applied exactly so terminal positions carry no
    /// trigonometric rounding error.
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (-y, x),
            Rotation::Deg180 => (-x, -y),
            Rotation::Deg270 => (y, -x),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("rotation must be 0, 90, 180 or 270, got {other}")),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}
