use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point (or a displacement) in 3D space
#[derive(Debug, Clone, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn z(&self) -> f64 {
        self.2
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1, p.2)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from(p: (f64, f64, f64)) -> Self {
        Point(p.0, p.1, p.2)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}
