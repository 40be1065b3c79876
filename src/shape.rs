use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Default for Point {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl Point {
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Vector;

    /// Vector pointing from `rhs` to `self`
    fn sub(self, rhs: Point) -> Vector {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Difference between two points, only lives during a cross product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: Float,
    pub y: Float,
}

impl Vector {
    /// 2d determinant. Positive when `other` is counter clockwise to `self`.
    #[inline(always)]
    pub fn cross(&self, other: &Vector) -> Float {
        self.x * other.y - self.y * other.x
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    /// Signed area, positive for counter clockwise triangles
    pub fn signed_area(&self) -> Float {
        let [a, b, c] = self.points;
        (b - a).cross(&(c - a)) / 2.
    }
}
