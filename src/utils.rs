use crate::shape::Point;
use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clock Wise
    ///     
    ///  a     b    
    ///             c
    ///
    CW,
    /// Counter Clock Wise
    ///             c
    ///  a     b
    CCW,
    /// Collinear
    ///  a     b    c
    Collinear,
}

impl Orientation {
    pub fn is_cw(&self) -> bool {
        matches!(self, Self::CW)
    }

    pub fn is_ccw(&self) -> bool {
        matches!(self, Self::CCW)
    }

    pub fn is_collinear(&self) -> bool {
        matches!(self, Self::Collinear)
    }

    fn from_det(val: f64) -> Self {
        if val > 0. {
            Orientation::CCW
        } else if val < 0. {
            Orientation::CW
        } else {
            Orientation::Collinear
        }
    }
}

/// Signed turn at `b` when walking `a -> b -> c`, i.e. cross product of the
/// incoming and outgoing edge vectors.
#[inline(always)]
pub fn turn(a: Point, b: Point, c: Point) -> Float {
    (b - a).cross(&(c - b))
}

pub fn orient_2d(a: Point, b: Point, c: Point) -> Orientation {
    Orientation::from_det(f64::from(turn(a, b, c)))
}

/// whether `p` is inside triangle `abc` or on its border, in either winding.
pub fn in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let c0 = (p - a).cross(&(b - a));
    let c1 = (p - b).cross(&(c - b));
    let c2 = (p - c).cross(&(a - c));

    (c0 <= 0. && c1 <= 0. && c2 <= 0.) || (c0 >= 0. && c1 >= 0. && c2 >= 0.)
}

/// Shoelace area of a closed polyline, positive when counter clockwise.
pub fn signed_area(polygon: &[Point]) -> Float {
    let mut sum = 0.;
    for (i, p) in polygon.iter().enumerate() {
        let q = polygon[(i + 1) % polygon.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.
}

/// Which arithmetic decides the sign of a turn.
///
/// `Exact` evaluates the cross product directly in [`Float`], so a turn is
/// colinear only when the product is exactly zero. `Robust` uses adaptive
/// precision predicates, which never report a wrong sign because of rounding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    #[default]
    Exact,
    Robust,
}

impl Predicate {
    pub fn orient_2d(&self, a: Point, b: Point, c: Point) -> Orientation {
        match self {
            Predicate::Exact => orient_2d(a, b, c),
            Predicate::Robust => Orientation::from_det(robust_orient(a, b, c)),
        }
    }

    pub fn in_triangle(&self, p: Point, a: Point, b: Point, c: Point) -> bool {
        match self {
            Predicate::Exact => in_triangle(p, a, b, c),
            Predicate::Robust => {
                let o0 = robust_orient(a, b, p);
                let o1 = robust_orient(b, c, p);
                let o2 = robust_orient(c, a, p);

                (o0 <= 0. && o1 <= 0. && o2 <= 0.) || (o0 >= 0. && o1 >= 0. && o2 >= 0.)
            }
        }
    }
}

#[inline]
fn robust_orient(a: Point, b: Point, c: Point) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}

#[inline]
fn coord(p: Point) -> robust::Coord<f64> {
    robust::Coord {
        x: f64::from(p.x),
        y: f64::from(p.y),
    }
}
