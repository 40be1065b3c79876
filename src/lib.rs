//! Ear clipping triangulation for simple polygons.
//!
//! The input is a closed outline, the output a flat list of 16 bit indices
//! into that outline, three per triangle, ready for an indexed draw call.
//!
//! ```rust
//! use earclip_rs::{triangulate, Point};
//!
//! let indices = triangulate(&[
//!     Point::new(0., 0.),
//!     Point::new(10., 0.),
//!     Point::new(10., 10.),
//!     Point::new(0., 10.),
//! ])
//! .unwrap();
//! assert_eq!(indices.len(), 6);
//! ```
mod context;
mod earclip;
mod error;
pub mod loader;
mod points;
mod ring;
mod shape;
mod utils;

pub use earclip::{Builder, EarClipper, Observer, Triangles};
pub use error::TriangulateError;

/// exported to enable observer
pub use context::Context;
pub use points::{dedup_indices, PointId, MAX_POINTS};
pub use ring::{ActiveRing, Cursor};
pub use shape::{Point, Triangle, Vector};
pub use utils::{in_triangle, orient_2d, signed_area, turn, Orientation, Predicate};

#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(feature = "f32")]
pub type Float = f32;

/// Triangulate a simple polygon with exact arithmetic.
///
/// Returns an empty list when fewer than three distinct, non colinear points
/// are given, and [`TriangulateError::NoEar`] for self intersecting input.
/// At most [`MAX_POINTS`] points are accepted.
pub fn triangulate(points: &[Point]) -> Result<Vec<u16>, TriangulateError> {
    earclip::ear_clip(points, Predicate::Exact, &mut ())
}
