use crate::points::MAX_POINTS;

/// Failures of a single triangulation call. Degenerate input, e.g. fewer
/// than three distinct points or colinear vertices, is not an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangulateError {
    /// Every convex vertex's triangle contains another vertex, which only
    /// happens for self intersecting or otherwise non simple polygons.
    #[error("no ear found with {remaining} vertices left, polygon is not simple")]
    NoEar { remaining: usize },

    #[error("polygon has {len} points, at most {} are addressable by 16 bit indices", MAX_POINTS)]
    TooManyPoints { len: usize },
}
