use crate::context::Context;
use crate::error::TriangulateError;
use crate::points::{dedup_indices, PointId};
use crate::ring::{ActiveRing, Cursor};
use crate::utils::{Orientation, Predicate};
use crate::{Point, Triangle};

/// Observer for ear clipper, used to monitor how the clipper works, quite
/// useful for visual debugging when things goes wrong. Check demo's draw.
#[allow(unused_variables)]
pub trait Observer {
    /// Winding of the polygon decided, nothing removed yet
    fn orientation_detected(&mut self, orientation: Orientation, context: &Context) {}

    /// A colinear vertex removed without emitting a triangle
    fn vertex_pruned(&mut self, point_id: PointId, context: &Context) {}

    /// An ear clipped, `triangle` is (previous, ear, next)
    fn ear_clipped(&mut self, triangle: [PointId; 3], context: &Context) {}

    /// No vertex qualifies as an ear, triangulation is about to fail
    fn no_ear_found(&mut self, context: &Context) {}

    /// All vertices consumed
    fn finalized(&mut self, context: &Context) {}
}

/// Default dummy observer, blank impl, so all calls should be optimized out by compiler.
impl Observer for () {}

/// Ear clipper Builder
///
/// # Example
/// ```rust
///    use earclip_rs::{Builder, Point, Predicate};
///
///    let clipper = Builder::new(vec![
///        Point::new(0., 0.),
///        Point::new(10., 0.),
///        Point::new(10., 10.),
///        Point::new(0., 10.),
///    ])
///    .predicate(Predicate::Robust)
///    .build();
///
///    let triangles = clipper.triangulate().unwrap();
///    assert_eq!(triangles.triangle_list_indices(), &[3, 0, 1, 3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct Builder {
    polygon: Vec<Point>,
    predicate: Predicate,
}

impl Builder {
    /// Create a new Builder with the polygon outline. The outline is
    /// implicitly closed, don't repeat the first point at the end.
    pub fn new(polygon: Vec<Point>) -> Self {
        Self {
            polygon,
            predicate: Predicate::default(),
        }
    }

    /// Arithmetic used for turn and containment tests, [`Predicate::Exact`]
    /// if not set.
    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// build the ear clipper
    pub fn build(self) -> EarClipper {
        EarClipper {
            points: self.polygon,
            predicate: self.predicate,
        }
    }
}

/// Main interface, user should grab a new EarClipper by [`Builder::build`]
#[derive(Clone)]
pub struct EarClipper {
    points: Vec<Point>,
    predicate: Predicate,
}

impl EarClipper {
    /// Run triangulate with dummy observer
    pub fn triangulate(self) -> Result<Triangles, TriangulateError> {
        self.triangulate_with_observer(&mut ())
    }

    /// Run triangulate with observer
    pub fn triangulate_with_observer(
        self,
        observer: &mut dyn Observer,
    ) -> Result<Triangles, TriangulateError> {
        let indices = ear_clip(&self.points, self.predicate, observer)?;

        Ok(Triangles {
            points: self.points,
            indices,
            next: 0,
        })
    }
}

/// The result of triangulate
pub struct Triangles {
    /// input points, including duplicated and pruned ones
    points: Vec<Point>,
    /// flat triangle list, each three indices construct a triangle
    indices: Vec<u16>,

    /// iterator next cursor
    next: usize,
}

impl Triangles {
    /// All input points, indices refer to this slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get indices. Each three indices construct a triangle, wound the same
    /// way as the input polygon. Point's order is the same as input.
    pub fn triangle_list_indices(&self) -> &[u16] {
        &self.indices
    }

    /// Take the index buffer out
    pub fn into_indices(self) -> Vec<u16> {
        self.indices
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Iterator for Triangles {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next * 3;
        let triangle = self.indices.get(index..index + 3)?;
        self.next += 1;

        Some(Triangle {
            points: [
                self.points[triangle[0] as usize],
                self.points[triangle[1] as usize],
                self.points[triangle[2] as usize],
            ],
        })
    }
}

/// Triangulate `points` into a flat index list.
///
/// Runs dedup, orientation detection and then clips ears until fewer than
/// three vertices remain.
pub(crate) fn ear_clip(
    points: &[Point],
    predicate: Predicate,
    observer: &mut dyn Observer,
) -> Result<Vec<u16>, TriangulateError> {
    let ids = dedup_indices(points)?;
    if ids.len() < 3 {
        tracing::trace!(
            points = points.len(),
            distinct = ids.len(),
            "less than 3 distinct points, nothing to triangulate"
        );
        return Ok(vec![]);
    }

    let mut ring = ActiveRing::new(ids);
    let orientation = detect_orientation(points, &ring, predicate);
    tracing::debug!(
        points = points.len(),
        distinct = ring.len(),
        ?orientation,
        "ear clipping"
    );

    let mut result = Vec::<u16>::with_capacity((ring.len() - 2) * 3);
    observer.orientation_detected(
        orientation,
        &Context::new(points, &ring, orientation, &result),
    );

    // turn of each vertex, indexed by cursor, refreshed every round
    let mut turns = vec![Orientation::Collinear; ring.len()];

    while ring.len() >= 3 {
        if let Some(cursor) = classify_turns(points, &ring, predicate, &mut turns) {
            let point_id = ring.point_id(cursor);
            ring.remove(cursor);

            tracing::trace!(point = point_id.as_usize(), "colinear vertex pruned");
            observer.vertex_pruned(
                point_id,
                &Context::new(points, &ring, orientation, &result),
            );
            continue;
        }

        let Some(ear) = find_ear(points, &ring, predicate, orientation, &turns) else {
            observer.no_ear_found(&Context::new(points, &ring, orientation, &result));
            tracing::warn!(
                remaining = ring.len(),
                clipped = result.len() / 3,
                "no ear found, polygon is not simple"
            );
            return Err(TriangulateError::NoEar {
                remaining: ring.len(),
            });
        };

        let triangle = ring.adjacent(ear);
        result.extend(triangle.iter().map(PointId::as_u16));
        ring.remove(ear);

        tracing::trace!(
            prev = triangle[0].as_usize(),
            ear = triangle[1].as_usize(),
            next = triangle[2].as_usize(),
            "ear clipped"
        );
        observer.ear_clipped(triangle, &Context::new(points, &ring, orientation, &result));
    }

    observer.finalized(&Context::new(points, &ring, orientation, &result));
    tracing::debug!(triangles = result.len() / 3, "ear clipping done");

    Ok(result)
}

/// Winding of the whole ring, judged at the vertex with max x (then max y),
/// which is always convex. A colinear reading counts as counter clockwise.
fn detect_orientation(points: &[Point], ring: &ActiveRing, predicate: Predicate) -> Orientation {
    let mut extreme: Option<(Cursor, Point)> = None;
    for cursor in ring.iter() {
        let point = ring.point_id(cursor).get(points);
        let replace = match extreme {
            None => true,
            Some((_, best)) => best.x < point.x || (best.x == point.x && best.y < point.y),
        };
        if replace {
            extreme = Some((cursor, point));
        }
    }

    let Some((cursor, _)) = extreme else {
        return Orientation::CCW;
    };

    let [a, b, c] = ring.adjacent(cursor).map(|id| id.get(points));
    if predicate.orient_2d(a, b, c).is_cw() {
        Orientation::CW
    } else {
        Orientation::CCW
    }
}

/// Record every vertex's turn into `turns`. Stops at and returns the first
/// colinear vertex, if any.
fn classify_turns(
    points: &[Point],
    ring: &ActiveRing,
    predicate: Predicate,
    turns: &mut [Orientation],
) -> Option<Cursor> {
    for cursor in ring.iter() {
        let [a, b, c] = ring.adjacent(cursor).map(|id| id.get(points));
        let turn = predicate.orient_2d(a, b, c);
        if turn.is_collinear() {
            return Some(cursor);
        }
        turns[cursor] = turn;
    }
    None
}

/// First convex vertex, in ring order, whose triangle holds no other vertex,
/// not even on its border.
fn find_ear(
    points: &[Point],
    ring: &ActiveRing,
    predicate: Predicate,
    orientation: Orientation,
    turns: &[Orientation],
) -> Option<Cursor> {
    ring.iter().find(|&cursor| {
        if turns[cursor] != orientation {
            // reflex, the interior angle exceeds 180 degrees
            return false;
        }

        let [a, b, c] = ring.adjacent(cursor).map(|id| id.get(points));
        !ring
            .iter_between(ring.next(cursor), ring.prev(cursor))
            .any(|other| predicate.in_triangle(ring.point_id(other).get(points), a, b, c))
    })
}
