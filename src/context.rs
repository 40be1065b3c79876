use crate::{ring::ActiveRing, utils::Orientation, Point};

/// Read only view on a running ear clipper, handed to [`crate::Observer`].
pub struct Context<'a> {
    /// caller's points, ids index into it
    pub points: &'a [Point],
    /// vertices not yet clipped or pruned
    pub ring: &'a ActiveRing,
    /// winding of the whole polygon
    pub orientation: Orientation,
    /// triangle indices emitted so far
    pub result: &'a [u16],
}

impl<'a> Context<'a> {
    pub fn new(
        points: &'a [Point],
        ring: &'a ActiveRing,
        orientation: Orientation,
        result: &'a [u16],
    ) -> Self {
        Self {
            points,
            ring,
            orientation,
            result,
        }
    }

    /// points of the remaining outline, in polygon order
    pub fn remaining_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.ring.point_ids().map(|id| id.get(self.points))
    }

    /// number of triangles emitted so far
    pub fn triangle_count(&self) -> usize {
        self.result.len() / 3
    }
}
