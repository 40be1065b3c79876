use crate::error::TriangulateError;
use crate::shape::Point;

/// Type alias to the underlying type for PointId.
/// Index buffers consumed by the draw calls are 16 bit, this also caps how
/// many points a single polygon may have, see [`MAX_POINTS`].
type NumType = u16;

/// Maximum number of points one polygon can be triangulated with.
pub const MAX_POINTS: usize = NumType::MAX as usize + 1;

/// new type for point id, it is the index in the caller's point slice
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointId(pub(crate) NumType);

impl PointId {
    /// Get the inner value as usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Get the inner value as u16
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// helper method used in the crate when I know the `PointId` is valid for `points`
    #[inline(always)]
    pub(crate) fn get(&self, points: &[Point]) -> Point {
        points[self.as_usize()]
    }
}

/// Ids of the points which are not an exact copy of some earlier point,
/// in input order.
///
/// Fails with [`TriangulateError::TooManyPoints`] when an id would not fit
/// the 16 bit index range.
pub fn dedup_indices(points: &[Point]) -> Result<Vec<PointId>, TriangulateError> {
    if points.len() > MAX_POINTS {
        return Err(TriangulateError::TooManyPoints { len: points.len() });
    }

    let mut result = Vec::with_capacity(points.len());
    for (idx, point) in points.iter().enumerate() {
        if points[..idx].iter().any(|earlier| earlier == point) {
            continue;
        }
        result.push(PointId(idx as NumType));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
            Point::new(10., 0.),
        ];
        let ids = dedup_indices(&points).unwrap();
        assert_eq!(ids, vec![PointId(0), PointId(2), PointId(3)]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let points = vec![
            Point::new(1., 2.),
            Point::new(3., 4.),
            Point::new(1., 2.),
            Point::new(5., 6.),
            Point::new(3., 4.),
        ];
        let once = dedup_indices(&points).unwrap();
        let survivors = once.iter().map(|id| id.get(&points)).collect::<Vec<_>>();
        let twice = dedup_indices(&survivors).unwrap();

        assert_eq!(twice.len(), once.len());
        for (pos, id) in twice.iter().enumerate() {
            assert_eq!(id.as_usize(), pos);
        }
    }

    #[test]
    fn test_dedup_exact_equality() {
        // no tolerance, nearly equal points are kept
        let points = vec![Point::new(0., 0.), Point::new(0., 1e-6), Point::new(-0., 0.)];
        let ids = dedup_indices(&points).unwrap();
        assert_eq!(ids, vec![PointId(0), PointId(1)]);
    }

    #[test]
    fn test_dedup_too_many_points() {
        let points = (0..MAX_POINTS + 1)
            .map(|i| Point::new(i as crate::Float, 0.))
            .collect::<Vec<_>>();
        assert_eq!(
            dedup_indices(&points),
            Err(TriangulateError::TooManyPoints {
                len: MAX_POINTS + 1
            })
        );
    }

    #[test]
    fn test_max_points() {
        assert_eq!(MAX_POINTS, 65536);
        assert_eq!(PointId(u16::MAX).as_usize(), MAX_POINTS - 1);
    }
}
