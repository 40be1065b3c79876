use crate::PointId;

/// Cursor into an [`ActiveRing`], only valid while that slot is not removed.
pub type Cursor = usize;

/// The polygon vertices still in play, as an index based doubly linked ring.
///
/// Slots are never reused, so walking from `head` always yields the
/// remaining vertices in their original polygon order. `head` is kept at the
/// lowest surviving slot.
///
/// Only the clipper builds and shrinks a ring, callers get read access
/// through [`crate::Context`]:
///
/// ```compile_fail
/// use earclip_rs::{ActiveRing, PointId};
///
/// let _ring = ActiveRing::new(Vec::<PointId>::new());
/// ```
#[derive(Debug, Clone)]
pub struct ActiveRing {
    ids: Vec<PointId>,
    next: Vec<Cursor>,
    prev: Vec<Cursor>,
    head: Cursor,
    len: usize,
}

impl ActiveRing {
    pub(crate) fn new(ids: Vec<PointId>) -> Self {
        let len = ids.len();
        let next = (0..len).map(|i| (i + 1) % len).collect();
        let prev = (0..len).map(|i| (i + len - 1) % len).collect();

        Self {
            ids,
            next,
            prev,
            head: 0,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn point_id(&self, cursor: Cursor) -> PointId {
        self.ids[cursor]
    }

    #[inline(always)]
    pub fn next(&self, cursor: Cursor) -> Cursor {
        self.next[cursor]
    }

    #[inline(always)]
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        self.prev[cursor]
    }

    /// (previous, current, next) point ids around `cursor`
    #[inline(always)]
    pub fn adjacent(&self, cursor: Cursor) -> [PointId; 3] {
        [
            self.ids[self.prev[cursor]],
            self.ids[cursor],
            self.ids[self.next[cursor]],
        ]
    }

    /// Unlink `cursor` in O(1).
    pub(crate) fn remove(&mut self, cursor: Cursor) {
        debug_assert!(self.len > 0);

        let prev = self.prev[cursor];
        let next = self.next[cursor];
        self.next[prev] = next;
        self.prev[next] = prev;

        if cursor == self.head {
            self.head = next;
        }
        self.len -= 1;
    }

    /// iter cursors in polygon order, starting from the lowest slot
    pub fn iter(&self) -> impl Iterator<Item = Cursor> + '_ {
        let mut cursor = self.head;
        (0..self.len).map(move |_| {
            let current = cursor;
            cursor = self.next[cursor];
            current
        })
    }

    /// iter cursors strictly between `from` and `to`, walking forward
    pub fn iter_between(&self, from: Cursor, to: Cursor) -> impl Iterator<Item = Cursor> + '_ {
        let mut cursor = self.next[from];
        std::iter::from_fn(move || {
            if cursor == to || cursor == from {
                return None;
            }
            let current = cursor;
            cursor = self.next[cursor];
            Some(current)
        })
    }

    /// iter remaining point ids in polygon order
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.iter().map(|cursor| self.ids[cursor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: u16) -> ActiveRing {
        ActiveRing::new((0..n).map(PointId).collect())
    }

    fn ids(ring: &ActiveRing) -> Vec<u16> {
        ring.point_ids().map(|id| id.as_u16()).collect()
    }

    #[test]
    fn test_ring_order() {
        let mut r = ring(5);
        assert_eq!(ids(&r), vec![0, 1, 2, 3, 4]);
        assert_eq!(r.adjacent(0), [PointId(4), PointId(0), PointId(1)]);
        assert_eq!(r.adjacent(4), [PointId(3), PointId(4), PointId(0)]);

        r.remove(2);
        assert_eq!(ids(&r), vec![0, 1, 3, 4]);
        assert_eq!(r.adjacent(3), [PointId(1), PointId(3), PointId(4)]);

        // removing head keeps the lowest survivor first
        r.remove(0);
        assert_eq!(ids(&r), vec![1, 3, 4]);
        assert_eq!(r.adjacent(1), [PointId(4), PointId(1), PointId(3)]);
        assert_eq!(r.len(), 3);

        r.remove(4);
        r.remove(1);
        r.remove(3);
        assert!(r.is_empty());
        assert_eq!(ids(&r), Vec::<u16>::new());
    }

    #[test]
    fn test_iter_between() {
        let mut r = ring(6);
        assert_eq!(r.iter_between(4, 1).collect::<Vec<_>>(), vec![5, 0]);
        assert_eq!(r.iter_between(0, 2).collect::<Vec<_>>(), vec![1]);

        r.remove(5);
        assert_eq!(r.iter_between(3, 1).collect::<Vec<_>>(), vec![4, 0]);

        // walking from a vertex's next to its prev skips the vertex itself
        let r = ring(4);
        assert_eq!(r.iter_between(1, 3).collect::<Vec<_>>(), vec![2]);
        let r = ring(3);
        assert_eq!(r.iter_between(1, 2).count(), 0);
    }
}
