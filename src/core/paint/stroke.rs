//=========================================================================
// Stroke
//=========================================================================
//
// One freehand line: a bounded, ordered run of sampled points.
//
// Points fill from index 0 and are only ever cleared all at once, so the
// used slots are always a prefix of the buffer.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::render::Point;

//=== Stroke ==============================================================

/// Bounded polyline recorded between a pointer-down and pointer-up.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Point>,
    capacity: usize,
    first_point_pending: bool,
}

impl Stroke {
    /// Creates an empty stroke holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            first_point_pending: false,
        }
    }

    //--- Recording --------------------------------------------------------

    /// Stores `point` in the first free slot and returns its index.
    ///
    /// Storing any point after the first clears the pending flag. Returns
    /// `None` and leaves the stroke untouched when every slot is used.
    pub fn push(&mut self, point: Point) -> Option<usize> {
        if self.is_full() {
            return None;
        }

        let index = self.points.len();
        self.points.push(point);

        if index > 0 {
            self.first_point_pending = false;
        }
        Some(index)
    }

    /// Flags the stroke's first point as not yet connectable.
    pub fn mark_first_point_pending(&mut self) {
        self.first_point_pending = true;
    }

    /// Empties every slot and drops the pending flag.
    pub fn clear(&mut self) {
        self.points.clear();
        self.first_point_pending = false;
    }

    //--- Queries ----------------------------------------------------------

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    pub fn is_first_point_pending(&self) -> bool {
        self.first_point_pending
    }

    /// Segments joining each point to its predecessor.
    ///
    /// Point 0 is paired with itself, producing a zero-length segment so
    /// that a single tap still leaves a dot.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &to)| (self.points[i.saturating_sub(1)], to))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
