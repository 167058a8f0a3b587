use crate::types::Point;

/// One line segment of an in-progress freehand stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Tracks whether a freehand stroke is in progress and where it last was.
///
/// Pointer handlers feed this tracker; it never touches the canvas itself.
/// A segment is only produced between a `begin` and the matching `end`, so
/// stray move events while the pointer is up cannot paint anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeTracker {
    last: Option<Point>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Arm the tracker at the pointer-down position
    pub fn begin(&mut self, point: Point) {
        self.last = Some(point);
    }

    /// Advance the stroke to `point`, yielding the segment to paint.
    /// No-op (returns None) when no stroke is active.
    pub fn extend(&mut self, point: Point) -> Option<Segment> {
        let from = self.last?;
        self.last = Some(point);
        Some(Segment { from, to: point })
    }

    /// Disarm on pointer-up or pointer-leave
    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_without_begin_is_noop() {
        let mut tracker = StrokeTracker::new();
        assert_eq!(tracker.extend(Point::new(10.0, 10.0)), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_segments_follow_the_pointer() {
        let mut tracker = StrokeTracker::new();
        tracker.begin(Point::new(0.0, 0.0));
        assert!(tracker.is_active());

        let first = tracker.extend(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(first.from, Point::new(0.0, 0.0));
        assert_eq!(first.to, Point::new(3.0, 4.0));

        // the next segment starts where the previous one ended
        let second = tracker.extend(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(second.from, Point::new(3.0, 4.0));
        assert_eq!(second.to, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_end_disarms_tracker() {
        let mut tracker = StrokeTracker::new();
        tracker.begin(Point::new(1.0, 1.0));
        tracker.end();
        assert!(!tracker.is_active());
        assert_eq!(tracker.extend(Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn test_end_is_safe_when_idle() {
        let mut tracker = StrokeTracker::new();
        tracker.end();
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_begin_restarts_from_new_origin() {
        let mut tracker = StrokeTracker::new();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.extend(Point::new(10.0, 0.0));
        tracker.end();

        tracker.begin(Point::new(100.0, 100.0));
        let seg = tracker.extend(Point::new(110.0, 100.0)).unwrap();
        assert_eq!(seg.from, Point::new(100.0, 100.0));
    }
}
