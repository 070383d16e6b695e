use imageproc::contours::BorderType;
use imageproc::point::Point;

/// Closed boundary of one connected foreground region.
///
/// Points are in traversal order with collinear runs compressed, so a straight
/// edge is represented by its two endpoints only.
#[derive(Clone, Debug)]
pub struct Outline {
    pub points: Vec<Point<i32>>,
    /// Whether this border encloses foreground or a hole inside it.
    pub border_type: BorderType,
    /// Index of the enclosing outline, if any.
    pub parent: Option<usize>,
}

impl Outline {
    /// Enclosed area by the shoelace formula over the boundary points.
    pub fn area(&self) -> f64 {
        let pts = &self.points;
        if pts.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0i64;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            twice_area += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
        }
        twice_area.unsigned_abs() as f64 / 2.0
    }
}

/// Concave region between the hand outline and its convex hull.
///
/// `start`/`end` are hull-adjacent outline indices bounding the region, `far`
/// is the outline index of the point farthest from the hull chord, and `depth`
/// is that point's perpendicular distance to the chord, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexityDefect {
    pub start: usize,
    pub end: usize,
    pub far: usize,
    pub depth: f32,
}

/// A convexity defect deep enough to count as a gap between two extended
/// fingers. Carries the resolved points for annotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerEvent {
    pub start: Point<i32>,
    pub end: Point<i32>,
    pub far: Point<i32>,
    pub depth: f32,
}

/// Result of analyzing one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameAnalysis {
    /// Number of accepted finger-gap events.
    pub finger_count: usize,
    /// Accepted events in outline traversal order.
    pub events: Vec<FingerEvent>,
}

impl FrameAnalysis {
    /// Analysis of a frame with no usable hand candidate.
    pub(crate) fn no_hand() -> Self {
        Self::default()
    }
}
