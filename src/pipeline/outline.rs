use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::point::Point;

use crate::types::Outline;

/// Traces the boundary of every connected foreground region in the mask,
/// outer borders and holes alike, keeping the parent topology.
///
/// Straight runs are compressed to their endpoints so downstream geometry
/// works on the minimal closed polygon.
pub fn extract_outlines(mask: &GrayImage) -> Vec<Outline> {
    find_contours::<i32>(mask)
        .into_iter()
        .map(|contour| Outline {
            points: compress_collinear(contour.points),
            border_type: contour.border_type,
            parent: contour.parent,
        })
        .collect()
}

/// Picks the hand candidate: the outline enclosing the largest area.
///
/// Returns `None` when there is no outline or every outline is degenerate
/// (zero area). Exact-area ties resolve to the earliest outline; the order is
/// an artifact of the trace, not a guarantee.
pub fn dominant_outline(outlines: &[Outline]) -> Option<usize> {
    let mut best = None;
    let mut max_area = 0.0f64;
    for (idx, outline) in outlines.iter().enumerate() {
        let area = outline.area();
        if area > max_area {
            max_area = area;
            best = Some(idx);
        }
    }
    best
}

/// Drops points that sit strictly inside a straight run of the closed
/// boundary. Direction reversals (one-pixel spurs) are kept: removing them
/// would cut the spur off the outline.
fn compress_collinear(points: Vec<Point<i32>>) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        if !is_interior_of_run(prev, cur, next) {
            kept.push(cur);
        }
    }
    kept
}

fn is_interior_of_run(prev: Point<i32>, cur: Point<i32>, next: Point<i32>) -> bool {
    let ab = (cur.x as i64 - prev.x as i64, cur.y as i64 - prev.y as i64);
    let bc = (next.x as i64 - cur.x as i64, next.y as i64 - cur.y as i64);
    if ab == (0, 0) {
        // Duplicate of the previous point.
        return true;
    }
    let cross = ab.0 * bc.1 - ab.1 * bc.0;
    let dot = ab.0 * bc.0 + ab.1 * bc.1;
    cross == 0 && dot > 0
}
