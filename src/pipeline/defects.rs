use imageproc::point::Point;

use crate::error::PipelineError;
use crate::types::{ConvexityDefect, FingerEvent};

/// Finds every concave region between the outline and its convex hull.
///
/// For each pair of hull-adjacent outline indices the outline segment strictly
/// between them is walked and the point farthest from the hull chord recorded.
/// Segments where the outline never leaves the chord produce no defect.
/// Defects come out in outline traversal order.
pub fn convexity_defects(
    points: &[Point<i32>],
    hull: &[usize],
) -> Result<Vec<ConvexityDefect>, PipelineError> {
    if points.len() < 3 || hull.len() < 3 {
        return Ok(Vec::new());
    }

    let mut ordered = hull.to_vec();
    for &idx in &ordered {
        // Validate before walking; a bad index here is an internal fault.
        point_at(points, idx)?;
    }
    ordered.sort_unstable();

    let n = points.len();
    let mut defects = Vec::new();
    for seg in 0..ordered.len() {
        let start = ordered[seg];
        let end = ordered[(seg + 1) % ordered.len()];
        let chord_a = points[start];
        let chord_b = points[end];

        let mut far = None;
        let mut depth = 0.0f32;
        let mut i = (start + 1) % n;
        while i != end {
            let d = chord_distance(chord_a, chord_b, points[i]);
            if d > depth {
                depth = d;
                far = Some(i);
            }
            i = (i + 1) % n;
        }

        if let Some(far) = far {
            defects.push(ConvexityDefect {
                start,
                end,
                far,
                depth,
            });
        }
    }
    Ok(defects)
}

/// Classifies defects into finger-gap events: a defect counts iff its depth
/// strictly exceeds the threshold. Order is preserved.
pub fn classify_fingers(
    points: &[Point<i32>],
    defects: &[ConvexityDefect],
    depth_threshold: f32,
) -> Result<Vec<FingerEvent>, PipelineError> {
    let mut events = Vec::new();
    for defect in defects {
        if defect.depth <= depth_threshold {
            continue;
        }
        events.push(FingerEvent {
            start: point_at(points, defect.start)?,
            end: point_at(points, defect.end)?,
            far: point_at(points, defect.far)?,
            depth: defect.depth,
        });
    }
    Ok(events)
}

/// Perpendicular distance from `p` to the line through `a` and `b`, in pixels.
/// Falls back to the point distance when the chord is degenerate.
fn chord_distance(a: Point<i32>, b: Point<i32>, p: Point<i32>) -> f32 {
    let abx = (b.x - a.x) as f64;
    let aby = (b.y - a.y) as f64;
    let apx = (p.x - a.x) as f64;
    let apy = (p.y - a.y) as f64;
    let chord_len = (abx * abx + aby * aby).sqrt();
    if chord_len == 0.0 {
        return (apx * apx + apy * apy).sqrt() as f32;
    }
    ((abx * apy - aby * apx).abs() / chord_len) as f32
}

fn point_at(points: &[Point<i32>], index: usize) -> Result<Point<i32>, PipelineError> {
    match points.get(index) {
        Some(p) => Ok(*p),
        None => {
            debug_assert!(
                false,
                "geometry index {index} out of range for {} outline points",
                points.len()
            );
            log::error!(
                "geometry index {index} out of range for outline of {} points, dropping frame",
                points.len()
            );
            Err(PipelineError::InvalidGeometryIndex {
                index,
                len: points.len(),
            })
        }
    }
}
