use imageproc::point::Point;

/// Computes the convex hull of an outline as indices into its point list,
/// via Andrew's monotone chain.
///
/// The hull is strictly convex (collinear boundary points are dropped) and
/// always wound the same direction, which the defect stage relies on. Fewer
/// than three distinct points yield no usable hull and an empty result.
pub fn convex_hull_indices(points: &[Point<i32>]) -> Vec<usize> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&i| (points[i].x, points[i].y));
    order.dedup_by(|a, b| points[*a] == points[*b]);
    if order.len() < 3 {
        return Vec::new();
    }

    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2
            && cross(
                points[lower[lower.len() - 2]],
                points[lower[lower.len() - 1]],
                points[i],
            ) <= 0
        {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(
                points[upper[upper.len() - 2]],
                points[upper[upper.len() - 1]],
                points[i],
            ) <= 0
        {
            upper.pop();
        }
        upper.push(i);
    }

    // The chain endpoints are shared between the two halves.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    if lower.len() < 3 {
        // All distinct points were collinear.
        return Vec::new();
    }
    lower
}

fn cross(o: Point<i32>, a: Point<i32>, b: Point<i32>) -> i64 {
    (a.x as i64 - o.x as i64) * (b.y as i64 - o.y as i64)
        - (a.y as i64 - o.y as i64) * (b.x as i64 - o.x as i64)
}
