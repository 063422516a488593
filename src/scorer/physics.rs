use crate::geometry::{node_center, NodeIndex};

pub type Vec2 = (f64, f64);

/// Displacement from node `a` to node `b`.
#[inline(always)]
pub fn segment_vector(a: NodeIndex, b: NodeIndex) -> Vec2 {
    let (ax, ay) = node_center(a);
    let (bx, by) = node_center(b);
    (bx - ax, by - ay)
}

#[inline(always)]
pub fn dot(u: Vec2, v: Vec2) -> f64 {
    u.0 * v.0 + u.1 * v.1
}

/// Euclidean length, with a zero vector reported as length 1.
#[inline(always)]
pub fn norm(u: Vec2) -> f64 {
    let n = u.0.hypot(u.1);
    if n == 0.0 {
        1.0
    } else {
        n
    }
}

/// Unsigned angle between two vectors in `[0, PI]`.
pub fn angle_between(u: Vec2, v: Vec2) -> f64 {
    let cos = dot(u, v) / (norm(u) * norm(v));
    cos.clamp(-1.0, 1.0).acos()
}

/// Direction change at the middle node of `a -> b -> c`.
pub fn turn_angle(a: NodeIndex, b: NodeIndex, c: NodeIndex) -> f64 {
    angle_between(segment_vector(a, b), segment_vector(b, c))
}

/// Strict counter-clockwise orientation of `p -> q -> r`.
#[inline(always)]
fn ccw(p: Vec2, q: Vec2, r: Vec2) -> bool {
    (r.1 - p.1) * (q.0 - p.0) > (q.1 - p.1) * (r.0 - p.0)
}

/// Proper crossing of segments `a-b` and `c-d`.
///
/// Segments sharing an endpoint never cross. A segment ending on the interior
/// of the other (a T-junction at a node) does count.
pub fn segments_cross(a: NodeIndex, b: NodeIndex, c: NodeIndex, d: NodeIndex) -> bool {
    if a == c || a == d || b == c || b == d {
        return false;
    }
    let (p1, p2) = (node_center(a), node_center(b));
    let (q1, q2) = (node_center(c), node_center(d));

    ccw(p1, q1, q2) != ccw(p2, q1, q2) && ccw(p1, p2, q1) != ccw(p1, p2, q2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_turn_angles() {
        assert!(turn_angle(0, 1, 2).abs() < EPS);
        assert!((turn_angle(0, 1, 4) - FRAC_PI_2).abs() < EPS);
        assert!((turn_angle(0, 4, 5) - FRAC_PI_4).abs() < EPS);
        assert!((turn_angle(1, 2, 1) - PI).abs() < EPS);
    }

    #[test]
    fn test_zero_vector_is_defined() {
        let a = angle_between((0.0, 0.0), (1.0, 0.0));
        assert!(a.is_finite());
        assert!((a - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_crossing_diagonals() {
        assert!(segments_cross(0, 8, 2, 6));
        assert!(segments_cross(0, 5, 6, 1));
        assert!(!segments_cross(0, 4, 4, 8));
        assert!(!segments_cross(0, 1, 3, 4));
    }

    #[test]
    fn test_t_junction_counts() {
        // 4 lies on the interior of the 2-6 diagonal.
        assert!(segments_cross(1, 4, 2, 6));
        assert!(segments_cross(3, 4, 2, 6));
    }

    #[test]
    fn test_parallel_rows_do_not_cross() {
        assert!(!segments_cross(0, 2, 3, 5));
    }
}
