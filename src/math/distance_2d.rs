/// Euclidean distance between `(ax, ay)` and `(bx, by)`.
#[must_use]
pub fn point_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Projects point `(px, py)` onto the segment from `(ax, ay)` to `(bx, by)`,
/// returning `(closest_x, closest_y, t)` with `t` clamped to `[0, 1]`.
///
/// A degenerate segment (zero length) is treated as the single point
/// `(ax, ay)` with `t = 0`.
#[must_use]
pub fn project_onto_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> (f64, f64, f64) {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (ax, ay, 0.0);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    (ax + t * dx, ay + t * dy, t)
}

/// 2D cross product of the segment direction `(bx - ax, by - ay)` and the
/// vector from `(ax, ay)` to `(px, py)`.
///
/// Positive when `(px, py)` is left of the directed segment, negative when
/// right, zero when collinear.
#[must_use]
pub fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64, px: f64, py: f64) -> f64 {
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── project_onto_segment tests ──

    #[test]
    fn project_perpendicular() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), t = 0.5.
        let (cx, cy, t) = project_onto_segment(1.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((cx - 1.0).abs() < TOL, "cx={cx}");
        assert!(cy.abs() < TOL, "cy={cy}");
        assert!((t - 0.5).abs() < TOL, "t={t}");
    }

    #[test]
    fn project_clamps_to_start() {
        // Point (-1, 0) to segment (0,0)→(2,0). Clamped to (0,0), t = 0.
        let (cx, cy, t) = project_onto_segment(-1.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!(cx.abs() < TOL && cy.abs() < TOL, "({cx}, {cy})");
        assert!(t.abs() < TOL, "t={t}");
    }

    #[test]
    fn project_clamps_to_end() {
        // Point (5, 1) to segment (0,0)→(2,0). Clamped to (2,0), t = 1.
        let (cx, cy, t) = project_onto_segment(5.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((cx - 2.0).abs() < TOL && cy.abs() < TOL, "({cx}, {cy})");
        assert!((t - 1.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn project_degenerate_segment() {
        // Zero-length segment collapses to its start point.
        let (cx, cy, t) = project_onto_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!(cx.abs() < TOL && cy.abs() < TOL, "({cx}, {cy})");
        assert!(t.abs() < TOL, "t={t}");
        assert!((point_dist(3.0, 4.0, cx, cy) - 5.0).abs() < TOL);
    }

    // ── cross_2d tests ──

    #[test]
    fn cross_left_positive() {
        // (5, 3) is left of the eastbound segment (0,0)→(10,0).
        let c = cross_2d(0.0, 0.0, 10.0, 0.0, 5.0, 3.0);
        assert!(c > 0.0, "c={c}");
    }

    #[test]
    fn cross_right_negative() {
        let c = cross_2d(0.0, 0.0, 10.0, 0.0, 5.0, -3.0);
        assert!(c < 0.0, "c={c}");
    }

    #[test]
    fn cross_collinear_zero() {
        let c = cross_2d(0.0, 0.0, 10.0, 0.0, 12.0, 0.0);
        assert!(c.abs() < TOL, "c={c}");
    }
}
