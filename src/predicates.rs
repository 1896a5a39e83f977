//! Exact geometric predicates used by the triangulation.
//!
//! Unlike tolerance-based predicates, nothing here takes an epsilon.
//! Containment is strict and equality is exact, and the merge step's
//! candidate ranking depends on that.

use crate::error::TriangulationError;
use crate::primitives::{Circle2, Edge2, Point2};
use num_traits::Float;

/// Number of decimal digits circumcircle centers are rounded to.
pub const CIRCUMCENTER_DECIMALS: i32 = 2;

/// Computes the circle through three points.
///
/// The center is rounded to [`CIRCUMCENTER_DECIMALS`] decimal digits, with
/// exact ties going to the even digit. The radius is the distance from `a` to
/// the unrounded center.
///
/// # Errors
///
/// Returns [`TriangulationError::CollinearPoints`] when the points are
/// collinear (including when two of them coincide).
///
/// # Example
///
/// ```
/// use dc_delaunay::predicates::circumcircle;
/// use dc_delaunay::Point2;
///
/// let circle = circumcircle(
///     Point2::new(-1.0_f64, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.0, -1.0),
/// )
/// .unwrap();
///
/// assert_eq!(circle.center, Point2::new(0.0, 0.0));
/// assert_eq!(circle.radius, 1.0);
/// ```
pub fn circumcircle<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
) -> Result<Circle2<F>, TriangulationError> {
    circumcircle_with_precision(a, b, c, CIRCUMCENTER_DECIMALS)
}

/// Computes the circle through three points, rounding the center to
/// `decimals` decimal digits.
///
/// Treating the points as complex numbers `x`, `y`, `z`, with
/// `w = (z - x) / (y - x)`, the center is
/// `x + (y - x) * (w - |w|²) / (2i * Im(w))`.
pub fn circumcircle_with_precision<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    decimals: i32,
) -> Result<Circle2<F>, TriangulationError> {
    let two = F::one() + F::one();

    // y - x and z - x
    let (ux, uy) = (b.x - a.x, b.y - a.y);
    let (vx, vy) = (c.x - a.x, c.y - a.y);

    let denom = ux * ux + uy * uy;
    if denom == F::zero() {
        return Err(TriangulationError::CollinearPoints);
    }

    // w = (z - x) / (y - x)
    let w_re = (vx * ux + vy * uy) / denom;
    let w_im = (vy * ux - vx * uy) / denom;
    if w_im == F::zero() {
        return Err(TriangulationError::CollinearPoints);
    }

    // (x - y) * (w - |w|²)
    let w_norm_sq = w_re * w_re + w_im * w_im;
    let (sx, sy) = (-ux, -uy);
    let (tx, ty) = (w_re - w_norm_sq, w_im);
    let prod_re = sx * tx - sy * ty;
    let prod_im = sx * ty + sy * tx;

    // Divide by 2i, then by Im(w). This is the offset from the center to `a`.
    let off_x = prod_im / two / w_im;
    let off_y = -prod_re / two / w_im;

    let radius = off_x.hypot(off_y);
    let center = Point2::new(round_to(a.x - off_x, decimals), round_to(a.y - off_y, decimals));

    if !center.is_finite() || !radius.is_finite() {
        return Err(TriangulationError::CollinearPoints);
    }

    Ok(Circle2::new(center, radius))
}

/// Rounds to `decimals` decimal digits, breaking exact ties to even.
fn round_to<F: Float>(v: F, decimals: i32) -> F {
    let ten = F::from(10.0).unwrap();
    let scale = ten.powi(decimals);
    round_half_even(v * scale) / scale
}

fn round_half_even<F: Float>(v: F) -> F {
    let half = F::from(0.5).unwrap();
    if (v - v.trunc()).abs() == half {
        let two = F::one() + F::one();
        (v / two).round() * two
    } else {
        v.round()
    }
}

/// Returns `true` iff `point` lies strictly inside the circle.
///
/// An absent point is never contained. Points on the boundary are not
/// contained.
///
/// # Example
///
/// ```
/// use dc_delaunay::predicates::contains;
/// use dc_delaunay::Point2;
///
/// let center = Point2::new(0.0_f64, 0.0);
/// assert!(contains(center, 1.0, Some(Point2::new(0.5, 0.5))));
/// assert!(!contains(center, 1.0, Some(Point2::new(1.0, 1.0))));
/// assert!(!contains(center, 1.0, None));
/// ```
#[inline]
pub fn contains<F: Float>(center: Point2<F>, radius: F, point: Option<Point2<F>>) -> bool {
    point.is_some_and(|p| Circle2::new(center, radius).contains_strict(p))
}

/// Angle in degrees between the direction vectors of two edges, in `[0, 180]`.
///
/// The normalized dot product is clamped to `[-1, 1]` before `acos`. A
/// zero-length direction gives `0`.
pub fn angle_between<F: Float>(e1: &Edge2<F>, e2: &Edge2<F>) -> F {
    match (e1.direction().normalize(), e2.direction().normalize()) {
        (Some(u), Some(v)) => {
            let dot = u.dot(v).max(-F::one()).min(F::one());
            dot.acos().to_degrees()
        }
        _ => F::zero(),
    }
}

/// Ranking key for a merge candidate: `180 - angle_between(baseline, candidate)`.
///
/// Smaller is better. A candidate pointing straight back along the baseline
/// scores 0 and therefore ranks first.
#[inline]
pub fn candidate_theta<F: Float>(baseline: &Edge2<F>, candidate: &Edge2<F>) -> F {
    F::from(180.0).unwrap() - angle_between(baseline, candidate)
}

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are exactly collinear.
    Collinear,
}

/// Orientation of the ordered triple `p`, `q`, `r`, with no tolerance.
#[inline]
pub fn orientation<F: Float>(p: Point2<F>, q: Point2<F>, r: Point2<F>) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val > F::zero() {
        Orientation::Clockwise
    } else if val < F::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `q` lies within the axis-aligned bounding box of `p`
/// and `r`.
///
/// Meant for points already known to be collinear with `p` and `r`.
#[inline]
pub fn on_segment<F: Float>(p: Point2<F>, q: Point2<F>, r: Point2<F>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Tests whether two segments intersect, including touching and collinear
/// overlap.
///
/// # Example
///
/// ```
/// use dc_delaunay::predicates::intersects;
/// use dc_delaunay::primitives::{Edge2, Point2};
///
/// let a = Edge2::new(Point2::new(10.0_f64, 0.0), Point2::new(0.0, 10.0));
/// let b = Edge2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
/// assert!(intersects(&a, &b));
/// ```
pub fn intersects<F: Float>(e1: &Edge2<F>, e2: &Edge2<F>) -> bool {
    let (p1, q1) = (e1.p(), e1.q());
    let (p2, q2) = (e2.p(), e2.q());

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
