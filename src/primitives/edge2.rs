//! Undirected 2D edge type.

use super::{Point2, Vec2};
use crate::error::TriangulationError;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An undirected edge between two distinct points.
///
/// Equality, hashing and ordering are symmetric: `Edge2::new(p, q)` and
/// `Edge2::new(q, p)` are the same edge. All three go through a canonical key
/// (the endpoints sorted by x, then y), so the edge behaves the same in
/// `HashSet` and `BTreeSet`.
///
/// The construction order is still remembered and drives [`direction`],
/// which angle computations depend on.
///
/// [`direction`]: Edge2::direction
///
/// # Example
///
/// ```
/// use dc_delaunay::primitives::{Edge2, Point2};
///
/// let p = Point2::new(0.0_f64, 0.0);
/// let q = Point2::new(1.0, 0.0);
/// assert_eq!(Edge2::new(p, q), Edge2::new(q, p));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge2<F> {
    p: Point2<F>,
    q: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates an edge from `p` to `q`.
    ///
    /// The endpoints must differ; a self-loop is a caller bug and trips a
    /// debug assertion. Use [`Edge2::try_new`] for unchecked input.
    #[inline]
    pub fn new(p: Point2<F>, q: Point2<F>) -> Self {
        debug_assert!(p != q, "edge endpoints must differ");
        Self { p, q }
    }

    /// Creates an edge, rejecting equal endpoints.
    pub fn try_new(p: Point2<F>, q: Point2<F>) -> Result<Self, TriangulationError> {
        if p == q {
            return Err(TriangulationError::DegenerateEdge);
        }
        Ok(Self { p, q })
    }

    /// First endpoint, as constructed.
    #[inline]
    pub fn p(&self) -> Point2<F> {
        self.p
    }

    /// Second endpoint, as constructed.
    #[inline]
    pub fn q(&self) -> Point2<F> {
        self.q
    }

    /// Direction vector `q - p`.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        self.q - self.p
    }

    /// Returns the edge with its endpoints swapped. Equal to `self`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p: self.q,
            q: self.p,
        }
    }

    /// Returns `true` if `point` is one of the endpoints.
    #[inline]
    pub fn touches(&self, point: Point2<F>) -> bool {
        self.p == point || self.q == point
    }

    /// Returns the endpoint opposite `point`, or `None` if `point` is not an
    /// endpoint.
    #[inline]
    pub fn other(&self, point: Point2<F>) -> Option<Point2<F>> {
        if self.p == point {
            Some(self.q)
        } else if self.q == point {
            Some(self.p)
        } else {
            None
        }
    }

    /// Endpoints sorted by x, then y.
    #[inline]
    pub fn canonical(&self) -> (Point2<F>, Point2<F>) {
        if self.p.cmp_xy(&self.q) == Ordering::Greater {
            (self.q, self.p)
        } else {
            (self.p, self.q)
        }
    }
}

impl<F: Float> PartialEq for Edge2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl<F: Float> Eq for Edge2<F> {}

impl<F: Float> Hash for Edge2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl<F: Float> Ord for Edge2<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a0, a1) = self.canonical();
        let (b0, b1) = other.canonical();
        a0.cmp(&b0).then_with(|| a1.cmp(&b1))
    }
}

impl<F: Float> PartialOrd for Edge2<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
