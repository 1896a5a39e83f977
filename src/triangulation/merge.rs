//! Zig-zag merge of two adjacent sub-triangulations.
//!
//! The merge walks upward along the seam between a left and a right
//! triangulation. Each side keeps an *anchor*, starting at its lowest point.
//! At every step the neighbors of each anchor that lie above it are ranked by
//! [`candidate_theta`] against the current rung. Candidates whose circumcircle
//! (with both anchors) contains the next-ranked candidate are obsolete and
//! their edge to the anchor is trimmed. The surviving candidate of each side
//! is a *finalist*; the empty-circumcircle test between the two finalists
//! decides which anchor advances, and a new rung joins the updated anchors.
//!
//! # Algorithm
//!
//! 1. Anchors: lowest point of each half (first in sequence on ties).
//! 2. Right scan, then left scan, producing up to one finalist per side. A
//!    right candidate must not continue straight along the base edge; a left
//!    candidate must not continue straight along the current rung.
//! 3. Decide: with two finalists, the right one wins unless its circumcircle
//!    contains the left one; otherwise the left one wins unless its
//!    circumcircle contains the right one. A lone finalist always wins.
//! 4. Advance the winning anchor, add the rung, re-rank both sides.
//! 5. Stop when no finalist emerges. If both finalists fail the test, both
//!    are dropped and the remaining queued candidates are tried.
//!
//! Lowest-point anchors stand in for the lower common tangent of the two
//! hulls. They coincide for most inputs but not all.

use crate::error::TriangulationError;
use crate::predicates::{candidate_theta, circumcircle, contains};
use crate::primitives::{neighbors_of, Edge2, EdgeSet, Point2};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Counters describing one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Cross edges added, including the initial base edge.
    pub rungs: usize,
    /// Edges removed from either half as obsolete.
    pub trimmed: usize,
    /// Passes through the candidate loop.
    pub iterations: usize,
    /// Passes where both finalists failed the circumcircle test.
    pub rejected: usize,
}

/// Which anchor advances after a decision.
#[derive(Clone, Copy)]
enum Advance<F> {
    Left(Point2<F>),
    Right(Point2<F>),
}

/// One half of the merge: its anchor, its (owned) edges and its ranked
/// candidate queue.
struct Side<F> {
    anchor: Point2<F>,
    edges: EdgeSet<F>,
    candidates: VecDeque<Point2<F>>,
}

impl<F: Float> Side<F> {
    fn new(anchor: Point2<F>, edges: EdgeSet<F>) -> Self {
        Self {
            anchor,
            edges,
            candidates: VecDeque::new(),
        }
    }

    /// Re-ranks the neighbors of the anchor that lie strictly above it.
    ///
    /// The baseline runs from the opposite anchor to this one; candidates are
    /// ordered by ascending theta, ties keeping neighbor order.
    fn rerank(&mut self, opposite: Point2<F>) {
        let anchor = self.anchor;
        let baseline = Edge2::new(opposite, anchor);

        let mut ranked: Vec<(F, Point2<F>)> = neighbors_of(anchor, &self.edges)
            .into_iter()
            .filter(|n| n.y > anchor.y)
            .map(|n| (candidate_theta(&baseline, &Edge2::new(anchor, n)), n))
            .collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        self.candidates = ranked.into_iter().map(|(_, n)| n).collect();
    }

    /// Pops candidates until one survives, trimming obsolete edges on the way.
    ///
    /// Candidates whose theta against `baseline` reaches 180 are skipped.
    /// `l_anchor` and `r_anchor` are the current anchors of the whole merge,
    /// in that order, since the circumcircle is always taken through them.
    fn scan(
        &mut self,
        baseline: &Edge2<F>,
        l_anchor: Point2<F>,
        r_anchor: Point2<F>,
        stats: &mut MergeStats,
    ) -> Result<Option<Point2<F>>, TriangulationError> {
        let straight = F::from(180.0).unwrap();

        while let Some(candidate) = self.candidates.pop_front() {
            if candidate_theta(baseline, &Edge2::new(self.anchor, candidate)) >= straight {
                tracing::trace!("candidate collinear with rung, skipped");
                continue;
            }

            // An absent next candidate is never contained, so the circle is
            // only needed when there is something to test against it.
            if let Some(next) = self.candidates.front().copied() {
                let circle = circumcircle(l_anchor, r_anchor, candidate)?;
                if contains(circle.center, circle.radius, Some(next)) {
                    self.edges.remove(&Edge2::new(candidate, self.anchor));
                    stats.trimmed += 1;
                    tracing::trace!("trimmed obsolete edge at anchor");
                    continue;
                }
            }

            return Ok(Some(candidate));
        }

        Ok(None)
    }
}

/// Returns the point with the smallest y; the first one wins ties.
fn lowest<F: Float>(points: &[Point2<F>]) -> Option<Point2<F>> {
    points
        .iter()
        .copied()
        .reduce(|best, p| if p.y < best.y { p } else { best })
}

/// Stitches two triangulations of x-separated point sets into one.
///
/// `left_edges` and `right_edges` are taken by value: obsolete edges are
/// removed from these private copies and never from the caller's data.
///
/// Returns the rung edges (the base edge included) together with whatever
/// remains of both halves. If either half has no points there is nothing to
/// stitch and the union of the two edge sets is returned.
///
/// # Errors
///
/// Propagates [`TriangulationError::CollinearPoints`] when a circumcircle
/// needed for a decision is degenerate.
///
/// # Example
///
/// ```
/// use dc_delaunay::triangulation::{merge, triangulate_base};
/// use dc_delaunay::Point2;
///
/// let left = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 2.0)];
/// let right = [Point2::new(3.0, 0.0), Point2::new(4.0, 2.0)];
///
/// let edges = merge(
///     &left,
///     &right,
///     triangulate_base(&left).unwrap(),
///     triangulate_base(&right).unwrap(),
/// )
/// .unwrap();
///
/// assert!(edges.len() >= 3);
/// ```
pub fn merge<F: Float>(
    left_points: &[Point2<F>],
    right_points: &[Point2<F>],
    left_edges: EdgeSet<F>,
    right_edges: EdgeSet<F>,
) -> Result<EdgeSet<F>, TriangulationError> {
    merge_with_stats(left_points, right_points, left_edges, right_edges).map(|(edges, _)| edges)
}

/// Same as [`merge`], also returning [`MergeStats`].
pub fn merge_with_stats<F: Float>(
    left_points: &[Point2<F>],
    right_points: &[Point2<F>],
    left_edges: EdgeSet<F>,
    right_edges: EdgeSet<F>,
) -> Result<(EdgeSet<F>, MergeStats), TriangulationError> {
    let mut stats = MergeStats::default();

    let (Some(l_anchor), Some(r_anchor)) = (lowest(left_points), lowest(right_points)) else {
        return Ok((left_edges.union(right_edges), stats));
    };

    let mut left = Side::new(l_anchor, left_edges);
    let mut right = Side::new(r_anchor, right_edges);

    let base_edge = Edge2::new(l_anchor, r_anchor);
    let mut rungs = EdgeSet::new();
    rungs.insert(base_edge);
    stats.rungs += 1;

    left.rerank(right.anchor);
    right.rerank(left.anchor);

    while !left.candidates.is_empty() || !right.candidates.is_empty() {
        stats.iterations += 1;

        let (l, r) = (left.anchor, right.anchor);
        let r_final = right.scan(&base_edge, l, r, &mut stats)?;
        let l_final = left.scan(&Edge2::new(r, l), l, r, &mut stats)?;

        let step = match (l_final, r_final) {
            (Some(lc), Some(rc)) => {
                let r_circle = circumcircle(l, r, rc)?;
                if !contains(r_circle.center, r_circle.radius, Some(lc)) {
                    Advance::Right(rc)
                } else {
                    let l_circle = circumcircle(l, r, lc)?;
                    if !contains(l_circle.center, l_circle.radius, Some(rc)) {
                        Advance::Left(lc)
                    } else {
                        // Each finalist's circle holds the other. Drop both
                        // and keep going with what is left in the queues.
                        stats.rejected += 1;
                        tracing::trace!(iteration = stats.iterations, "both finalists rejected");
                        continue;
                    }
                }
            }
            (Some(lc), None) => Advance::Left(lc),
            (None, Some(rc)) => Advance::Right(rc),
            (None, None) => break,
        };

        // Both queues are re-ranked below, so a losing finalist is
        // reconsidered from the fresh ranking.
        match step {
            Advance::Left(lc) => left.anchor = lc,
            Advance::Right(rc) => right.anchor = rc,
        }
        tracing::trace!("anchor advanced");

        rungs.insert(Edge2::new(left.anchor, right.anchor));
        stats.rungs += 1;

        left.rerank(right.anchor);
        right.rerank(left.anchor);
    }

    tracing::debug!(
        left = left_points.len(),
        right = right_points.len(),
        rungs = stats.rungs,
        trimmed = stats.trimmed,
        iterations = stats.iterations,
        rejected = stats.rejected,
        "merged halves"
    );

    let merged = rungs.union(left.edges).union(right.edges);
    Ok((merged, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::triangulate_base;

    fn pt(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn merge_halves(left: &[Point2<f64>], right: &[Point2<f64>]) -> (EdgeSet<f64>, MergeStats) {
        merge_with_stats(
            left,
            right,
            triangulate_base(left).unwrap(),
            triangulate_base(right).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_lowest_prefers_first_on_ties() {
        let pts = [pt(0.0, 1.0), pt(1.0, 0.0), pt(2.0, 0.0)];
        assert_eq!(lowest(&pts), Some(pt(1.0, 0.0)));
        assert_eq!(lowest::<f64>(&[]), None);
    }

    #[test]
    fn test_rerank_filters_and_orders() {
        let anchor = pt(0.0, 0.0);
        let below = pt(1.0, -1.0);
        let steep = pt(-1.0, 1.0);
        let shallow = pt(2.0, 1.0);
        let edges: EdgeSet<f64> = [
            Edge2::new(anchor, below),
            Edge2::new(anchor, steep),
            Edge2::new(anchor, shallow),
        ]
        .into_iter()
        .collect();

        // Opposite anchor to the left: baseline points in +x.
        let mut side = Side::new(anchor, edges);
        side.rerank(pt(-5.0, 0.0));

        // `steep` bends back towards the opposite side and ranks first.
        assert_eq!(side.candidates, VecDeque::from(vec![steep, shallow]));
    }

    #[test]
    fn test_merge_two_pairs_forms_quad() {
        // Left: (0,0)-(1,2); right: (3,0)-(4,2).
        let left = [pt(0.0, 0.0), pt(1.0, 2.0)];
        let right = [pt(3.0, 0.0), pt(4.0, 2.0)];
        let (edges, stats) = merge_halves(&left, &right);

        let expected: EdgeSet<f64> = [
            Edge2::new(left[0], left[1]),
            Edge2::new(right[0], right[1]),
            Edge2::new(left[0], right[0]),
            Edge2::new(left[1], right[0]),
            Edge2::new(left[1], right[1]),
        ]
        .into_iter()
        .collect();

        assert_eq!(edges, expected);
        assert_eq!(stats.rungs, 3);
        assert_eq!(stats.trimmed, 0);
    }

    #[test]
    fn test_merge_keeps_inputs_and_base_edge() {
        let left = [pt(0.0, 0.0), pt(1.0, 3.0), pt(2.0, 1.0)];
        let right = [pt(4.0, 0.5), pt(5.0, 2.5)];
        let left_edges = triangulate_base(&left).unwrap();
        let right_edges = triangulate_base(&right).unwrap();

        let (edges, stats) =
            merge_with_stats(&left, &right, left_edges.clone(), right_edges.clone()).unwrap();

        assert!(edges.contains(&Edge2::new(pt(0.0, 0.0), pt(4.0, 0.5))));
        assert!(stats.rungs >= 1);
        assert_eq!(edges.len(), left_edges.len() + right_edges.len() + stats.rungs - stats.trimmed);
        // Caller's sets are untouched.
        assert_eq!(left_edges.len(), 3);
        assert_eq!(right_edges.len(), 1);
    }

    #[test]
    fn test_merge_every_vertex_covered() {
        let left = [pt(0.0, 0.0), pt(1.0, 3.0), pt(2.0, 1.0)];
        let right = [pt(4.0, 0.5), pt(5.0, 2.5), pt(6.0, 0.0)];
        let (edges, _) = merge_halves(&left, &right);
        let vertices = edges.vertices();
        for p in left.iter().chain(right.iter()) {
            assert!(vertices.contains(p), "{p:?} not covered");
        }
    }

    #[test]
    fn test_merge_empty_side_is_union() {
        let right = [pt(3.0, 0.0), pt(4.0, 2.0)];
        let right_edges = triangulate_base(&right).unwrap();
        let edges = merge(&[], &right, EdgeSet::new(), right_edges.clone()).unwrap();
        assert_eq!(edges, right_edges);
    }

    #[test]
    fn test_merge_horizontal_line_stops_immediately() {
        // Nothing lies above either anchor, so the base edge (0,0)-(2,0) is
        // the only rung and it overlaps the left half's edge.
        let left = [pt(0.0, 0.0), pt(1.0, 0.0)];
        let right = [pt(2.0, 0.0), pt(3.0, 0.0)];
        let (edges, stats) = merge_halves(&left, &right);
        assert_eq!(stats.rungs, 1);
        assert_eq!(stats.iterations, 0);
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_merge_diagonal_line_is_degenerate() {
        // Both finalists lie on the line through the anchors, so the decision
        // circumcircle does not exist.
        let left = [pt(0.0, 0.0), pt(1.0, 1.0)];
        let right = [pt(2.0, 2.0), pt(3.0, 3.0)];
        let result = merge(
            &left,
            &right,
            triangulate_base(&left).unwrap(),
            triangulate_base(&right).unwrap(),
        );
        assert_eq!(result, Err(TriangulationError::CollinearPoints));
    }

    #[test]
    fn test_merge_lone_collinear_candidate_needs_no_circle() {
        // The only candidate has no successor, so it wins without a
        // circumcircle even though it is collinear with the anchors.
        let left = [pt(0.0, 0.0), pt(1.0, 1.0)];
        let right = [pt(2.0, 2.0), pt(3.0, 2.0)];
        let (edges, stats) = merge_halves(&left, &right);
        assert!(edges.contains(&Edge2::new(pt(0.0, 0.0), pt(2.0, 2.0))));
        assert!(edges.contains(&Edge2::new(pt(1.0, 1.0), pt(2.0, 2.0))));
        assert_eq!(stats.rungs, 2);
    }

    #[test]
    fn test_merge_trims_obsolete_edge() {
        // Left is a tall thin triangle whose apex edge becomes obsolete once
        // the lower left vertex is visible across the seam.
        let left = [pt(0.0, 0.0), pt(0.5, 10.0), pt(1.0, 1.0)];
        let right = [pt(2.0, 0.0), pt(2.5, 10.0), pt(3.0, 1.0)];
        let (edges, stats) = merge_halves(&left, &right);

        assert_eq!(stats.trimmed, 1);
        assert!(!edges.contains(&Edge2::new(pt(2.0, 0.0), pt(2.5, 10.0))));
        assert_eq!(edges.len(), 6 + stats.rungs - stats.trimmed);
        for p in left.iter().chain(right.iter()) {
            assert!(edges.vertices().contains(p));
        }
    }

    #[test]
    fn test_merge_rejects_mutual_containment() {
        // After the base rung, each finalist lies inside the other's circle.
        // Both are dropped and the merge ends with only the base rung.
        let left = [pt(1.0, 2.0), pt(10.0, 10.0)];
        let right = [pt(11.0, 19.0), pt(15.0, 18.0), pt(17.0, 18.0)];
        let (edges, stats) = merge_halves(&left, &right);

        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.rungs, 1);
        assert_eq!(edges.len(), 5);
        assert!(edges.contains(&Edge2::new(pt(1.0, 2.0), pt(15.0, 18.0))));
    }

    #[test]
    fn test_right_scan_measures_against_base_edge() {
        // The base edge (1,0)-(4,4) and the right candidate edge (4,4)-(7,8)
        // are parallel, so (7,8) never qualifies even after the left anchor
        // moves up to (0,5) and the rung changes direction.
        let left = [pt(0.0, 5.0), pt(1.0, 0.0)];
        let right = [pt(4.0, 4.0), pt(7.0, 8.0)];
        let (edges, stats) = merge_halves(&left, &right);

        assert_eq!(stats.rungs, 2);
        assert!(edges.contains(&Edge2::new(pt(0.0, 5.0), pt(4.0, 4.0))));
        assert!(!edges.contains(&Edge2::new(pt(0.0, 5.0), pt(7.0, 8.0))));
        assert_eq!(edges.len(), 4);
    }
}
