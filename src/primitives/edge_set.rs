//! Sets of undirected edges and adjacency queries over them.

use super::{Edge2, Point2};
use num_traits::Float;
use std::collections::btree_set;
use std::collections::BTreeSet;

/// A set of unique undirected edges.
///
/// Backed by an ordered set keyed on each edge's canonical endpoints, so
/// iteration order is a function of the contents only. That keeps every
/// algorithm that walks an `EdgeSet` deterministic.
#[derive(Debug, Clone)]
pub struct EdgeSet<F> {
    edges: BTreeSet<Edge2<F>>,
}

impl<F: Float> EdgeSet<F> {
    /// Creates an empty edge set.
    pub fn new() -> Self {
        Self {
            edges: BTreeSet::new(),
        }
    }

    /// Inserts an edge. Returns `false` if an equal edge (in either
    /// direction) was already present.
    pub fn insert(&mut self, edge: Edge2<F>) -> bool {
        self.edges.insert(edge)
    }

    /// Removes an edge. Returns `false` if it was not present.
    pub fn remove(&mut self, edge: &Edge2<F>) -> bool {
        self.edges.remove(edge)
    }

    /// Returns `true` if the set holds `edge` in either direction.
    pub fn contains(&self, edge: &Edge2<F>) -> bool {
        self.edges.contains(edge)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the set holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Edge2<F>> {
        self.edges.iter()
    }

    /// Moves every edge of `other` into `self`.
    pub fn extend_from(&mut self, other: EdgeSet<F>) {
        self.edges.extend(other.edges);
    }

    /// Returns the union of two edge sets.
    pub fn union(mut self, other: EdgeSet<F>) -> EdgeSet<F> {
        self.extend_from(other);
        self
    }

    /// Returns the distinct endpoints of all edges.
    pub fn vertices(&self) -> BTreeSet<Point2<F>> {
        self.edges.iter().flat_map(|e| [e.p(), e.q()]).collect()
    }
}

impl<F: Float> PartialEq for EdgeSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<F: Float> Eq for EdgeSet<F> {}

impl<F: Float> Default for EdgeSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> FromIterator<Edge2<F>> for EdgeSet<F> {
    fn from_iter<I: IntoIterator<Item = Edge2<F>>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<F: Float> Extend<Edge2<F>> for EdgeSet<F> {
    fn extend<I: IntoIterator<Item = Edge2<F>>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl<F: Float> IntoIterator for EdgeSet<F> {
    type Item = Edge2<F>;
    type IntoIter = btree_set::IntoIter<Edge2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, F: Float> IntoIterator for &'a EdgeSet<F> {
    type Item = &'a Edge2<F>;
    type IntoIter = btree_set::Iter<'a, Edge2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Returns every edge in `edges` incident to `point`.
///
/// # Example
///
/// ```
/// use dc_delaunay::primitives::{edges_touching, Edge2, EdgeSet, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
/// let edges: EdgeSet<f64> = [Edge2::new(a, b), Edge2::new(b, c)].into_iter().collect();
///
/// assert_eq!(edges_touching(a, &edges).len(), 1);
/// assert_eq!(edges_touching(b, &edges).len(), 2);
/// ```
pub fn edges_touching<F: Float>(point: Point2<F>, edges: &EdgeSet<F>) -> EdgeSet<F> {
    edges.iter().filter(|e| e.touches(point)).copied().collect()
}

/// Returns the points directly connected to `point` in `edges`.
pub fn neighbors_of<F: Float>(point: Point2<F>, edges: &EdgeSet<F>) -> BTreeSet<Point2<F>> {
    edges.iter().filter_map(|e| e.other(point)).collect()
}
