use crate::dense::DistanceMatrix;
use crate::error::{ApspError, Result};
use crate::weight::Weight;

/// Dense weighted directed graph: the adjacency matrix doubles as the
/// initial distance matrix.
///
/// At construction `dist[i][i] = 0` and every other cell is unreachable.
/// [`add_edge`](Self::add_edge) overwrites a cell unconditionally, so the
/// last insertion for a pair wins. Inserting a self-loop replaces the zero
/// diagonal for that vertex; callers that want the zero-length self-path
/// must not pass `src == dest`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGraph<W = i64> {
    dist: DistanceMatrix<W>,
}

impl<W: Weight> DenseGraph<W> {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(ApspError::EmptyGraph);
        }
        Ok(Self { dist: DistanceMatrix::new(n) })
    }

    /// Build from a directed `(src, dest, weight)` edge list.
    pub fn from_edges(n: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut g = Self::new(n)?;
        for &(src, dest, w) in edges {
            g.add_edge(src, dest, w)?;
        }
        Ok(g)
    }

    /// Set the directed weight `src -> dest`, replacing any previous value.
    /// Weight sign is not checked.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: W) -> Result<()> {
        let n = self.dist.vertex_count();
        for vertex in [src, dest] {
            if vertex >= n {
                return Err(ApspError::VertexOutOfRange { vertex, vertices: n });
            }
        }
        self.dist.set(src, dest, weight);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.dist.vertex_count()
    }

    /// Number of directed edges (finite off-diagonal cells).
    pub fn edge_count(&self) -> usize {
        self.dist.finite_count()
    }

    /// Direct edge weight, `None` when there is no edge.
    pub fn weight(&self, src: usize, dest: usize) -> Option<W> {
        if src >= self.vertex_count() || dest >= self.vertex_count() {
            return None;
        }
        self.dist.distance(src, dest)
    }

    pub fn matrix(&self) -> &DistanceMatrix<W> {
        &self.dist
    }

    /// Deep copy of the matrix for a solver to relax in place.
    pub fn snapshot(&self) -> DistanceMatrix<W> {
        self.dist.clone()
    }
}
