use std::fmt;
use std::ops::Index;

use crate::error::{ApspError, Result};
use crate::weight::Weight;

/// Dense V×V distance matrix stored as one flat row-major arena.
///
/// Cell `(i, j)` lives at offset `i * n + j`. A cell equal to
/// [`Weight::inf`] means "no known path".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix<W = i64> {
    /// Number of vertices (matrix is n x n)
    n: usize,
    /// Row-major cells, `n * n` of them
    m: Vec<W>,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Matrix with a zero diagonal and every other cell unreachable.
    pub fn new(n: usize) -> Self {
        let mut m = vec![W::inf(); n * n];
        for i in 0..n {
            m[i * n + i] = W::zero();
        }
        Self { n, m }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Raw cell value, sentinel included. Panics when out of range.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> W {
        self.m[i * self.n + j]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, v: W) {
        self.m[i * self.n + j] = v;
    }

    /// Shortest known cost from `i` to `j`, or `None` when unreachable.
    pub fn distance(&self, i: usize, j: usize) -> Option<W> {
        let v = self.get(i, j);
        v.is_finite().then_some(v)
    }

    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_finite()
    }

    pub fn row(&self, i: usize) -> &[W] {
        &self.m[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[W]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.m.chunks(self.n.max(1))
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [W]> {
        self.m.chunks_mut(self.n.max(1))
    }

    pub fn as_slice(&self) -> &[W] {
        &self.m
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [W] {
        &mut self.m
    }

    /// Number of finite off-diagonal cells.
    pub fn finite_count(&self) -> usize {
        let n = self.n;
        self.m
            .iter()
            .enumerate()
            .filter(|&(idx, v)| idx / n != idx % n && v.is_finite())
            .count()
    }

    /// Fails with [`ApspError::WeightOverflow`] unless every simple path
    /// cost fits strictly between the type's bounds, i.e. unless
    /// `max |w| * (n - 1) < INF` over the finite cells.
    ///
    /// Without negative cycles every value the relaxation produces is the
    /// cost of a simple path, so passing this check means no sum is ever
    /// clipped to the sentinel.
    pub fn check_headroom(&self) -> Result<()> {
        let max_weight = self
            .m
            .iter()
            .filter(|v| v.is_finite())
            .map(|v| v.magnitude())
            .max()
            .unwrap_or(0);
        let hops = self.n.saturating_sub(1) as u128;
        match max_weight.checked_mul(hops) {
            Some(bound) if bound < W::inf().magnitude() => Ok(()),
            _ => Err(ApspError::WeightOverflow { max_weight, vertices: self.n }),
        }
    }

    pub fn estimate_memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.m.capacity() * std::mem::size_of::<W>()
    }
}

impl<W: Weight> Index<(usize, usize)> for DistanceMatrix<W> {
    type Output = W;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &W {
        &self.m[i * self.n + j]
    }
}

/// Renders one row per line, `INF` for unreachable cells, tab-separated.
impl<W: Weight> fmt::Display for DistanceMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &v in row {
                if v.is_finite() {
                    write!(f, "{v}\t")?;
                } else {
                    write!(f, "INF\t")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
