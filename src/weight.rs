use std::fmt::{Debug, Display};

use num_traits::{Bounded, CheckedAdd, ToPrimitive, Zero};

/// Edge/path weight in the (min, +) semiring.
///
/// The type's maximum value is the unreachable sentinel. A sum is only a
/// candidate when both operands are finite and the result is representable
/// strictly below the sentinel, so a path can never wrap around or be
/// mistaken for "no path".
pub trait Weight:
    Copy + Ord + Send + Sync + Debug + Display + Bounded + Zero + CheckedAdd + ToPrimitive + 'static
{
    /// The "no path" sentinel.
    #[inline(always)]
    fn inf() -> Self {
        Self::max_value()
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        self < Self::max_value()
    }

    /// `self + rhs` when both are finite and the sum stays finite, `None`
    /// otherwise.
    #[inline(always)]
    fn path_sum(self, rhs: Self) -> Option<Self> {
        if self.is_finite() && rhs.is_finite() {
            self.checked_add(&rhs).filter(|s| s.is_finite())
        } else {
            None
        }
    }

    /// `|self|` widened to `u128`.
    fn magnitude(self) -> u128 {
        match self.to_u128() {
            Some(m) => m,
            None => self.to_i128().map_or(u128::MAX, i128::unsigned_abs),
        }
    }
}

impl<T> Weight for T where
    T: Copy + Ord + Send + Sync + Debug + Display + Bounded + Zero + CheckedAdd + ToPrimitive + 'static
{
}

/// One pass-`k` relaxation of a single row `i`.
///
/// `row` is row `i` of the working matrix and `pivot` a copy of row `k`
/// taken at the start of the pass. Both solvers run this exact kernel, so
/// the cell-by-cell arithmetic is the same regardless of how rows are
/// distributed over workers.
#[inline]
pub(crate) fn relax_row<W: Weight>(row: &mut [W], k: usize, pivot: &[W]) {
    let ik = row[k];
    if !ik.is_finite() {
        return;
    }
    for (d, &kj) in row.iter_mut().zip(pivot) {
        if let Some(via) = ik.path_sum(kj) {
            if via < *d {
                *d = via;
            }
        }
    }
}
