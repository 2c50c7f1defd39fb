//! Structural edits of a packed Cholesky factor.
//!
//! Adding a row/column borders `L` with one new row obtained from a forward
//! solve. Deleting row/column `ix` leaves the rows below it with one entry
//! too many (a bulge just above the diagonal); a chain of Givens rotations
//! on adjacent column pairs pushes the bulge off the end, after which the
//! rows below `ix` are shifted up into the gap.

use crate::kernels;
use crate::packed::{packed_len, row_start};
use crate::traits::FloatScalar;

use super::cholesky::forward_substitute;
use super::givens::givens;
use super::{PackedCholesky, SpdError};

/// Rotate the adjacent packed pair `(data[off], data[off + 1])`.
#[inline(always)]
fn rotate_pair<T: FloatScalar>(data: &mut [T], off: usize, c: T, s: T) {
    if let [x, y] = &mut data[off..off + 2] {
        kernels::rotate(c, s, x, y);
    }
}

impl<T: FloatScalar> PackedCholesky<T> {
    /// Border the factorized system with one new row/column.
    ///
    /// `d[0..n]` is the new off-diagonal column of `A` and `d[n]` its new
    /// diagonal entry; `d` may be longer and is not modified. The existing
    /// `n x n` block of `L` is reused as is.
    ///
    /// # Errors
    ///
    /// - [`SpdError::Failure`] if not factorized.
    /// - [`SpdError::BadParameter`] if `d.len() < n + 1`.
    /// - [`SpdError::IllConditionedMatrix`] if the bordered matrix is not
    ///   positive definite; the dimension is left unchanged.
    pub fn update_add(&mut self, d: &[T]) -> Result<(), SpdError> {
        if !self.factorized {
            return Err(SpdError::Failure);
        }
        let n = self.n;
        if d.len() < n + 1 {
            return Err(SpdError::BadParameter);
        }

        let msize = packed_len(n);
        if self.data.len() < msize + n + 1 {
            // Vec growth is amortized, so repeated borders stay linear
            self.data.resize(msize + n + 1, T::zero());
        }

        let (l, tail) = self.data.split_at_mut(msize);
        let row = &mut tail[..=n];
        row.copy_from_slice(&d[..=n]);

        // New row of L: solve L·y = d[0..n]
        forward_substitute(l, n, &mut row[..n]);

        let s = row[n] - kernels::dot(&row[..n], &row[..n]);
        if s <= T::epsilon() {
            log::debug!(
                target: "spdpack",
                "update_add: bordered pivot {:?} at row {} is not positive",
                s,
                n
            );
            return Err(SpdError::IllConditionedMatrix);
        }
        row[n] = s.sqrt();

        let mut new_col = d[n].abs();
        for (norm, &v) in self.col_norms.iter_mut().zip(d[..n].iter()) {
            *norm = *norm + v.abs();
            new_col = new_col + v.abs();
        }
        self.col_norms.push(new_col);

        self.n += 1;
        Ok(())
    }

    /// Remove row/column `ix` from the factorized system.
    ///
    /// The factor of the reduced matrix is produced by Givens rotations and
    /// compaction, never by refactorizing. No pivot check is made: each
    /// rotated diagonal is `hypot(L[i+1,i], L[i+1,i+1]) ≥ L[i+1,i+1]`, so the
    /// result inherits positivity from the factor being downdated.
    ///
    /// # Errors
    ///
    /// - [`SpdError::BadParameter`] if `ix >= n`; nothing is modified.
    /// - [`SpdError::Failure`] if not factorized.
    pub fn update_del(&mut self, ix: usize) -> Result<(), SpdError> {
        let n = self.n;
        if ix >= n {
            return Err(SpdError::BadParameter);
        }
        if !self.factorized {
            return Err(SpdError::Failure);
        }

        self.drop_column_norm(ix);

        if ix < n - 1 {
            let m = &mut self.data;
            for i in ix..n - 1 {
                let ip1 = i + 1;
                let r = row_start(ip1);
                let (c, s) = givens(m[r + i], m[r + ip1]);
                rotate_pair(m, r + i, c, s);

                for k in (i + 2)..n {
                    rotate_pair(m, row_start(k) + i, c, s);
                }
            }

            self.compress(ix);
        }

        self.n -= 1;
        Ok(())
    }

    /// Shift rows `ix+1..n` up by one, dropping row `ix` and the emptied
    /// last column.
    ///
    /// Row `i` (columns `0..i`) lands where row `i - 1` used to start; the
    /// destination never passes the source, so a forward sweep is safe.
    fn compress(&mut self, ix: usize) {
        let mut dst = row_start(ix);
        for i in (ix + 1)..self.n {
            let src = row_start(i);
            self.data.copy_within(src..src + i, dst);
            dst += i;
        }
    }

    /// Remove `|A[ix, j]|` from every column sum and forget column `ix`.
    ///
    /// `A[ix, j]` is rebuilt from the factor as the dot product of rows
    /// `ix` and `j` of `L` over their common columns.
    fn drop_column_norm(&mut self, ix: usize) {
        let rix = row_start(ix);
        for j in 0..self.n {
            if j == ix {
                continue;
            }
            let common = ix.min(j) + 1;
            let rj = row_start(j);
            let a = kernels::dot(&self.data[rix..rix + common], &self.data[rj..rj + common]);
            let reduced = self.col_norms[j] - a.abs();
            self.col_norms[j] = if reduced > T::zero() { reduced } else { T::zero() };
        }
        self.col_norms.remove(ix);
    }
}
