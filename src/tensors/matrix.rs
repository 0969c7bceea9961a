use smallvec::SmallVec;
use std::{
    fmt::{Display, Write},
    ops::{Index, IndexMut},
    slice::Chunks,
};
use tracing::debug;

use crate::domains::{OrderedField, Ring};

/// A dense matrix in row-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F: Ring> {
    pub(crate) shape: (u32, u32),
    pub(crate) data: SmallVec<[F::Element; 25]>,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a zero matrix with `rows` rows and `cols` columns.
    pub fn new(rows: u32, cols: u32, field: F) -> Matrix<F> {
        Matrix {
            shape: (rows, cols),
            data: (0..rows as usize * cols as usize)
                .map(|_| field.zero())
                .collect(),
            field,
        }
    }

    /// Convert a row-major linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if data.len() == nrows as usize * ncols as usize {
            Ok(Matrix {
                shape: (nrows, ncols),
                data: data.into(),
                field,
            })
        } else {
            Err(MatrixError::ShapeMismatch {
                expected: nrows as usize * ncols as usize,
                found: data.len(),
            })
        }
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.shape.0 as usize
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.shape.1 as usize
    }

    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.shape.1.max(1) as usize)
    }

    fn swap_rows(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }

        for l in 0..self.shape.1 {
            self.data.swap(
                (self.shape.1 * a + l) as usize,
                (self.shape.1 * b + l) as usize,
            );
        }
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.shape.1 + index.1) as usize]
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        &mut self.data[(index.0 * self.shape.1 + index.1) as usize]
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (ri, r) in self.row_iter().enumerate() {
            f.write_char('{')?;
            for (ci, c) in r.iter().enumerate() {
                write!(f, "{}", c)?;
                if ci + 1 < self.shape.1 as usize {
                    f.write_char(',')?;
                }
            }
            f.write_char('}')?;
            if ri + 1 < self.shape.0 as usize {
                f.write_char(',')?;
            }
        }
        f.write_char('}')
    }
}

/// Errors that can occur when performing matrix operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// A row without a leading one has a non-zero right-hand side.
    Inconsistent,
    ShapeMismatch {
        expected: usize,
        found: usize,
    },
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::Inconsistent => write!(f, "The system is inconsistent"),
            MatrixError::ShapeMismatch { expected, found } => write!(
                f,
                "Data length does not match matrix dimensions: {} vs {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

impl<F: OrderedField> Matrix<F> {
    /// Find the row at or below `from_row` whose entry in column `col` has the
    /// smallest magnitude among the non-zero entries. Ties keep the topmost row.
    fn select_pivot(&self, col: u32, from_row: u32) -> Option<u32> {
        (from_row..self.shape.0)
            .filter(|&k| !F::is_zero(&self[(k, col)]))
            .min_by(|&a, &b| self.field.cmp_abs(&self[(a, col)], &self[(b, col)]))
    }

    /// Bring the matrix into reduced row echelon form using Gauss-Jordan elimination
    /// and return its rank.
    ///
    /// The pivot of every column is its smallest non-zero entry (not the largest),
    /// which keeps the scaling factors applied to the pivot row small. Columns without
    /// a non-zero entry below the current row are skipped. The right-most column
    /// takes part in the elimination like any other.
    pub fn rref(&mut self) -> u32 {
        let (nrows, ncols) = self.shape;
        let field = self.field.clone();
        let zero = field.zero();

        let mut i = 0;
        for j in 0..ncols {
            if i >= nrows {
                break;
            }

            let Some(p) = self.select_pivot(j, i) else {
                continue;
            };

            let inv_x = field.inv(&self[(p, j)]);
            for l in j + 1..ncols {
                field.mul_assign(&mut self[(p, l)], &inv_x);
            }
            self[(p, j)] = field.one();

            for k in 0..nrows {
                if k == p || self[(k, j)] == zero {
                    continue;
                }

                let scale = std::mem::replace(&mut self[(k, j)], zero.clone());
                for l in j + 1..ncols {
                    let mut e = std::mem::replace(&mut self[(k, l)], zero.clone());
                    field.sub_mul_assign(&mut e, &self[(p, l)], &scale);
                    self[(k, l)] = e;
                }
            }

            self.swap_rows(p, i);
            i += 1;
        }

        debug!("Row reduced {}x{} matrix with rank {}", nrows, ncols, i);

        i
    }

    /// Read the solution off a matrix in reduced row echelon form whose last
    /// column is the right-hand side.
    ///
    /// The value of a variable whose column holds the leading one of a row is that
    /// row's right-hand side; all other variables are zero. The column cursor is not
    /// reset between rows. A row without a leading one must have a zero right-hand
    /// side, otherwise the system is inconsistent.
    pub fn leading_values(&self) -> Result<Vec<F::Element>, MatrixError> {
        let (nrows, ncols) = self.shape;
        if ncols == 0 {
            return Ok(vec![]);
        }

        let nvars = ncols - 1;
        let mut values = vec![self.field.zero(); nvars as usize];

        let mut x = 0;
        for r in 0..nrows {
            let row_end = &self[(r, nvars)];
            match (x..nvars).find(|&c| self.field.is_one(&self[(r, c)])) {
                Some(c) => {
                    values[c as usize] = row_end.clone();
                    x = c;
                }
                None => {
                    x = nvars;
                    if !F::is_zero(row_end) {
                        debug!("Row {} has no leading one but right-hand side {}", r, row_end);
                        return Err(MatrixError::Inconsistent);
                    }
                }
            }
        }

        Ok(values)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domains::float::{near_eq, FloatField, RR};

    fn matrix(data: &[f64], rows: u32, cols: u32) -> Matrix<FloatField> {
        Matrix::from_linear(data.to_vec(), rows, cols, RR).unwrap()
    }

    #[test]
    fn shape_mismatch() {
        assert_eq!(
            Matrix::from_linear(vec![1., 2., 3.], 2, 2, RR),
            Err(MatrixError::ShapeMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn smallest_pivot() {
        let m = matrix(&[5., 1., -0.005, 1., 3., 1., -2., 1.], 4, 2);
        assert_eq!(m.select_pivot(0, 0), Some(3));
        assert_eq!(m.select_pivot(1, 0), Some(0));
        assert_eq!(m.select_pivot(1, 2), Some(2));

        let m = matrix(&[0., 0.009], 2, 1);
        assert_eq!(m.select_pivot(0, 0), None);
    }

    #[test]
    fn solve() {
        let mut m = matrix(&[1., 1., 2., 3., 3., 4., 3., 15., 16., 5., 5., 8.], 3, 4);
        assert_eq!(m.rref(), 3);

        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m[(r, c)], if r == c { 1. } else { 0. });
            }
        }

        let r = m.leading_values().unwrap();
        assert!(near_eq(r[0], -5. / 6.));
        assert!(near_eq(r[1], 47. / 10.));
        assert!(near_eq(r[2], -13. / 30.));
    }

    #[test]
    fn free_column() {
        let mut m = matrix(&[0., 1., 2., 0., 2., 4.], 2, 3);
        assert_eq!(m.rref(), 1);
        assert_eq!(m.data.as_slice(), &[0., 1., 2., 0., 0., 0.]);
        assert_eq!(m.leading_values().unwrap(), vec![0., 2.]);
    }

    #[test]
    fn underdetermined() {
        // x + y + z = 6, y - z = 1
        let mut m = matrix(&[1., 1., 1., 6., 0., 1., -1., 1.], 2, 4);
        assert_eq!(m.rref(), 2);
        let r = m.leading_values().unwrap();
        assert!(near_eq(r[0], 5.));
        assert!(near_eq(r[1], 1.));
        assert_eq!(r[2], 0.);
    }

    #[test]
    fn overdetermined() {
        // consistent: (x, y) = (2, 3)
        let mut m = matrix(&[1., 1., 5., 2., -1., 1., 1., 3., 11., 0., 1., 3.], 4, 3);
        assert_eq!(m.rref(), 2);
        let r = m.leading_values().unwrap();
        assert!(near_eq(r[0], 2.));
        assert!(near_eq(r[1], 3.));
    }

    #[test]
    fn inconsistent() {
        let mut m = matrix(&[1., 1., 1., 1., 1., 2.], 2, 3);
        assert_eq!(m.rref(), 2);
        assert_eq!(m.leading_values(), Err(MatrixError::Inconsistent));

        let mut m = matrix(&[1., 2., 2., 3., 4., 1., 3., 5., 2., 7.], 5, 2);
        m.rref();
        assert_eq!(m.leading_values(), Err(MatrixError::Inconsistent));
    }

    #[test]
    fn display() {
        let m = matrix(&[1., 2., 3., 4.], 2, 2);
        assert_eq!(format!("{}", m), "{{1,2},{3,4}}");
    }
}
