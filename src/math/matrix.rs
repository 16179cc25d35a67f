use rand::prelude::*;
use std::fmt;

use crate::math::error::MatrixError;

/// Dense row-major matrix of `f64`.
///
/// Shape is fixed at construction. Operations that mutate their receiver
/// (`add`, `scale`, `map_in_place`, `set`) say so; everything else returns a
/// fresh matrix and leaves its operands untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Uniform samples in [-1, 1) drawn from the thread-local RNG.
    pub fn random(rows: usize, cols: usize) -> Matrix {
        Matrix::random_with(&mut rand::thread_rng(), rows, cols)
    }

    /// Same as `random`, drawing from a caller-supplied generator so tests
    /// can pin the values with a seeded `StdRng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Column matrix (`len x 1`) holding `values` in order.
    pub fn from_vec(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Builds a matrix from row literals. Every row must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());

        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::DimensionMismatch {
                op: "from_data",
                left: (rows, cols),
                right: (1, bad.len()),
            });
        }

        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Matrix product `self x rhs`. Requires `self.cols == rhs.rows`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(rhs, "hadamard")?;

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// In place: `self += rhs`.
    pub fn add(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(rhs, "add")?;

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, y) in row.iter_mut().zip(rhs_row.iter()) {
                *x += y;
            }
        }

        Ok(())
    }

    /// Returns `self - rhs` as a new matrix.
    pub fn subtract(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(rhs, "subtract")?;

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        Ok(res)
    }

    /// In place: multiplies every cell by `scalar`.
    pub fn scale(&mut self, scalar: f64) {
        self.map_in_place(|x| x * scalar);
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// In place variant of `map`.
    pub fn map_in_place<F>(&mut self, functor: F)
    where
        F: Fn(f64) -> f64,
    {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = functor(*x);
            }
        }
    }

    /// Flattens a column matrix into its values, top to bottom.
    pub fn to_vec(&self) -> Result<Vec<f64>, MatrixError> {
        if self.cols != 1 {
            return Err(MatrixError::DimensionMismatch {
                op: "to_vec",
                left: self.shape(),
                right: (self.rows, 1),
            });
        }
        Ok(self.data.iter().map(|row| row[0]).collect())
    }

    /// Text dump of every cell, one line per row. Used by the dump writer.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
