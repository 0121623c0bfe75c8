//! Dense two dimensional storage for link and signal matrices.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A connectivity matrix between two adjacent layers: `[sender, receiver]`
/// is true when sender feeds receiver.
pub type Links = Mat<bool>;

/// Signals travelling between two layers. `None` marks a cell with no link.
pub type Signals = Mat<Option<f64>>;

#[derive(Clone, Debug, PartialEq)]
pub struct Mat<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // row-major array
}

impl<T: Clone> Mat<T> {
    /// Creates a `rows` by `cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Mat {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }
}

impl<T> Mat<T> {
    /// Builds a matrix from a list of equally long rows.
    ///
    /// Fails with `ShapeMismatch` if a row is shorter or longer than the
    /// first one.
    pub fn from_rows<R>(rows: Vec<R>) -> Result<Self>
    where
        R: Into<Vec<T>>,
    {
        let rows: Vec<Vec<T>> = rows.into_iter().map(Into::into).collect();
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::ShapeMismatch {
                context: "matrix row length",
                expected: cols,
                found: row.len(),
            });
        }
        let n = rows.len();
        Ok(Mat {
            rows: n,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a matrix cell by cell from `f(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Mat { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates the cells of column `j` top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(j < self.cols, "column {} out of range", j);
        self.data.iter().skip(j).step_by(self.cols)
    }
}

impl<T> Index<(usize, usize)> for Mat<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of range", i, j);
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "cell ({}, {}) out of range", i, j);
        &mut self.data[i * self.cols + j]
    }
}

impl Links {
    /// A matrix with every sender linked to every receiver.
    pub fn full(rows: usize, cols: usize) -> Self {
        Mat::filled(rows, cols, true)
    }

    /// Number of senders linked into receiver `j`, i.e. its fan-in.
    pub fn fan_in(&self, j: usize) -> usize {
        self.column(j).filter(|&&linked| linked).count()
    }

    /// Rows linked into receiver `j`, in ascending order.
    ///
    /// The k-th item is the sender feeding the receiver's k-th input.
    pub fn senders(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        self.column(j)
            .enumerate()
            .filter(|&(_, &linked)| linked)
            .map(|(i, _)| i)
    }

    /// Position of sender `i` among the inputs of receiver `j`, or `None`
    /// if the two are not linked.
    pub fn slot(&self, i: usize, j: usize) -> Option<usize> {
        if !self[(i, j)] {
            return None;
        }
        Some(self.column(j).take(i).filter(|&&linked| linked).count())
    }
}
