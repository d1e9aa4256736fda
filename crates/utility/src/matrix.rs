use std::ops::{Index, IndexMut};

use serde::{ser::SerializeSeq, Serialize, Serializer};

/// Row-major 2-D grid with a fixed shape.
///
/// Indexing with `(row, col)` panics when out of bounds, `get` and `get_mut`
/// return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T: Clone> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|offset| &self.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(|offset| &mut self.data[offset])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.iter_rows().nth(row)
    }

    /// Iterates over all rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| {
            let start = row * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    pub fn column(&self, col: usize) -> Option<Vec<T>> {
        if col < self.cols {
            Some(self.iter_rows().map(|row| row[col].clone()).collect())
        } else {
            None
        }
    }

    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl<T: Clone> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(value) => value,
            None => panic!(
                "matrix index ({}, {}) out of bounds for {}x{}",
                row, col, self.rows, self.cols
            ),
        }
    }
}

impl<T: Clone> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        match self.get_mut(row, col) {
            Some(value) => value,
            None => panic!(
                "matrix index ({}, {}) out of bounds for {}x{}",
                row, col, rows, cols
            ),
        }
    }
}

// serialized as a list of rows
impl<T: Clone + Serialize> Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.iter_rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
