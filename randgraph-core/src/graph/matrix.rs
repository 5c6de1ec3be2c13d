//! Dense 0/1 matrices produced by the matrix views of a graph.

use std::fmt;

/// Row-major matrix whose cells are `0` or `1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl BinaryMatrix {
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows.saturating_mul(cols)],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize) {
        let offset = self.offset(row, col);
        if let Some(cell) = offset.and_then(|offset| self.cells.get_mut(offset)) {
            *cell = 1;
        }
    }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rows(&self) -> usize { self.rows }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cols(&self) -> usize { self.cols }

    /// Returns the cell at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.offset(row, col)
            .and_then(|offset| self.cells.get(offset))
            .copied()
    }

    /// Returns the cells of `row`, or `None` outside the matrix.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        let start = row.checked_mul(self.cols)?;
        let end = start.checked_add(self.cols)?;
        if row >= self.rows {
            return None;
        }
        self.cells.get(start..end)
    }

    /// Iterates the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).filter_map(move |row| self.row(row))
    }

    /// Returns `true` for a square matrix equal to its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.rows == self.cols
            && (0..self.rows).all(|row| {
                (row + 1..self.cols).all(|col| self.get(row, col) == self.get(col, row))
            })
    }

    const fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }
}

/// Renders one row per line with cells separated by spaces.
impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
