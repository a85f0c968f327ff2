//! Row-major grids of plaintext positions.
//!
//! Every columnar variant lays the text into a grid of `columns` cells per
//! row and reads it back column by column. A cell holds the plaintext
//! position it carries, or `None` when it is a gap or past the end of the
//! text. Absent cells are skipped identically in both directions.

use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGrid {
    columns: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl ColumnGrid {
    /// A grid of `rows × columns` absent cells
    ///
    /// # Panics
    ///
    /// Panics if `columns` is 0.
    pub fn blank(rows: usize, columns: usize) -> Self {
        assert!(columns > 0, "grid needs at least one column");
        Self {
            columns,
            rows,
            cells: vec![None; rows * columns],
        }
    }

    /// Lay `len` positions row by row; the last row may be ragged
    pub fn row_major(len: usize, columns: usize) -> Self {
        Self::with_gaps(len, columns, &[])
    }

    /// Lay `len` positions row by row, leaving the absolute cell offsets in
    /// `gaps` (ascending) empty.
    pub fn with_gaps(len: usize, columns: usize, gaps: &[usize]) -> Self {
        let total = len + gaps.len();
        let mut grid = Self::blank(total.div_ceil(columns), columns);

        let mut pending = gaps.iter().peekable();
        let mut position = 0;
        for offset in 0..total {
            if pending.next_if_eq(&&offset).is_some() {
                continue;
            }
            grid.cells[offset] = Some(position);
            position += 1;
        }
        debug_assert_eq!(position, len, "gap offsets must be unique and inside the grid");

        trace!(len, columns, rows = grid.rows, gaps = gaps.len(), "laid out grid");
        grid
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Position held by a cell, `None` for a gap or an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        self.cells[self.offset(row, column)]
    }

    pub fn is_vacant(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_none()
    }

    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn set(&mut self, row: usize, column: usize, position: usize) {
        let offset = self.offset(row, column);
        self.cells[offset] = Some(position);
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) outside {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Read whole columns top to bottom, in the given column order
    pub fn read_columns(&self, order: &[usize]) -> Vec<usize> {
        let mut walk = Vec::with_capacity(self.cells.len());
        for &column in order {
            walk.extend((0..self.rows).filter_map(|row| self.get(row, column)));
        }
        walk
    }

    /// Read each group of columns together, row by row, group after group
    pub fn read_column_groups<'a>(&self, groups: impl IntoIterator<Item = &'a [usize]>) -> Vec<usize> {
        let mut walk = Vec::with_capacity(self.cells.len());
        for group in groups {
            for row in 0..self.rows {
                walk.extend(group.iter().filter_map(|&column| self.get(row, column)));
            }
        }
        walk
    }

    /// Cells row by row, for display
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<usize>]> + '_ {
        self.cells.chunks(self.columns)
    }
}
