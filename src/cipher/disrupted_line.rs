//! Line-disrupted columnar transposition.
//!
//! Instead of filling whole rows, the text is laid out in blocks of
//! `columns` rows. Within a block, row `i` is filled from column 0 up to and
//! including column `indices[i]` of the key order, which makes a ragged
//! staircase of `T(n)` cells. In fill mode the cells the staircase left
//! empty are then filled row by row, so a block holds `n²` symbols. The
//! grid is then read column by column in key order.

use super::columnar::require_key;
use super::grid::ColumnGrid;
use super::key::KeyOrder;
use super::walk::{apply_walk, identity_walk, Mode, Transposition};
use crate::error::Result;
use tracing::debug;

/// `T(n) = n(n+1)/2`
pub fn triangle_number(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Symbols held by one block of `columns` rows
pub fn block_capacity(columns: usize, fill: bool) -> usize {
    if fill {
        columns * columns
    } else {
        triangle_number(columns)
    }
}

fn line_grid(len: usize, order: &KeyOrder, fill: bool) -> ColumnGrid {
    let columns = order.len();
    let blocks = len.div_ceil(block_capacity(columns, fill));
    let mut grid = ColumnGrid::blank(blocks * columns, columns);
    let mut positions = 0..len;

    'blocks: for base in (0..blocks).map(|block| block * columns) {
        for (row, &last) in order.indices().iter().enumerate() {
            for column in 0..=last {
                let Some(position) = positions.next() else {
                    break 'blocks;
                };
                grid.set(base + row, column, position);
            }
        }

        if fill {
            for row in base..base + columns {
                for column in 0..columns {
                    if !grid.is_vacant(row, column) {
                        continue;
                    }
                    let Some(position) = positions.next() else {
                        break 'blocks;
                    };
                    grid.set(row, column, position);
                }
            }
        }
    }

    debug!(len, blocks, fill, columns, "line-disrupted grid");
    grid
}

fn disrupted_line_grid<K: Ord>(len: usize, key: &[K], fill: bool) -> Result<Option<(KeyOrder, ColumnGrid)>> {
    require_key(key)?;
    if key.len() < 2 {
        return Ok(None);
    }
    let order = KeyOrder::new(key);
    let grid = line_grid(len, &order, fill);
    Ok(Some((order, grid)))
}

pub fn disrupted_line_walk<K: Ord>(len: usize, key: &[K], fill: bool) -> Result<Vec<usize>> {
    match disrupted_line_grid(len, key, fill)? {
        Some((order, grid)) => Ok(grid.read_columns(order.indices())),
        None => Ok(identity_walk(len)),
    }
}

pub fn encrypt_disrupted_line<T: Clone, K: Ord>(text: &[T], key: &[K], fill: bool) -> Result<Vec<T>> {
    let walk = disrupted_line_walk(text.len(), key, fill)?;
    Ok(apply_walk(text, &walk, Mode::Encrypt))
}

pub fn decrypt_disrupted_line<T: Clone, K: Ord>(text: &[T], key: &[K], fill: bool) -> Result<Vec<T>> {
    let walk = disrupted_line_walk(text.len(), key, fill)?;
    Ok(apply_walk(text, &walk, Mode::Decrypt))
}

/// Columnar transposition over staircase-filled blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisruptedLine<K = char> {
    key: Vec<K>,
    fill: bool,
}

impl<K: Ord> DisruptedLine<K> {
    pub fn new(key: impl IntoIterator<Item = K>, fill: bool) -> Self {
        Self {
            key: key.into_iter().collect(),
            fill,
        }
    }

    pub fn key(&self) -> &[K] {
        &self.key
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    /// Block layout for a text of `len` symbols, `None` for a single-symbol key
    pub fn grid(&self, len: usize) -> Result<Option<ColumnGrid>> {
        Ok(disrupted_line_grid(len, &self.key, self.fill)?.map(|(_, grid)| grid))
    }
}

impl<K: Ord> Transposition for DisruptedLine<K> {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        disrupted_line_walk(len, &self.key, self.fill)
    }
}
