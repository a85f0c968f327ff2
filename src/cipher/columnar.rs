//! Keyed columnar transposition.
//!
//! The text is written row by row under the key and read out column by
//! column in ascending key order. Repeated key symbols are read left to
//! right.

use super::grid::ColumnGrid;
use super::key::KeyOrder;
use super::walk::{apply_walk, Mode, Transposition};
use crate::error::{Result, TranspositionError};
use tracing::debug;

/// Reject keys that cannot define a single column
pub(crate) fn require_key<K>(key: &[K]) -> Result<()> {
    if key.is_empty() {
        return Err(TranspositionError::EmptyKey);
    }
    Ok(())
}

/// Walk of a plain columnar transposition
pub fn columnar_walk<K: Ord>(len: usize, key: &[K]) -> Result<Vec<usize>> {
    require_key(key)?;
    let order = KeyOrder::new(key);
    let grid = ColumnGrid::row_major(len, key.len());
    debug!(len, columns = grid.columns(), rows = grid.rows(), "columnar grid");
    Ok(grid.read_columns(order.indices()))
}

pub fn encrypt_columnar<T: Clone, K: Ord>(text: &[T], key: &[K]) -> Result<Vec<T>> {
    let walk = columnar_walk(text.len(), key)?;
    Ok(apply_walk(text, &walk, Mode::Encrypt))
}

pub fn decrypt_columnar<T: Clone, K: Ord>(text: &[T], key: &[K]) -> Result<Vec<T>> {
    let walk = columnar_walk(text.len(), key)?;
    Ok(apply_walk(text, &walk, Mode::Decrypt))
}

/// Columnar transposition under a fixed key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columnar<K = char> {
    key: Vec<K>,
}

impl<K: Ord> Columnar<K> {
    pub fn new(key: impl IntoIterator<Item = K>) -> Self {
        Self {
            key: key.into_iter().collect(),
        }
    }

    pub fn key(&self) -> &[K] {
        &self.key
    }

    /// Grid a text of `len` symbols is written into
    pub fn grid(&self, len: usize) -> Result<ColumnGrid> {
        require_key(&self.key)?;
        Ok(ColumnGrid::row_major(len, self.key.len()))
    }
}

impl<K: Ord> Transposition for Columnar<K> {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        columnar_walk(len, &self.key)
    }
}
