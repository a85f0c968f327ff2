//! Myszkowski transposition: columns under equal key symbols are read
//! together, row by row, as one merged pass.

use super::columnar::require_key;
use super::grid::ColumnGrid;
use super::key::KeyOrder;
use super::walk::{apply_walk, Mode, Transposition};
use crate::error::Result;
use tracing::debug;

pub fn myszkowski_walk<K: Ord>(len: usize, key: &[K]) -> Result<Vec<usize>> {
    require_key(key)?;
    let order = KeyOrder::new(key);
    let grid = ColumnGrid::row_major(len, key.len());
    debug!(
        len,
        columns = grid.columns(),
        rows = grid.rows(),
        runs = order.run_count(),
        "myszkowski grid"
    );
    Ok(grid.read_column_groups(order.runs()))
}

pub fn encrypt_myszkowski<T: Clone, K: Ord>(text: &[T], key: &[K]) -> Result<Vec<T>> {
    let walk = myszkowski_walk(text.len(), key)?;
    Ok(apply_walk(text, &walk, Mode::Encrypt))
}

pub fn decrypt_myszkowski<T: Clone, K: Ord>(text: &[T], key: &[K]) -> Result<Vec<T>> {
    let walk = myszkowski_walk(text.len(), key)?;
    Ok(apply_walk(text, &walk, Mode::Decrypt))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Myszkowski<K = char> {
    key: Vec<K>,
}

impl<K: Ord> Myszkowski<K> {
    pub fn new(key: impl IntoIterator<Item = K>) -> Self {
        Self {
            key: key.into_iter().collect(),
        }
    }

    pub fn key(&self) -> &[K] {
        &self.key
    }

    pub fn grid(&self, len: usize) -> Result<ColumnGrid> {
        require_key(&self.key)?;
        Ok(ColumnGrid::row_major(len, self.key.len()))
    }
}

impl<K: Ord> Transposition for Myszkowski<K> {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        myszkowski_walk(len, &self.key)
    }
}
