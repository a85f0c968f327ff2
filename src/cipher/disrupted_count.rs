//! Count-disrupted columnar transposition.
//!
//! A second key punches gaps into the grid before the columnar read. Its
//! ranks are used as a repeating stride: starting from offset 0, each rank
//! is added to a running offset and the cell reached becomes a gap. The
//! grid grows with every gap found, so the loop keeps going until the
//! running offset passes the end of the grown grid.

use super::columnar::require_key;
use super::grid::ColumnGrid;
use super::key::KeyOrder;
use super::walk::{apply_walk, identity_walk, is_permutation, Mode, Transposition};
use crate::error::Result;
use tracing::{debug, trace};

/// Absolute grid offsets left empty for a text of `len` symbols.
///
/// `ranks` is the rank sequence of the disruption key, a permutation of
/// `0..n`. Returns no gaps when fewer than two ranks are given or when
/// `ranks` is not a permutation.
pub fn disruption_gaps(len: usize, ranks: &[usize]) -> Vec<usize> {
    if ranks.len() < 2 || !is_permutation(ranks) {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    let mut offset = 0;
    // Ranks are a permutation of 0..n with n >= 2, so every cycle advances
    for &stride in ranks.iter().cycle() {
        offset += stride;
        if offset >= len + gaps.len() {
            break;
        }
        gaps.push(offset);
        offset += 1;
    }

    trace!(len, gaps = ?gaps, "disruption gaps");
    gaps
}

/// Grid for a count-disrupted text, or `None` when the disruption key is too short
fn disrupted_grid<K: Ord, D: Ord>(len: usize, key: &[K], disruption: &[D]) -> Result<Option<ColumnGrid>> {
    if disruption.len() < 2 {
        return Ok(None);
    }
    require_key(key)?;

    let ranks = KeyOrder::new(disruption);
    let gaps = disruption_gaps(len, ranks.ranks());
    let grid = ColumnGrid::with_gaps(len, key.len(), &gaps);
    debug!(
        len,
        gaps = gaps.len(),
        columns = grid.columns(),
        rows = grid.rows(),
        "count-disrupted grid"
    );
    Ok(Some(grid))
}

pub fn disrupted_count_walk<K: Ord, D: Ord>(len: usize, key: &[K], disruption: &[D]) -> Result<Vec<usize>> {
    match disrupted_grid(len, key, disruption)? {
        Some(grid) => Ok(grid.read_columns(KeyOrder::new(key).indices())),
        None => Ok(identity_walk(len)),
    }
}

pub fn encrypt_disrupted_count<T: Clone, K: Ord, D: Ord>(
    text: &[T],
    key: &[K],
    disruption: &[D],
) -> Result<Vec<T>> {
    let walk = disrupted_count_walk(text.len(), key, disruption)?;
    Ok(apply_walk(text, &walk, Mode::Encrypt))
}

pub fn decrypt_disrupted_count<T: Clone, K: Ord, D: Ord>(
    text: &[T],
    key: &[K],
    disruption: &[D],
) -> Result<Vec<T>> {
    let walk = disrupted_count_walk(text.len(), key, disruption)?;
    Ok(apply_walk(text, &walk, Mode::Decrypt))
}

/// Columnar transposition with a second, gap-placing key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisruptedCount<K = char> {
    key: Vec<K>,
    disruption: Vec<K>,
}

impl<K: Ord> DisruptedCount<K> {
    pub fn new(key: impl IntoIterator<Item = K>, disruption: impl IntoIterator<Item = K>) -> Self {
        Self {
            key: key.into_iter().collect(),
            disruption: disruption.into_iter().collect(),
        }
    }

    pub fn key(&self) -> &[K] {
        &self.key
    }

    pub fn disruption_key(&self) -> &[K] {
        &self.disruption
    }

    /// Grid with gaps for a text of `len` symbols, `None` when no disruption applies
    pub fn grid(&self, len: usize) -> Result<Option<ColumnGrid>> {
        disrupted_grid(len, &self.key, &self.disruption)
    }
}

impl<K: Ord> Transposition for DisruptedCount<K> {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        disrupted_count_walk(len, &self.key, &self.disruption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_grow_with_the_grid() {
        // SHRINE ranks
        let ranks = [5, 1, 4, 2, 3, 0];
        assert_eq!(disruption_gaps(12, &ranks), vec![5, 7, 12]);
        assert_eq!(disruption_gaps(25, &ranks), vec![5, 7, 12, 15, 19, 20, 26, 28]);
    }

    #[test]
    fn test_gaps_zero_first_rank() {
        let ranks = [0, 1];
        assert_eq!(disruption_gaps(0, &ranks), Vec::<usize>::new());
        assert_eq!(disruption_gaps(3, &ranks), vec![0, 2, 3, 5, 6]);
    }

    #[test]
    fn test_gaps_need_two_ranks() {
        assert!(disruption_gaps(10, &[0]).is_empty());
        assert!(disruption_gaps(10, &[]).is_empty());
    }

    #[test]
    fn test_gaps_need_rank_permutation() {
        assert!(disruption_gaps(4, &[0, 0]).is_empty());
        assert!(disruption_gaps(4, &[0, 0, 0]).is_empty());
        assert!(disruption_gaps(4, &[1, 2]).is_empty());
        assert_eq!(disruption_gaps(3, &[0, 1]), vec![0, 2, 3, 5, 6]);
    }

    #[test]
    fn test_known_answer() {
        let cipher = DisruptedCount::new("CRYPTO".chars(), "SECRET".chars());
        let ciphertext = cipher.encrypt_str("WEAREDISCOVEREDFLEEATONCE").unwrap();
        assert_eq!(ciphertext, "WCEEOERETRIVFCEODNSELEADA");
        assert_eq!(
            cipher.decrypt_str(&ciphertext).unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn test_short_disruption_key_is_identity() {
        let text: Vec<char> = "ATTACKATDAWN".chars().collect();
        assert_eq!(encrypt_disrupted_count(&text, &['K', 'E', 'Y'], &['X']).unwrap(), text);
        assert_eq!(decrypt_disrupted_count(&text, &['K', 'E', 'Y'], &[] as &[char]).unwrap(), text);
        // Identity wins even over an unusable column key
        assert_eq!(encrypt_disrupted_count(&text, &[] as &[char], &['X']).unwrap(), text);
    }

    #[test]
    fn test_empty_key_rejected() {
        let cipher = DisruptedCount::new("".chars(), "SECRET".chars());
        assert!(cipher.encrypt_str("HELLO").is_err());
    }

    #[test]
    fn test_grid_holds_every_symbol() {
        let cipher = DisruptedCount::new("TOKYO".chars(), "SHRINE".chars());
        let grid = cipher.grid(12).unwrap().unwrap();
        assert_eq!(grid.occupied(), 12);
        assert_eq!(grid.rows(), 3);
        assert!(grid.is_vacant(1, 0));
        assert!(grid.is_vacant(1, 2));
        assert!(grid.is_vacant(2, 2));
    }
}
