//! Key ordering shared by every keyed cipher.

use std::ops::Range;

/// Column visiting order derived from a key.
///
/// `indices` is the stable ascending sort of key positions, `ranks` its
/// inverse. Equal key symbols keep their left-to-right order, and each
/// maximal stretch of equal symbols in `indices` forms one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOrder {
    indices: Vec<usize>,
    ranks: Vec<usize>,
    runs: Vec<Range<usize>>,
}

impl KeyOrder {
    pub fn new<K: Ord>(key: &[K]) -> Self {
        let mut indices: Vec<usize> = (0..key.len()).collect();
        // sort_by is stable
        indices.sort_by(|&a, &b| key[a].cmp(&key[b]));

        let mut ranks = vec![0usize; key.len()];
        for (rank, &position) in indices.iter().enumerate() {
            ranks[position] = rank;
        }

        let mut runs = Vec::new();
        let mut start = 0;
        for group in indices.chunk_by(|&a, &b| key[a] == key[b]) {
            runs.push(start..start + group.len());
            start += group.len();
        }

        Self {
            indices,
            ranks,
            runs,
        }
    }

    /// Number of key symbols (grid columns)
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Key positions in visiting order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// `ranks()[position]` is where `position` lands in [`indices`](Self::indices)
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Runs of equal key symbols, each as the slice of column positions it merges
    pub fn runs(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.runs.iter().map(|run| &self.indices[run.clone()])
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}
