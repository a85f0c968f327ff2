//! Walks: the permutation every cipher in this crate reduces to.
//!
//! A walk `w` over a text of length `L` lists plaintext positions in the
//! order they appear in the ciphertext, so `ciphertext[k] = plaintext[w[k]]`.
//! Encryption and decryption replay the same walk with the copy direction
//! swapped, which makes them exact inverses for every cipher.

use crate::error::Result;
use std::fmt;
use tracing::instrument;

/// Direction a walk is replayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Move symbols along a walk.
///
/// `Mode::Encrypt` gathers (`out[k] = text[walk[k]]`), `Mode::Decrypt`
/// scatters (`out[walk[k]] = text[k]`).
///
/// # Panics
///
/// Panics if `walk` and `text` differ in length or `walk` holds a position
/// past the end of `text`. Debug builds also panic when `walk` repeats a
/// position. Walks from [`Transposition::walk`] are always permutations of
/// `0..text.len()`.
#[instrument(level = "trace", skip_all, fields(len = text.len(), mode = %mode))]
pub fn apply_walk<T: Clone>(text: &[T], walk: &[usize], mode: Mode) -> Vec<T> {
    assert_eq!(text.len(), walk.len(), "walk must cover the whole text");
    debug_assert!(is_permutation(walk), "walk is not a permutation");

    match mode {
        Mode::Encrypt => walk.iter().map(|&from| text[from].clone()).collect(),
        Mode::Decrypt => {
            let inverse = invert_walk(walk);
            inverse.iter().map(|&from| text[from].clone()).collect()
        }
    }
}

/// Inverse permutation: `inverse[walk[k]] = k`
///
/// # Panics
///
/// Panics if a position in `walk` is `walk.len()` or more.
pub fn invert_walk(walk: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; walk.len()];
    for (step, &position) in walk.iter().enumerate() {
        inverse[position] = step;
    }
    inverse
}

/// Check that every position in `0..walk.len()` appears exactly once
pub fn is_permutation(walk: &[usize]) -> bool {
    let mut seen = vec![false; walk.len()];
    for &position in walk {
        match seen.get_mut(position) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// The walk that leaves a text untouched
pub fn identity_walk(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// A cipher that reorders symbols without changing them.
///
/// Implementors only describe their walk; encryption and decryption are
/// derived from it.
pub trait Transposition {
    /// Walk for a text of `len` symbols
    fn walk(&self, len: usize) -> Result<Vec<usize>>;

    fn encrypt<T: Clone>(&self, text: &[T]) -> Result<Vec<T>> {
        let walk = self.walk(text.len())?;
        Ok(apply_walk(text, &walk, Mode::Encrypt))
    }

    fn decrypt<T: Clone>(&self, text: &[T]) -> Result<Vec<T>> {
        let walk = self.walk(text.len())?;
        Ok(apply_walk(text, &walk, Mode::Decrypt))
    }

    /// Run the cipher over the characters of a string
    fn transform_str(&self, text: &str, mode: Mode) -> Result<String> {
        let symbols: Vec<char> = text.chars().collect();
        let walk = self.walk(symbols.len())?;
        Ok(apply_walk(&symbols, &walk, mode).into_iter().collect())
    }

    fn encrypt_str(&self, text: &str) -> Result<String> {
        self.transform_str(text, Mode::Encrypt)
    }

    fn decrypt_str(&self, text: &str) -> Result<String> {
        self.transform_str(text, Mode::Decrypt)
    }
}
