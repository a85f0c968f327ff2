//! Unkeyed and line-count transpositions.

use super::walk::{identity_walk, Transposition};
use crate::error::Result;

/// Reads the text back to front
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse;

impl Transposition for Reverse {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        Ok((0..len).rev().collect())
    }
}

/// Zigzag over `lines` rails, read rail by rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    pub lines: usize,
}

impl Transposition for RailFence {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        if self.lines < 2 {
            return Ok(identity_walk(len));
        }

        let cycle = 2 * (self.lines - 1);
        let mut walk = Vec::with_capacity(len);
        for rail in 0..self.lines {
            // Distance to the next visit alternates between the way down and the way back up
            let down = cycle - 2 * rail;
            let up = 2 * rail;
            let mut position = rail;
            while position < len {
                if down != 0 {
                    walk.push(position);
                    position += down;
                }
                if up != 0 && position < len {
                    walk.push(position);
                    position += up;
                }
            }
        }
        Ok(walk)
    }
}

/// Text wound round a rod of `lines` faces: every `lines`-th symbol, per face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scytale {
    pub lines: usize,
}

impl Transposition for Scytale {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        if self.lines < 2 {
            return Ok(identity_walk(len));
        }
        Ok((0..self.lines)
            .flat_map(|face| (face..len).step_by(self.lines))
            .collect())
    }
}

/// Alternates between the two ends, closing in on the middle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Magnet;

impl Transposition for Magnet {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        let mut walk = Vec::with_capacity(len);
        for i in 0..len / 2 {
            walk.push(i);
            walk.push(len - 1 - i);
        }
        if len % 2 != 0 {
            walk.push(len / 2);
        }
        Ok(walk)
    }
}

/// Starts from the middle and alternates outward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elastic;

impl Transposition for Elastic {
    fn walk(&self, len: usize) -> Result<Vec<usize>> {
        let mid = len / 2;
        let odd = len % 2;
        let mut walk = Vec::with_capacity(len);
        if odd != 0 {
            walk.push(mid);
        }
        for i in 0..mid {
            walk.push(mid - i - 1);
            walk.push(mid + i + odd);
        }
        Ok(walk)
    }
}
