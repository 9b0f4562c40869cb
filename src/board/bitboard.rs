//! Bitboard implementation for the 3x3 grid

use super::TOTAL_CELLS;

/// Mask with one bit per cell
const FULL: u16 = (1 << TOTAL_CELLS) - 1;

/// One bit per cell, bit `i` is cell index `i` (row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build from raw bits; bits above the ninth are dropped
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits: bits & FULL }
    }

    #[inline]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits |= 1 << idx;
    }

    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits &= !(1 << idx);
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < TOTAL_CELLS && (self.bits >> idx) & 1 == 1
    }

    /// Count set cells (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if every cell of `mask` is set
    #[inline]
    pub fn contains_all(&self, mask: u16) -> bool {
        self.bits & mask == mask
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(idx)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}
