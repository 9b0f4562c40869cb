//! Board structure

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Mark, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board: one bitboard per mark.
///
/// Boards are small `Copy` values. Game moves produce a new board through
/// [`Board::with_mark`]; `place`/`remove` exist for the search, which must
/// undo every speculative mark it makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// X marks
    pub x: Bitboard,
    /// O marks
    pub o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Build a board from row-major cells
    pub fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        let mut board = Self::new();
        for (idx, mark) in cells.into_iter().enumerate() {
            board.place(idx, mark);
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get mark at a cell index
    #[inline]
    pub fn get(&self, idx: usize) -> Mark {
        if self.x.get(idx) {
            Mark::X
        } else if self.o.get(idx) {
            Mark::O
        } else {
            Mark::Empty
        }
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        !self.x.get(idx) && !self.o.get(idx)
    }

    /// Put a mark on a cell (no legality check)
    #[inline]
    pub fn place(&mut self, idx: usize, mark: Mark) {
        match mark {
            Mark::X => self.x.set(idx),
            Mark::O => self.o.set(idx),
            Mark::Empty => {}
        }
    }

    /// Reset a cell to empty
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        self.x.clear(idx);
        self.o.clear(idx);
    }

    /// Copy of this board with one more mark on it
    #[must_use]
    pub fn with_mark(&self, idx: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.place(idx, mark);
        next
    }

    /// Get bitboard for a mark (returns None for Empty)
    #[inline]
    pub fn marks(&self, mark: Mark) -> Option<&Bitboard> {
        match mark {
            Mark::X => Some(&self.x),
            Mark::O => Some(&self.o),
            Mark::Empty => None,
        }
    }

    /// All cells in index order
    pub fn cells(&self) -> [Mark; TOTAL_CELLS] {
        std::array::from_fn(|idx| self.get(idx))
    }

    /// Empty cell indices in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..TOTAL_CELLS).filter(|&idx| self.is_empty(idx))
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        TOTAL_CELLS - self.mark_count() as usize
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..BOARD_SIZE {
                let ch = match self.get(row * BOARD_SIZE + col) {
                    Mark::X => 'X',
                    Mark::O => 'O',
                    Mark::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parse `XX./OO./...` style text. `.`, `_` and `-` are empty cells;
    /// whitespace and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut idx = 0;
        for (position, ch) in s.chars().enumerate() {
            let mark = match ch.to_ascii_uppercase() {
                'X' => Mark::X,
                'O' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                c if c == '/' || c.is_whitespace() => continue,
                character => {
                    return Err(GameError::InvalidCellCharacter {
                        character,
                        position,
                    })
                }
            };
            if idx < TOTAL_CELLS {
                board.place(idx, mark);
            }
            idx += 1;
        }
        if idx != TOTAL_CELLS {
            return Err(GameError::InvalidBoardLength { got: idx });
        }
        Ok(board)
    }
}
