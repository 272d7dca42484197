use std::fmt;
use std::ops::Index;

use crate::error::{GameError, Result};
use crate::types::{CellState, Position};

/// Square Go board of `size * size` points, addressed by `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

/// Connected stones of one color and their liberty count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stones: Vec<Position>,
    /// Counted once per (stone, empty neighbor) adjacency, so an empty point
    /// touching two stones of the group counts twice.
    pub liberties: usize,
}

impl Group {
    pub fn contains(&self, pos: Position) -> bool {
        self.stones.contains(&pos)
    }
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![CellState::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.size && pos.row < self.size
    }

    /// Returns the state at `pos`, or `OutOfBounds` when it is off the board.
    pub fn get(&self, pos: Position) -> Result<CellState> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, pos: Position, state: CellState) -> Result<()> {
        let idx = self.index_of(pos)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// In-bounds orthogonal neighbors: left, right, up, down.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        let Position { col, row } = pos;
        let last = self.size - 1;
        [
            (col > 0).then(|| Position::new(col - 1, row)),
            (col < last).then(|| Position::new(col + 1, row)),
            (row > 0).then(|| Position::new(col, row - 1)),
            (row < last).then(|| Position::new(col, row + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Flood-fills the group containing `pos`.
    /// Returns `Ok(None)` when the point is empty.
    pub fn group(&self, pos: Position) -> Result<Option<Group>> {
        let color = self.get(pos)?;
        if color.is_empty() {
            return Ok(None);
        }

        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![pos];
        let mut stones = Vec::new();
        let mut liberties = 0usize;

        while let Some(stone) = stack.pop() {
            let idx = self.raw_index(stone);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            for next in self.neighbors(stone) {
                let state = self[next];
                if state.is_empty() {
                    liberties += 1;
                } else if state == color {
                    stack.push(next);
                }
            }

            stones.push(stone);
        }

        Ok(Some(Group { stones, liberties }))
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(black, white), cell| match cell {
            CellState::Black => (black + 1, white),
            CellState::White => (black, white + 1),
            CellState::Empty => (black, white),
        })
    }

    /// Column-major cells where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| cell as u8).collect()
    }

    fn index_of(&self, pos: Position) -> Result<usize> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                col: pos.col,
                row: pos.row,
                size: self.size,
            });
        }
        Ok(self.raw_index(pos))
    }

    fn raw_index(&self, pos: Position) -> usize {
        pos.col * self.size + pos.row
    }
}

impl Index<Position> for Board {
    type Output = CellState;

    /// Panics when `pos` is off the board.
    fn index(&self, pos: Position) -> &CellState {
        assert!(
            self.contains(pos),
            "position ({}, {}) is out of range for a {}x{} board",
            pos.col,
            pos.row,
            self.size,
            self.size
        );
        &self.cells[self.raw_index(pos)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self[Position::new(col, row)] {
                    CellState::Empty => '.',
                    CellState::Black => 'X',
                    CellState::White => 'O',
                };
                write!(f, "{symbol}")?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
