//! Board-shaped legality matrix

use super::position::Position;

/// Squares a piece could move to, one flag per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl MoveMatrix {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, at: Position) -> Option<usize> {
        if at.row < 0 || at.column < 0 {
            return None;
        }
        let (row, column) = (at.row as usize, at.column as usize);
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Marks `at`. Off-grid positions are ignored; generators bounds-check first.
    pub fn mark(&mut self, at: Position) {
        if let Some(i) = self.index(at) {
            self.cells[i] = true;
        }
    }

    pub fn unmark(&mut self, at: Position) {
        if let Some(i) = self.index(at) {
            self.cells[i] = false;
        }
    }

    pub fn is_marked(&self, at: Position) -> bool {
        self.index(at).map(|i| self.cells[i]).unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Marked squares, rows outer and columns inner.
    pub fn marked(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| Position::new((i / columns) as i32, (i % columns) as i32))
    }
}
