//! Fixed-size grid with at most one occupant per cell

use super::position::Position;
use crate::error::{Error, Result};

/// Anything that can sit on a [`Board`].
///
/// The board keeps the occupant's stored position in sync with the cell that
/// holds it.
pub trait Placeable {
    fn position(&self) -> Option<Position>;
    fn set_position(&mut self, position: Option<Position>);
}

/// A rows x columns grid owning the occupants it holds.
///
/// Removing an occupant hands ownership back to the caller.
#[derive(Debug, Clone)]
pub struct Board<P> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<P>>,
}

impl<P: Placeable> Board<P> {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size > 0 && i32::try_from(rows.max(columns)).is_ok())
            .ok_or(Error::InvalidDimensions { rows, columns })?;

        let mut cells = Vec::with_capacity(size);
        cells.resize_with(size, || None);

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Pure bounds check.
    pub fn position_exists(&self, at: Position) -> bool {
        at.row >= 0
            && (at.row as usize) < self.rows
            && at.column >= 0
            && (at.column as usize) < self.columns
    }

    fn index(&self, at: Position) -> Result<usize> {
        if !self.position_exists(at) {
            return Err(Error::OutOfBounds(at));
        }
        Ok(at.row as usize * self.columns + at.column as usize)
    }

    pub fn piece(&self, at: Position) -> Result<Option<&P>> {
        let index = self.index(at)?;
        Ok(self.cells[index].as_ref())
    }

    pub fn there_is_a_piece(&self, at: Position) -> Result<bool> {
        Ok(self.piece(at)?.is_some())
    }

    /// Puts `piece` on an empty cell. There is no implicit capture: an
    /// occupied destination is an error and the piece is dropped.
    pub fn place_piece(&mut self, mut piece: P, at: Position) -> Result<()> {
        let index = self.index(at)?;
        if self.cells[index].is_some() {
            return Err(Error::CellOccupied(at));
        }

        piece.set_position(Some(at));
        self.cells[index] = Some(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, at: Position) -> Result<Option<P>> {
        let index = self.index(at)?;
        let mut removed = self.cells[index].take();
        if let Some(piece) = removed.as_mut() {
            piece.set_position(None);
        }
        Ok(removed)
    }

    /// Occupied cells in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &P)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|piece| {
                let at = Position::new((i / columns) as i32, (i % columns) as i32);
                (at, piece)
            })
        })
    }

    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}
