use crate::error::{GridError, Result};
use crate::grid::{Grid, GridMut};
use crate::position::{Position, Size};
use std::marker::PhantomData;

// The cursors below read through `cell`/`row` rather than poking at storage,
// so they behave identically over a `DataGrid` and over any depth of
// `SubGrid`. A bounds error from the grid ends iteration instead of
// surfacing; `has_next` should have already ruled that out.

#[inline]
fn remaining(size: Size, cursor: Position) -> usize {
    let width = size.width();
    let Position(x, y) = cursor;
    size.count().saturating_sub(y as usize * width + x as usize)
}

#[inline]
fn advance(size: Size, cursor: Position) -> Position {
    let Position(x, y) = cursor;
    if x as usize + 1 == size.width() {
        Position(0, y + 1)
    } else {
        Position(x + 1, y)
    }
}

/// Walks every cell row by row, left to right.
pub struct Cells<'a, G: ?Sized, T> {
    grid: &'a G,
    cursor: Position,
    _pd: PhantomData<T>,
}

impl<'a, G, T> Cells<'a, G, T>
where
    G: Grid<T> + ?Sized,
{
    pub fn new(grid: &'a G) -> Self {
        Cells {
            grid,
            cursor: Position(0, 0),
            _pd: PhantomData,
        }
    }

    pub fn has_next(&self) -> bool {
        remaining(self.grid.size(), self.cursor) > 0
    }
}

impl<'a, G: ?Sized, T> Clone for Cells<'a, G, T> {
    fn clone(&self) -> Self {
        Cells {
            grid: self.grid,
            cursor: self.cursor,
            _pd: PhantomData,
        }
    }
}

impl<'a, G, T: 'a> Iterator for Cells<'a, G, T>
where
    G: Grid<T> + ?Sized,
{
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let grid = self.grid;
        let val = grid.get(self.cursor).ok()?;
        self.cursor = advance(grid.size(), self.cursor);
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = remaining(self.grid.size(), self.cursor);
        (remaining, Some(remaining))
    }
}

impl<'a, G, T: 'a> ExactSizeIterator for Cells<'a, G, T> where G: Grid<T> + ?Sized {}

/// Like [`Cells`], but can overwrite the cell it last returned.
///
/// This can't be a std `Iterator`: handing out a borrow of a cell while
/// keeping the ability to write to the grid would need two live borrows.
pub struct CellCursor<'a, G: ?Sized, T> {
    grid: &'a mut G,
    cursor: Position,
    last: Option<Position>,
    _pd: PhantomData<T>,
}

impl<'a, G, T> CellCursor<'a, G, T>
where
    G: GridMut<T> + ?Sized,
{
    pub fn new(grid: &'a mut G) -> Self {
        CellCursor {
            grid,
            cursor: Position(0, 0),
            last: None,
            _pd: PhantomData,
        }
    }

    pub fn has_next(&self) -> bool {
        remaining(self.grid.size(), self.cursor) > 0
    }

    /// Position of the cell most recently returned by `next_cell`.
    pub fn last_position(&self) -> Option<Position> {
        self.last
    }

    pub fn next_cell(&mut self) -> Option<Option<&T>> {
        if !self.has_next() {
            return None;
        }
        let pos = self.cursor;
        let size = self.grid.size();
        let val = self.grid.get(pos).ok()?;
        self.last = Some(pos);
        self.cursor = advance(size, pos);
        Some(val)
    }

    /// Overwrites the cell most recently returned by `next_cell`.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.replace(Some(value)).map(|_| ())
    }

    pub fn replace(&mut self, value: Option<T>) -> Result<Option<T>> {
        let pos = self.last.ok_or(GridError::NoCurrentCell)?;
        self.grid.replace(pos, value)
    }
}

/// Walks the grid one row snapshot at a time.
pub struct Rows<'a, G: ?Sized, T> {
    grid: &'a G,
    cursor: usize,
    _pd: PhantomData<T>,
}

impl<'a, G, T> Rows<'a, G, T>
where
    G: Grid<T> + ?Sized,
{
    pub fn new(grid: &'a G) -> Self {
        Rows {
            grid,
            cursor: 0,
            _pd: PhantomData,
        }
    }

    pub fn has_next(&self) -> bool {
        self.cursor != self.grid.height()
    }

    /// Index of the row the next call to `next` returns.
    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// Index of the row the last call to `next` returned, if any.
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }
}

impl<'a, G, T> Iterator for Rows<'a, G, T>
where
    G: Grid<T> + ?Sized,
    T: Clone,
{
    type Item = Vec<Option<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let row = self.grid.row(self.cursor).ok()?;
        self.cursor += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.height().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl<'a, G, T> ExactSizeIterator for Rows<'a, G, T>
where
    G: Grid<T> + ?Sized,
    T: Clone,
{
}
