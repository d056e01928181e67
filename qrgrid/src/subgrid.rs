use crate::compare;
use crate::error::{GridError, Result};
use crate::grid::{Grid, GridMut};
use crate::griditer::Cells;
use crate::position::{Position, Size};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// A rectangular window onto another grid. Nothing is copied: every read and
/// write is translated by `offset` and handed to the backing grid.
///
/// `R` is whatever holds the backing grid. A shared reference gives a
/// read-only view; a mutable reference gives a view that writes through. `Rc`
/// or `Box<dyn Grid<T>>` work too. The backing can itself be a `SubGrid`, in
/// which case every layer checks its own bounds before passing the call down.
pub struct SubGrid<R, T> {
    grid: R,
    offset: Position,
    size: Size,
    _pd: PhantomData<T>,
}

impl<R, T> SubGrid<R, T>
where
    R: Deref,
    R::Target: Grid<T>,
{
    /// Views the inclusive rectangle from `start` to `end` of `grid`.
    pub fn new(grid: R, start: Position, end: Position) -> Result<SubGrid<R, T>> {
        let backing = (*grid).size();
        if !backing.contains(start) {
            return Err(GridError::StartOutOfBounds(start, backing));
        }
        if !backing.contains(end) {
            return Err(GridError::EndOutOfBounds(end, backing));
        }
        if end.x() < start.x() || end.y() < start.y() {
            return Err(GridError::InvertedCorners(start, end));
        }
        let Position(dx, dy) = end - start;
        Ok(SubGrid {
            grid,
            offset: start,
            size: Size(dx as usize + 1, dy as usize + 1),
            _pd: PhantomData,
        })
    }
}

impl<R, T> SubGrid<R, T> {
    /// Top-left corner of this view in the coordinates of its backing grid.
    pub fn offset(&self) -> Position {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.grid
    }
}

impl<R, T> Grid<T> for SubGrid<R, T>
where
    R: Deref,
    R::Target: Grid<T>,
{
    fn size(&self) -> Size {
        self.size
    }

    fn cell(&self, pos: Position) -> Result<&Option<T>> {
        self.check_pos(pos)?;
        (*self.grid).cell(pos + self.offset)
    }

    fn row(&self, y: usize) -> Result<Vec<Option<T>>>
    where
        T: Clone,
    {
        let Size(width, height) = self.size;
        if y >= height {
            return Err(GridError::RowOutOfBounds(y, height));
        }
        let y = y as i32;
        let line: SubGrid<&Self, T> =
            SubGrid::new(self, Position(0, y), Position(width as i32 - 1, y))?;
        Ok(Cells::new(&line).map(|cell| cell.cloned()).collect())
    }
}

impl<R, T> GridMut<T> for SubGrid<R, T>
where
    R: DerefMut,
    R::Target: GridMut<T>,
{
    fn cell_mut(&mut self, pos: Position) -> Result<&mut Option<T>> {
        self.check_pos(pos)?;
        let offset = self.offset;
        (*self.grid).cell_mut(pos + offset)
    }
}

impl<R: Clone, T> Clone for SubGrid<R, T> {
    fn clone(&self) -> Self {
        SubGrid {
            grid: self.grid.clone(),
            offset: self.offset,
            size: self.size,
            _pd: PhantomData,
        }
    }
}

impl<R, T> fmt::Debug for SubGrid<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubGrid")
            .field("offset", &self.offset)
            .field("size", &self.size)
            .finish()
    }
}

impl<R, T, G> PartialEq<G> for SubGrid<R, T>
where
    R: Deref,
    R::Target: Grid<T>,
    G: Grid<T>,
    T: PartialEq + Clone,
{
    fn eq(&self, other: &G) -> bool {
        compare::rows_eq(self, other)
    }
}

impl<R, T> Hash for SubGrid<R, T>
where
    R: Deref,
    R::Target: Grid<T>,
    T: Hash + Clone,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(compare::rows_hash(self));
    }
}
