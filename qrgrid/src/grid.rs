use crate::error::{GridError, Result};
use crate::griditer::{CellCursor, Cells, Rows};
use crate::position::{Position, Positions, Size};
use crate::subgrid::SubGrid;
use std::marker::PhantomData;

/// Read access to a rectangle of optional cells. An empty cell is `None`.
///
/// Only `size` and `cell` need implementing; everything else is expressed in
/// terms of those two, which is what lets storage and views behave the same
/// way to callers. Grids that can also be written implement [`GridMut`].
pub trait Grid<T> {
    /// Neither side may be longer than `Size::MAX_SIDE`, so that every cell
    /// has an `i32` coordinate. `DataGrid` refuses larger sizes and a view is
    /// never larger than what it views.
    fn size(&self) -> Size;

    /// The cell at `pos`, or `OutOfBounds` if `pos` isn't inside `size()`.
    fn cell(&self, pos: Position) -> Result<&Option<T>>;

    fn width(&self) -> usize {
        self.size().width()
    }

    fn height(&self) -> usize {
        self.size().height()
    }

    fn in_bounds(&self, pos: Position) -> bool {
        self.size().contains(pos)
    }

    #[inline]
    fn check_pos(&self, pos: Position) -> Result<()> {
        let size = self.size();
        if size.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(pos, size))
        }
    }

    fn get(&self, pos: Position) -> Result<Option<&T>> {
        self.cell(pos).map(Option::as_ref)
    }

    /// A copy of row `y`. Changing the returned vec never touches the grid.
    fn row(&self, y: usize) -> Result<Vec<Option<T>>>
    where
        T: Clone,
    {
        let Size(width, height) = self.size();
        if y >= height {
            return Err(GridError::RowOutOfBounds(y, height));
        }
        (0..width)
            .map(|x| self.cell(Position(x as i32, y as i32)).map(Clone::clone))
            .collect()
    }

    /// `None` matches empty cells.
    fn contains(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        self.position_of(value).is_some()
    }

    /// First position holding `value`, scanning row by row.
    fn position_of(&self, value: Option<&T>) -> Option<Position>
    where
        T: PartialEq,
    {
        self.size()
            .positions()
            .find(|&pos| self.get(pos).map_or(false, |cell| cell == value))
    }

    fn positions(&self) -> Positioned<'_, Self, T>
    where
        Self: Sized,
    {
        Positioned {
            positions: self.size().positions(),
            grid: self,
            _pd: PhantomData,
        }
    }

    fn cells(&self) -> Cells<'_, Self, T>
    where
        Self: Sized,
    {
        Cells::new(self)
    }

    fn rows(&self) -> Rows<'_, Self, T>
    where
        Self: Sized,
        T: Clone,
    {
        Rows::new(self)
    }

    /// A read-only view of the inclusive rectangle `start..=end`.
    fn sub_grid(&self, start: Position, end: Position) -> Result<SubGrid<&Self, T>>
    where
        Self: Sized,
    {
        SubGrid::new(self, start, end)
    }
}

/// Write access on top of [`Grid`].
pub trait GridMut<T>: Grid<T> {
    fn cell_mut(&mut self, pos: Position) -> Result<&mut Option<T>>;

    fn set(&mut self, pos: Position, value: T) -> Result<()> {
        *self.cell_mut(pos)? = Some(value);
        Ok(())
    }

    /// Empties the cell, handing back whatever was there.
    fn clear(&mut self, pos: Position) -> Result<Option<T>> {
        self.replace(pos, None)
    }

    fn replace(&mut self, pos: Position, value: Option<T>) -> Result<Option<T>> {
        Ok(std::mem::replace(self.cell_mut(pos)?, value))
    }

    fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for pos in self.size().positions() {
            if let Ok(cell) = self.cell_mut(pos) {
                *cell = Some(value.clone());
            }
        }
    }

    /// Stamps `pattern` onto this grid with its top-left corner at `at`.
    /// Empty pattern cells are copied too, so they clear what's underneath.
    fn copy_from<G>(&mut self, at: Position, pattern: &G) -> Result<()>
    where
        Self: Sized,
        G: Grid<T> + ?Sized,
        T: Clone,
    {
        let Size(width, height) = pattern.size();
        if width == 0 || height == 0 {
            return Ok(());
        }
        let end = at + Position(width as i32 - 1, height as i32 - 1);
        let mut target = self.sub_grid_mut(at, end)?;
        for pos in pattern.size().positions() {
            *target.cell_mut(pos)? = pattern.cell(pos)?.clone();
        }
        Ok(())
    }

    /// A writable view of the inclusive rectangle `start..=end`. Writes land
    /// in this grid.
    fn sub_grid_mut(&mut self, start: Position, end: Position) -> Result<SubGrid<&mut Self, T>>
    where
        Self: Sized,
    {
        SubGrid::new(self, start, end)
    }

    fn cell_cursor(&mut self) -> CellCursor<'_, Self, T>
    where
        Self: Sized,
    {
        CellCursor::new(self)
    }
}

impl<'a, G, T> Grid<T> for &'a G
where
    G: Grid<T> + ?Sized,
{
    fn size(&self) -> Size {
        (**self).size()
    }

    fn cell(&self, pos: Position) -> Result<&Option<T>> {
        (**self).cell(pos)
    }
}

impl<'a, G, T> Grid<T> for &'a mut G
where
    G: Grid<T> + ?Sized,
{
    fn size(&self) -> Size {
        (**self).size()
    }

    fn cell(&self, pos: Position) -> Result<&Option<T>> {
        (**self).cell(pos)
    }
}

impl<'a, G, T> GridMut<T> for &'a mut G
where
    G: GridMut<T> + ?Sized,
{
    fn cell_mut(&mut self, pos: Position) -> Result<&mut Option<T>> {
        (**self).cell_mut(pos)
    }
}

pub struct Positioned<'a, G: ?Sized, T> {
    positions: Positions,
    grid: &'a G,
    _pd: PhantomData<T>,
}

impl<'a, G, T: 'a> Iterator for Positioned<'a, G, T>
where
    G: Grid<T> + ?Sized,
{
    type Item = (Position, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.positions.next()?;
        let grid = self.grid;
        grid.get(pos).ok().map(|cell| (pos, cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}
