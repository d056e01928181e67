use crate::compare;
use crate::error::{GridError, Result};
use crate::grid::{Grid, GridMut};
use crate::position::{Position, Size};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Owned, flat, row-major storage. The cell for `(x, y)` lives at
/// `y * width + x`.
#[derive(Debug, Clone)]
pub struct DataGrid<T> {
    data: Vec<Option<T>>,
    size: Size,
}

impl<T> DataGrid<T> {
    /// A grid where every cell is empty.
    ///
    /// # Panics
    ///
    /// If either side is longer than `Size::MAX_SIDE` or the cell count
    /// overflows, the same way `Vec::with_capacity` does.
    pub fn new(size: Size) -> DataGrid<T> {
        let count = addressable_count(size);
        let mut data = Vec::with_capacity(count);
        data.resize_with(count, || None);
        DataGrid { data, size }
    }

    /// Takes ownership of `cells`, which must hold exactly `width * height`
    /// entries in row-major order. Sizes `new` would panic on are reported
    /// as a mismatch.
    pub fn from_cells(size: Size, cells: Vec<Option<T>>) -> Result<DataGrid<T>> {
        if size.checked_count() != Some(cells.len()) {
            return Err(GridError::SizeMismatch(cells.len(), size));
        }
        Ok(DataGrid { data: cells, size })
    }

    /// Like `from_cells`, but every cell is occupied.
    pub fn from_values(size: Size, values: Vec<T>) -> Result<DataGrid<T>> {
        DataGrid::from_cells(size, values.into_iter().map(Some).collect())
    }

    /// # Panics
    ///
    /// On the same sizes as `new`.
    pub fn from_fn(size: Size, mut f: impl FnMut(Position) -> Option<T>) -> DataGrid<T> {
        addressable_count(size);
        let data = size.positions().map(|pos| f(pos)).collect();
        DataGrid { data, size }
    }

    pub fn as_slice(&self) -> &[Option<T>] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<Option<T>> {
        self.data
    }
}

fn addressable_count(size: Size) -> usize {
    match size.checked_count() {
        Some(count) => count,
        None => panic!("a {} grid has more cells than can be addressed", size),
    }
}

impl<T> Grid<T> for DataGrid<T> {
    fn size(&self) -> Size {
        self.size
    }

    fn cell(&self, pos: Position) -> Result<&Option<T>> {
        self.check_pos(pos)?;
        Ok(&self.data[self.size.flat_index(pos)])
    }

    fn row(&self, y: usize) -> Result<Vec<Option<T>>>
    where
        T: Clone,
    {
        let Size(width, height) = self.size;
        if y >= height {
            return Err(GridError::RowOutOfBounds(y, height));
        }
        let start = y * width;
        Ok(self.data[start..start + width].to_vec())
    }

    fn contains(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        self.data.iter().any(|cell| cell.as_ref() == value)
    }

    fn position_of(&self, value: Option<&T>) -> Option<Position>
    where
        T: PartialEq,
    {
        let Size(width, _) = self.size;
        self.data
            .iter()
            .position(|cell| cell.as_ref() == value)
            .map(|idx| Position((idx % width) as i32, (idx / width) as i32))
    }
}

impl<T> GridMut<T> for DataGrid<T> {
    fn cell_mut(&mut self, pos: Position) -> Result<&mut Option<T>> {
        self.check_pos(pos)?;
        let idx = self.size.flat_index(pos);
        Ok(&mut self.data[idx])
    }

    fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for cell in self.data.iter_mut() {
            *cell = Some(value.clone());
        }
    }
}

impl<T> Index<Position> for DataGrid<T> {
    type Output = Option<T>;

    fn index(&self, index: Position) -> &Self::Output {
        match self.cell(index) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<Position> for DataGrid<T> {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        match self.cell_mut(index) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, G> PartialEq<G> for DataGrid<T>
where
    G: Grid<T>,
    T: PartialEq + Clone,
{
    fn eq(&self, other: &G) -> bool {
        compare::rows_eq(self, other)
    }
}

impl<T: Eq + Clone> Eq for DataGrid<T> {}

impl<T: Hash + Clone> Hash for DataGrid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(compare::rows_hash(self));
    }
}

#[cfg(test)]
mod test {
    use crate::datagrid::DataGrid;
    use crate::error::{GridError, Result};
    use crate::grid::{Grid, GridMut};
    use crate::position::{Position, Size};
    use itertools::Itertools;
    use test_case::test_case;

    fn numbered(size: Size) -> DataGrid<i32> {
        DataGrid::from_values(size, (0..size.count() as i32).collect_vec()).unwrap()
    }

    #[test]
    fn new_grid_is_empty() {
        let grid: DataGrid<char> = DataGrid::new(Size(4, 3));
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.as_slice().len(), 12);
        assert!(grid.as_slice().iter().all(Option::is_none));
        assert!(grid.contains(None));
        assert_eq!(grid.position_of(None), Some(Position(0, 0)));
    }

    #[test_case(Size(0, 0), 0 => true)]
    #[test_case(Size(0, 7), 0 => true)]
    #[test_case(Size(3, 3), 9 => true)]
    #[test_case(Size(3, 3), 8 => false)]
    #[test_case(Size(3, 3), 10 => false)]
    #[test_case(Size(1, 4), 4 => true)]
    #[test_case(Size(1 << 63, 2), 0 => false; "count overflows")]
    #[test_case(Size(1 << 62, 4), 0 => false; "wrapping count of zero")]
    #[test_case(Size(Size::MAX_SIDE + 1, 0), 0 => false; "side too long")]
    #[test_case(Size(Size::MAX_SIDE, 0), 0 => true; "longest side")]
    fn construction_size_check(size: Size, len: usize) -> bool {
        DataGrid::from_values(size, vec![0u8; len]).is_ok()
    }

    #[test]
    #[should_panic(expected = "more cells than can be addressed")]
    fn new_rejects_unaddressable_size() {
        DataGrid::<u8>::new(Size(1 << 40, 1 << 40));
    }

    #[test]
    #[should_panic(expected = "more cells than can be addressed")]
    fn from_fn_rejects_unaddressable_size() {
        DataGrid::<u8>::from_fn(Size(Size::MAX_SIDE + 1, 1), |_| None);
    }

    #[test]
    fn size_mismatch_reports_sizes() {
        let err = DataGrid::from_values(Size(3, 2), vec!['a'; 5]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch(5, Size(3, 2)));
    }

    #[test]
    fn dimension_invariant() {
        let mut grid = numbered(Size(3, 2));
        for x in -2..5 {
            for y in -2..4 {
                let pos = Position(x, y);
                let inside = x >= 0 && x < 3 && y >= 0 && y < 2;
                assert_eq!(grid.get(pos).is_ok(), inside, "get {}", pos);
                assert_eq!(grid.set(pos, 0).is_ok(), inside, "set {}", pos);
                assert_eq!(grid.in_bounds(pos), inside);
            }
        }
        assert_eq!(
            grid.get(Position(3, 0)),
            Err(GridError::OutOfBounds(Position(3, 0), Size(3, 2)))
        );
    }

    #[test]
    fn set_then_get() -> Result<()> {
        let mut grid = DataGrid::new(Size(5, 5));
        for pos in Size(5, 5).positions() {
            grid.set(pos, pos.x() * 10 + pos.y())?;
        }
        for pos in Size(5, 5).positions() {
            assert_eq!(grid.get(pos)?, Some(&(pos.x() * 10 + pos.y())));
        }
        assert_eq!(grid.replace(Position(1, 1), None)?, Some(11));
        assert_eq!(grid.get(Position(1, 1))?, None);
        Ok(())
    }

    #[test]
    fn row_is_a_snapshot() -> Result<()> {
        let grid = numbered(Size(3, 3));
        let mut row = grid.row(1)?;
        assert_eq!(row, vec![Some(3), Some(4), Some(5)]);
        row[0] = Some(100);
        row.clear();
        assert_eq!(grid.get(Position(0, 1))?, Some(&3));
        assert_eq!(grid.row(1)?, vec![Some(3), Some(4), Some(5)]);
        assert_eq!(grid.row(3), Err(GridError::RowOutOfBounds(3, 3)));
        Ok(())
    }

    #[test]
    fn search() {
        let mut grid = DataGrid::from_values(Size(3, 2), "ABCDBF".chars().collect_vec()).unwrap();
        assert!(grid.contains(Some(&'D')));
        assert!(!grid.contains(Some(&'Z')));
        assert!(!grid.contains(None));
        assert_eq!(grid.position_of(Some(&'B')), Some(Position(1, 0)));
        assert_eq!(grid.position_of(Some(&'F')), Some(Position(2, 1)));
        assert_eq!(grid.position_of(Some(&'Z')), None);

        grid.clear(Position(0, 1)).unwrap();
        assert!(grid.contains(None));
        assert_eq!(grid.position_of(None), Some(Position(0, 1)));
    }

    #[test]
    fn from_fn_is_row_major() {
        let grid = DataGrid::from_fn(Size(3, 2), |Position(x, y)| {
            if x == y {
                None
            } else {
                Some(x + 10 * y)
            }
        });
        assert_eq!(
            grid.into_inner(),
            vec![None, Some(1), Some(2), Some(10), None, Some(12)]
        );
    }

    #[test]
    fn fill_and_stamp() -> Result<()> {
        let mut board = DataGrid::new(Size(5, 5));
        board.fill('.');
        let finder = DataGrid::from_cells(
            Size(3, 3),
            "###"
                .chars()
                .chain("# #".chars())
                .chain("###".chars())
                .map(|c| if c == ' ' { None } else { Some(c) })
                .collect_vec(),
        )?;
        board.copy_from(Position(2, 2), &finder)?;
        assert_eq!(board.get(Position(1, 1))?, Some(&'.'));
        assert_eq!(board.get(Position(2, 2))?, Some(&'#'));
        assert_eq!(board.get(Position(3, 3))?, None);
        assert_eq!(board.get(Position(4, 4))?, Some(&'#'));

        assert_eq!(
            board.copy_from(Position(3, 3), &finder),
            Err(GridError::EndOutOfBounds(Position(5, 5), Size(5, 5)))
        );
        Ok(())
    }

    #[test]
    fn index_operators() {
        let mut grid = numbered(Size(2, 2));
        assert_eq!(grid[Position(1, 1)], Some(3));
        grid[Position(0, 1)] = None;
        assert_eq!(grid.get(Position(0, 1)), Ok(None));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let grid = numbered(Size(2, 2));
        let _cell = &grid[Position(2, 0)];
    }
}
