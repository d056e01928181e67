use crate::grid::Grid;
use crate::griditer::Rows;
use itertools::Itertools;

/// One string per row, each cell drawn by `draw`.
pub fn to_lines<G, T>(grid: &G, draw: impl Fn(Option<&T>) -> char) -> Vec<String>
where
    G: Grid<T> + ?Sized,
    T: Clone,
{
    Rows::new(grid)
        .map(|row| row.iter().map(|cell| draw(cell.as_ref())).collect())
        .collect_vec()
}

/// The whole grid as newline-separated rows, without a trailing newline.
pub fn render<G, T>(grid: &G, draw: impl Fn(Option<&T>) -> char) -> String
where
    G: Grid<T> + ?Sized,
    T: Clone,
{
    to_lines(grid, draw).iter().join("\n")
}

/// Draws `char` cells as themselves and empty cells as `blank`.
pub fn chars(blank: char) -> impl Fn(Option<&char>) -> char {
    move |cell: Option<&char>| cell.copied().unwrap_or(blank)
}

#[cfg(test)]
mod test {
    use crate::datagrid::DataGrid;
    use crate::error::Result;
    use crate::grid::{Grid, GridMut};
    use crate::position::{Position, Size};
    use crate::text::{chars, render, to_lines};
    use itertools::Itertools;

    #[test]
    fn lines_per_row() -> Result<()> {
        let mut grid = DataGrid::from_values(Size(3, 2), "ABCDEF".chars().collect_vec())?;
        grid.clear(Position(1, 1))?;
        assert_eq!(to_lines(&grid, chars('.')), vec!["ABC", "D.F"]);
        assert_eq!(render(&grid, chars(' ')), "ABC\nD F");
        Ok(())
    }

    #[test]
    fn custom_drawing() {
        let grid = DataGrid::from_fn(Size(4, 2), |Position(x, y)| {
            if (x + y) % 2 == 0 {
                Some(true)
            } else {
                None
            }
        });
        let drawn = render(&grid, |cell| match cell {
            Some(true) => '#',
            Some(false) => '?',
            None => ' ',
        });
        assert_eq!(drawn, "# # \n # #");
    }

    #[test]
    fn renders_views() -> Result<()> {
        let grid = DataGrid::from_values(Size(3, 3), "abcdefghi".chars().collect_vec())?;
        let view = grid.sub_grid(Position(1, 1), Position(2, 2))?;
        assert_eq!(render(&view, chars('.')), "ef\nhi");
        Ok(())
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid: DataGrid<char> = DataGrid::new(Size(0, 0));
        assert_eq!(render(&grid, chars('.')), "");
    }
}
