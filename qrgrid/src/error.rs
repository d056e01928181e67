use crate::position::{Position, Size};

quick_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GridError {
        SizeMismatch(actual: usize, expected: Size) {
            display(
                "got {} cells but a {} grid holds {}",
                actual,
                expected,
                expected
                    .checked_count()
                    .map_or("more than can be addressed".to_string(), |n| n.to_string())
            )
        }
        OutOfBounds(pos: Position, size: Size) {
            display("position {} is out of bounds for a {} grid", pos, size)
        }
        RowOutOfBounds(row: usize, height: usize) {
            display("row {} is out of bounds for height {}", row, height)
        }
        StartOutOfBounds(start: Position, size: Size) {
            display("subgrid start {} lies outside the {} backing grid", start, size)
        }
        EndOutOfBounds(end: Position, size: Size) {
            display("subgrid end {} lies outside the {} backing grid", end, size)
        }
        InvertedCorners(start: Position, end: Position) {
            display("subgrid end {} comes before start {}", end, start)
        }
        NoCurrentCell {
            display("no cell to replace; call next_cell first")
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
