//! Structural equality and hashing. Both walk row snapshots, so a `DataGrid`
//! and a `SubGrid` holding the same cells compare and hash the same.

use crate::grid::Grid;
use crate::griditer::Rows;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// True if both grids have the same size and yield the same rows, in order.
pub fn rows_eq<A, B, T>(a: &A, b: &B) -> bool
where
    A: Grid<T> + ?Sized,
    B: Grid<T> + ?Sized,
    T: PartialEq + Clone,
{
    // Zero-height grids have no rows to tell their widths apart.
    if a.size() != b.size() {
        return false;
    }
    let mut a_rows = Rows::new(a);
    let mut b_rows = Rows::new(b);
    loop {
        match (a_rows.next(), b_rows.next()) {
            (Some(a_row), Some(b_row)) => {
                if a_row != b_row {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Folds each row into `hash * 31 + row_hash`. A row hashes the same way, one
/// cell at a time, with empty cells contributing zero.
pub fn rows_hash<G, T>(grid: &G) -> u64
where
    G: Grid<T> + ?Sized,
    T: Hash + Clone,
{
    Rows::new(grid).fold(1u64, |hash, row| {
        hash.wrapping_mul(31).wrapping_add(row_hash(&row))
    })
}

fn row_hash<T: Hash>(row: &[Option<T>]) -> u64 {
    row.iter().fold(1u64, |hash, cell| {
        let cell_hash = match cell {
            Some(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            }
            None => 0,
        };
        hash.wrapping_mul(31).wrapping_add(cell_hash)
    })
}
