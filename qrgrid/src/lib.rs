//! Grids of optional cells, the board model underneath the QR maze.
//!
//! [`DataGrid`] owns its cells. [`SubGrid`] is a window onto any other grid,
//! including another `SubGrid`, and reads and writes straight through to it.
//! Both implement [`Grid`] (and [`GridMut`] where writing is allowed), so
//! callers don't need to care which one they've got.

#[macro_use]
extern crate quick_error;

pub mod compare;
pub mod datagrid;
pub mod error;
pub mod grid;
pub mod griditer;
pub mod position;
pub mod subgrid;
pub mod text;

pub use datagrid::DataGrid;
pub use error::{GridError, Result};
pub use grid::{Grid, GridMut};
pub use position::{Position, Size};
pub use subgrid::SubGrid;
