use clap::{App, Arg};
use itertools::Itertools;

use qrgrid::compare::rows_hash;
use qrgrid::text::{chars, render};
use qrgrid::{DataGrid, Grid, GridMut, Position, Size};
use std::error::Error;

const BLANK: char = '.';

struct Edit {
    pos: Position,
    value: char,
}

fn main() {
    let matches = App::new("Grid Dump")
        .arg(Arg::with_name("CELLS").required(true).index(1))
        .arg(
            Arg::with_name("view")
                .long("view")
                .short("v")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("set")
                .long("set")
                .short("s")
                .multiple(true)
                .takes_value(true),
        )
        .get_matches();

    let cells = matches.value_of("CELLS").unwrap();
    let view = matches.value_of("view");
    let edits = matches.values_of("set").map(|v| v.collect_vec()).unwrap_or_default();

    if let Err(e) = main_command(cells, view, &edits) {
        eprintln!("griddump: {}", e);
        std::process::exit(1);
    }
}

fn main_command(cells: &str, view: Option<&str>, edits: &[&str]) -> Result<(), Box<dyn Error>> {
    let mut grid = parse_grid(cells)?;
    let edits = edits
        .iter()
        .map(|e| parse_edit(e))
        .collect::<Result<Vec<Edit>, _>>()?;
    println!("Grid {}:", grid.size());
    println!("{}", render(&grid, chars(BLANK)));

    match view {
        Some(corners) => {
            let (start, end) = parse_corners(corners)?;
            let mut view = grid.sub_grid_mut(start, end)?;
            for edit in &edits {
                view.set(edit.pos, edit.value)?;
            }
            println!("-----------");
            println!("View at {} {}:", view.offset(), view.size());
            println!("{}", render(&view, chars(BLANK)));

            let copy =
                DataGrid::from_cells(view.size(), view.cells().map(|c| c.cloned()).collect())?;
            println!("View equals copy: {}", view == copy);
            println!(
                "Hashes: view {:016x}, copy {:016x}",
                rows_hash(&view),
                rows_hash(&copy)
            );
        }
        None => {
            for edit in &edits {
                grid.set(edit.pos, edit.value)?;
            }
        }
    }

    if !edits.is_empty() {
        println!("-----------");
        println!("Grid after {} edit(s):", edits.len());
        println!("{}", render(&grid, chars(BLANK)));
    }
    Ok(())
}

/// Rows are separated by `/`; `.` is an empty cell.
fn parse_grid(cells: &str) -> Result<DataGrid<char>, Box<dyn Error>> {
    let rows = cells.split('/').collect_vec();
    let width = rows[0].chars().count();
    if let Some(bad) = rows.iter().find(|row| row.chars().count() != width) {
        return Err(format!("row {:?} isn't {} cells wide", bad, width).into());
    }
    let data = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| if c == BLANK { None } else { Some(c) })
        .collect_vec();
    Ok(DataGrid::from_cells(Size(width, rows.len()), data)?)
}

fn parse_pair(pair: &str) -> Result<Position, Box<dyn Error>> {
    let (x, y) = pair
        .split(',')
        .collect_tuple()
        .ok_or_else(|| format!("expected X,Y but got {:?}", pair))?;
    Ok(Position(x.trim().parse()?, y.trim().parse()?))
}

fn parse_corners(corners: &str) -> Result<(Position, Position), Box<dyn Error>> {
    let parts = corners.split(',').collect_vec();
    if parts.len() != 4 {
        return Err(format!("expected X0,Y0,X1,Y1 but got {:?}", corners).into());
    }
    let start = parse_pair(&parts[0..2].join(","))?;
    let end = parse_pair(&parts[2..4].join(","))?;
    Ok((start, end))
}

fn parse_edit(edit: &str) -> Result<Edit, Box<dyn Error>> {
    let (pos, value) = edit
        .splitn(2, '=')
        .collect_tuple()
        .ok_or_else(|| format!("expected X,Y=C but got {:?}", edit))?;
    let value = value
        .chars()
        .exactly_one()
        .map_err(|_| format!("expected a single character in {:?}", edit))?;
    Ok(Edit {
        pos: parse_pair(pos)?,
        value,
    })
}
