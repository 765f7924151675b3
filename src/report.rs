//! Persists and displays search results: a found path as a two-column CSV
//! listing and the whole area as a text map with the path overlaid.

use crate::cell::Cell;
use crate::loader::AreaMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `path` as CSV with an `x,y` header, one row per cell in path
/// order.
pub fn write_path_csv<W: Write>(writer: W, path: &[Cell]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for cell in path {
        csv_writer.serialize(cell)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `path` as CSV to a file at `file_path`.
pub fn save_path_csv(file_path: impl AsRef<Path>, path: &[Cell]) -> Result<(), csv::Error> {
    write_path_csv(File::create(file_path)?, path)
}

/// Renders the area as a text map with `path` overlaid, rows top to bottom
/// in increasing y. Legend: `.` empty, `#` construction site, `A` apartment,
/// `B` building, `C` cafe, `H` home, `*` path. Points of interest are drawn
/// over path cells so the endpoints stay visible.
pub fn render_map(area: &AreaMap, path: &[Cell]) -> String {
    let max_x = area.grid.max_x() as usize;
    let max_y = area.grid.max_y() as usize;
    let mut rows = vec![vec!['.'; max_x]; max_y];
    let mut put = |cell: &Cell, glyph: char| {
        rows[(cell.y - 1) as usize][(cell.x - 1) as usize] = glyph;
    };
    for y in 1..=area.grid.max_y() {
        for x in 1..=area.grid.max_x() {
            let cell = Cell::new(x, y);
            if area.grid.is_blocked(cell) {
                put(&cell, '#');
            }
        }
    }
    for cell in path {
        put(cell, '*');
    }
    for cell in &area.apartments {
        put(cell, 'A');
    }
    for cell in &area.buildings {
        put(cell, 'B');
    }
    for cell in &area.cafes {
        put(cell, 'C');
    }
    put(&area.home, 'H');
    let mut out = String::with_capacity(max_y * (max_x + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
