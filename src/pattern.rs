use thiserror::Error;

use crate::data::{CellSet, Pos};

/// Glyphs used by [`render_pattern`]. The empty glyph is printable on purpose,
/// an all-empty board should still be visible; rendered output is for display,
/// not for feeding back into [`parse_pattern`].
pub const FILLED_GLYPH: char = '@';
pub const EMPTY_GLYPH: char = '`';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("row {row} has {len} cells, but the board is only {width} wide")]
    MalformedRow { row: usize, len: usize, width: usize },
    #[error("pattern has {rows} rows, but the board is only {height} tall")]
    DimensionMismatch { rows: usize, height: usize },
}

/// Parse a textual board into the set of filled cells.
///
/// Any non-whitespace character marks a filled cell. Rows shorter than `width`
/// are treated as padded with empty cells; rows wider than `width`, or more
/// rows than `height`, are rejected.
pub fn parse_pattern(pattern: &str, width: usize, height: usize) -> Result<CellSet, PatternError> {
    let mut cells = CellSet::default();
    for (row, line) in pattern.lines().enumerate() {
        if row >= height {
            return Err(PatternError::DimensionMismatch {
                rows: pattern.lines().count(),
                height,
            });
        }

        let len = line.chars().count();
        if len > width {
            return Err(PatternError::MalformedRow { row, len, width });
        }

        for (col, glyph) in line.chars().enumerate() {
            if !glyph.is_whitespace() {
                cells.insert(Pos::new(col as i32, row as i32));
            }
        }
    }
    Ok(cells)
}

/// Render the filled set back to text for display. One row per line, rows
/// newline-terminated. Cells outside the `width` x `height` window are ignored.
pub fn render_pattern(cells: &CellSet, width: usize, height: usize) -> String {
    let mut pattern = String::with_capacity((width + 1) * height);
    for row in 0..height {
        for col in 0..width {
            let filled = cells.contains(&Pos::new(col as i32, row as i32));
            pattern.push(if filled { FILLED_GLYPH } else { EMPTY_GLYPH });
        }
        pattern.push('\n');
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_non_blank_glyph_as_filled() {
        let cells = parse_pattern("X.X\n   \nO#@\n", 3, 3).unwrap();
        let expected = CellSet::from([
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(2, 0),
            Pos::new(0, 2),
            Pos::new(1, 2),
            Pos::new(2, 2),
        ]);
        assert_eq!(cells, expected);
    }

    #[test]
    fn short_rows_count_as_empty_trailing_cells() {
        let cells = parse_pattern("X\nXXX\n", 3, 2).unwrap();
        let expected = CellSet::from([
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(1, 1),
            Pos::new(2, 1),
        ]);
        assert_eq!(cells, expected);
    }

    #[test]
    fn empty_pattern_parses_to_an_empty_set() {
        assert_eq!(parse_pattern("", 4, 4).unwrap(), CellSet::default());
        assert_eq!(parse_pattern("\n\n", 4, 4).unwrap(), CellSet::default());
    }

    #[test]
    fn overlong_row_is_a_malformed_row() {
        let result = parse_pattern("XX\nXXXXX\n", 3, 3);
        assert_eq!(
            result,
            Err(PatternError::MalformedRow {
                row: 1,
                len: 5,
                width: 3,
            })
        );
    }

    #[test]
    fn too_many_rows_is_a_dimension_mismatch() {
        let result = parse_pattern("X\nX\nX\n", 3, 2);
        assert_eq!(
            result,
            Err(PatternError::DimensionMismatch { rows: 3, height: 2 })
        );
    }

    #[test]
    fn renders_filled_and_empty_glyphs_row_by_row() {
        let cells = CellSet::from([Pos::new(0, 0), Pos::new(2, 1)]);
        assert_eq!(render_pattern(&cells, 3, 2), "@``\n``@\n");
    }

    #[test]
    fn renders_cells_outside_the_window_as_nothing() {
        let cells = CellSet::from([Pos::new(5, 5), Pos::new(-1, 0)]);
        assert_eq!(render_pattern(&cells, 2, 2), "``\n``\n");
    }
}
