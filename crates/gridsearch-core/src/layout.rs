//! Building grids from text art and from row-major label matrices.
//!
//! Text layouts use one symbol per cell:
//!
//! ```text
//! S..#.
//! .w.#.
//! ...#.
//! ...#.
//! ....E
//! ```
//!
//! `.` empty, `#` barrier, `w` weighted, `S` start, `E` end. Label
//! matrices use `"empty"`, `"barrier"`, `"weight"`, `"start"` and `"end"`.

use std::fmt;

use crate::cell::CellKind;
use crate::grid::{Grid, GridError};
use crate::pos::Pos;

impl Grid {
    /// Parse a square text layout.
    ///
    /// Whitespace around the whole text is trimmed, but not inside lines.
    /// Search-mark symbols (`o`, `x`, `*`) are accepted so that
    /// [`to_text`](Self::to_text) output can be read back.
    pub fn from_text(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let lines: Vec<&str> = s.lines().collect();
        let size = lines.len();
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(LayoutError::NotSquare { row, width, size });
            }
        }

        let mut grid = Grid::new(size);
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let kind = CellKind::from_symbol(ch).ok_or(LayoutError::InvalidSymbol { ch, pos })?;
                grid.paint(pos, kind)?;
            }
        }
        Ok(grid)
    }

    /// Build a grid from a square row-major matrix of cell labels.
    pub fn from_labels<R, L>(rows: &[R]) -> Result<Self, LayoutError>
    where
        R: AsRef<[L]>,
        L: AsRef<str>,
    {
        let size = rows.len();
        if size == 0 {
            return Err(LayoutError::Empty);
        }
        let mut grid = Grid::new(size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(LayoutError::NotSquare {
                    row: r,
                    width: row.len(),
                    size,
                });
            }
            for (c, label) in row.iter().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let label = label.as_ref();
                let kind = CellKind::from_label(label).ok_or_else(|| LayoutError::InvalidLabel {
                    label: label.to_string(),
                    pos,
                })?;
                grid.paint(pos, kind)?;
            }
        }
        Ok(grid)
    }

    /// Render the grid with the layout symbols, one line per row.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Classify a cell during parsing, refusing a second Start or End.
    fn paint(&mut self, pos: Pos, kind: CellKind) -> Result<(), LayoutError> {
        match kind {
            CellKind::Start if self.start().is_some() => Err(LayoutError::DuplicateStart(pos)),
            CellKind::End if self.end().is_some() => Err(LayoutError::DuplicateEnd(pos)),
            _ => Ok(self.set_classification(pos, kind)?),
        }
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows at all.
    Empty,
    /// A row's width differs from the number of rows.
    NotSquare { row: usize, width: usize, size: usize },
    /// A character that is not a layout symbol.
    InvalidSymbol { ch: char, pos: Pos },
    /// A label that does not name a paintable cell kind.
    InvalidLabel { label: String, pos: Pos },
    /// A second Start cell.
    DuplicateStart(Pos),
    /// A second End cell.
    DuplicateEnd(Pos),
    Grid(GridError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("layout: no rows"),
            Self::NotSquare { row, width, size } => write!(
                f,
                "layout: row {row} has {width} cells, expected {size} for a square grid"
            ),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "layout contains invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidLabel { label, pos } => {
                write!(f, "layout contains invalid label {label:?} at {pos}")
            }
            Self::DuplicateStart(pos) => write!(f, "layout: second start cell at {pos}"),
            Self::DuplicateEnd(pos) => write!(f, "layout: second end cell at {pos}"),
            Self::Grid(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LayoutError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DEFAULT_WEIGHT;

    const WALLED: &str = "\
S.#..
..#..
..#..
..#..
....E";

    #[test]
    fn parse_text_layout() {
        let g = Grid::from_text(WALLED).unwrap();
        assert_eq!(g.size(), 5);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(4, 4)));
        assert_eq!(g.count(CellKind::Barrier), 4);
        assert_eq!(g.kind(Pos::new(4, 2)), Some(CellKind::Empty));
    }

    #[test]
    fn text_round_trips() {
        let g = Grid::from_text(WALLED).unwrap();
        assert_eq!(g.to_text(), WALLED);
        let again = Grid::from_text(&g.to_text()).unwrap();
        assert_eq!(again.to_text(), WALLED);
    }

    #[test]
    fn weighted_symbol_gets_weight() {
        let g = Grid::from_text("Sw\n.E").unwrap();
        assert_eq!(g.cost(Pos::new(0, 1)), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn ragged_text_is_rejected() {
        let err = Grid::from_text("S..\n..\n..E").unwrap_err();
        assert_eq!(
            err,
            LayoutError::NotSquare {
                row: 1,
                width: 2,
                size: 3
            }
        );
        assert!(matches!(
            Grid::from_text("S.\n..\n.E"),
            Err(LayoutError::NotSquare { .. })
        ));
    }

    #[test]
    fn bad_symbol_reports_position() {
        let err = Grid::from_text("S.\n?E").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidSymbol {
                ch: '?',
                pos: Pos::new(1, 0)
            }
        );
        assert!(err.to_string().contains("(1, 0)"));
    }

    #[test]
    fn duplicate_endpoints_are_rejected() {
        assert_eq!(
            Grid::from_text("SS\n.E").unwrap_err(),
            LayoutError::DuplicateStart(Pos::new(0, 1))
        );
        assert_eq!(
            Grid::from_text("SE\nE.").unwrap_err(),
            LayoutError::DuplicateEnd(Pos::new(1, 0))
        );
    }

    #[test]
    fn empty_layouts_are_rejected() {
        assert_eq!(Grid::from_text("  \n ").unwrap_err(), LayoutError::Empty);
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(Grid::from_labels(&rows).unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn parse_label_matrix() {
        let rows = vec![
            vec!["start", "empty", "barrier"],
            vec!["", "weight", "barrier"],
            vec!["empty", "empty", "end"],
        ];
        let g = Grid::from_labels(&rows).unwrap();
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(2, 2)));
        assert_eq!(g.kind(Pos::new(1, 1)), Some(CellKind::Weighted));
        assert_eq!(g.to_text(), "S.#\n.w#\n..E");
    }

    #[test]
    fn bad_label_matrix() {
        let rows: Vec<Vec<String>> = vec![
            vec!["start".into(), "lava".into()],
            vec!["empty".into(), "end".into()],
        ];
        assert_eq!(
            Grid::from_labels(&rows).unwrap_err(),
            LayoutError::InvalidLabel {
                label: "lava".into(),
                pos: Pos::new(0, 1)
            }
        );
        let ragged = vec![vec!["start", "end"], vec!["empty"]];
        assert!(matches!(
            Grid::from_labels(&ragged),
            Err(LayoutError::NotSquare { row: 1, .. })
        ));
    }
}
