//! Character-grid geometry.

use ratatui::layout::Rect;

/// Size of the character grid, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridSize {
    /// Number of rows (lines).
    pub rows: u16,
    /// Number of columns (characters per line).
    pub cols: u16,
}

impl GridSize {
    /// Create a grid size.
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// True when the grid has no cells to draw into.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// True if `cell` lies inside the grid.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

impl From<Rect> for GridSize {
    fn from(rect: Rect) -> Self {
        Self::new(rect.height, rect.width)
    }
}

/// A cell position, row-major with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub row: u16,
    /// Column index.
    pub col: u16,
}

impl Cell {
    /// The top-left cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a cell position.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}
