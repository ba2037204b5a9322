//! The character-grid display the curve is drawn onto.
//!
//! [`Surface`] is the capability the controller clears and the rasterizer
//! writes into. The live terminal uses ratatui's [`Buffer`], which the
//! terminal diffs and flushes in one go after each redraw.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

use crate::color::PaletteColor;
use crate::geometry::{Cell, GridSize};

/// A writable character grid with palette colors.
pub trait Surface {
    /// Grid dimensions.
    fn size(&self) -> GridSize;

    /// Blank every cell.
    fn clear(&mut self);

    /// Write uncolored text starting at `cell`, clipped at the right edge.
    fn print(&mut self, cell: Cell, text: &str);

    /// Put a single colored glyph at `cell`. Cells outside the grid are ignored.
    fn plot(&mut self, cell: Cell, glyph: char, color: PaletteColor);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> GridSize {
        (**self).size()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn print(&mut self, cell: Cell, text: &str) {
        (**self).print(cell, text);
    }

    fn plot(&mut self, cell: Cell, glyph: char, color: PaletteColor) {
        (**self).plot(cell, glyph, color);
    }
}

impl Surface for Buffer {
    fn size(&self) -> GridSize {
        GridSize::from(self.area)
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn print(&mut self, cell: Cell, text: &str) {
        if !GridSize::from(self.area).contains(cell) {
            return;
        }
        let x = self.area.x + cell.col;
        let y = self.area.y + cell.row;
        let room = usize::from(self.area.width - cell.col);
        self.set_stringn(x, y, text, room, Style::default());
    }

    fn plot(&mut self, cell: Cell, glyph: char, color: PaletteColor) {
        let position = (self.area.x + cell.col, self.area.y + cell.row);
        if let Some(target) = self.cell_mut(position) {
            target.set_char(glyph).set_style(color.style());
        }
    }
}
