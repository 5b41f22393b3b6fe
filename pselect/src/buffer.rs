use crate::rect::Rect;
use crate::text::char_width;
use crate::theme::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second column of a double-width character; never written to the terminal.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

/// Foreground, background and attributes applied to written text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Pen {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            style: TextStyle::new(),
        }
    }

    pub const fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub const fn dim(mut self) -> Self {
        self.style = self.style.dim();
        self
    }
}

/// A grid of cells painted each frame and diffed against the previous one.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells of `self` that differ from `other`. Both buffers must share dimensions.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Fill `rect` (clipped to the buffer) with blank cells of the given background.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        let rect = rect.intersection(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(
                    x,
                    y,
                    Cell {
                        bg,
                        ..Cell::default()
                    },
                );
            }
        }
    }

    /// Write `text` starting at (x, y), using at most `max_width` columns.
    /// Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, pen: Pen) -> u16 {
        let mut used: u16 = 0;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if used + w > max_width {
                break;
            }
            let cx = x.saturating_add(used);
            self.set(
                cx,
                y,
                Cell {
                    ch,
                    fg: pen.fg,
                    bg: pen.bg,
                    style: pen.style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    cx.saturating_add(1),
                    y,
                    Cell {
                        ch: ' ',
                        fg: pen.fg,
                        bg: pen.bg,
                        style: pen.style,
                        wide_continuation: true,
                    },
                );
            }
            used += w;
        }
        used
    }

    /// The visible characters of row `y`, for assertions and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.ch)
            .collect()
    }
}
