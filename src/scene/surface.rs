#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! The glyph canvas one effect layer draws into.
//!
//! A surface is a width x height grid of cells, each holding a glyph and an
//! alpha in `[0, 1]`. Layers fade the previous frame, then stamp fresh
//! glyphs on top; the compositor later blends lit cells over the background
//! gradient.

const MIN_ALPHA: f32 = 0.015;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub alpha: f32,
}

impl Cell {
    const EMPTY: Self = Self {
        glyph: ' ',
        alpha: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fades the previous frame. `trail_alpha` is the fraction erased per
    /// tick; zero means a hard clear with no motion trails.
    pub fn fade(&mut self, trail_alpha: f32) {
        if trail_alpha <= 0.0 {
            self.clear();
            return;
        }
        let keep = 1.0 - trail_alpha.min(1.0);
        for cell in &mut self.cells {
            if cell.alpha == 0.0 {
                continue;
            }
            cell.alpha *= keep;
            if cell.alpha < MIN_ALPHA {
                *cell = Cell::EMPTY;
            }
        }
    }

    /// Stamps one glyph at a fractional position. Stamps that land outside
    /// the grid are dropped; where stamps overlap, the stronger alpha keeps
    /// its glyph.
    pub fn stamp(&mut self, x: f32, y: f32, glyph: char, alpha: f32) {
        if alpha < MIN_ALPHA || self.is_empty() {
            return;
        }
        let col = x.floor() as i32;
        let row = y.floor() as i32;
        if col < 0 || row < 0 || col >= i32::from(self.width) || row >= i32::from(self.height) {
            return;
        }
        let idx = row as usize * usize::from(self.width) + col as usize;
        let cell = &mut self.cells[idx];
        if alpha >= cell.alpha {
            cell.glyph = glyph;
            cell.alpha = alpha.min(1.0);
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)])
    }

    /// Every cell still carrying light, row-major.
    pub fn lit(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            (cell.alpha > 0.0).then(|| {
                let x = (i % usize::from(self.width)) as u16;
                let y = (i / usize::from(self.width)) as u16;
                (x, y, *cell)
            })
        })
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alpha > 0.0).count()
    }
}
