// File: crates/radar-core/src/canvas.rs
// Summary: Owned character grid with bounds-checked writes and row serialization.

use crate::geometry::GridPoint;

/// Fixed-size `width x height` character buffer. Writes outside the grid are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, blank: char) -> Self {
        Self { width, height, cells: vec![blank; width * height] }
    }

    pub const fn width(&self) -> usize { self.width }
    pub const fn height(&self) -> usize { self.height }

    fn index(&self, p: GridPoint) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn contains(&self, p: GridPoint) -> bool {
        self.index(p).is_some()
    }

    pub fn get(&self, p: GridPoint) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Write `glyph` at `p`. Returns `false` (and writes nothing) when `p` is off-canvas.
    pub fn put(&mut self, p: GridPoint, glyph: char) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// Write `text` left to right starting at `p`, one char per cell, clipping each cell.
    /// Returns the number of cells written.
    pub fn put_str(&mut self, p: GridPoint, text: &str) -> usize {
        let mut written = 0;
        for (dx, ch) in text.chars().enumerate() {
            let Ok(dx) = i32::try_from(dx) else { break };
            if self.put(p.offset(dx, 0), ch) {
                written += 1;
            }
        }
        written
    }

    /// Consume the canvas into its rows, top to bottom.
    pub fn into_lines(self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells.chunks(self.width).map(|row| row.iter().collect()).collect()
    }
}
