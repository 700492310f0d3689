// File: crates/radar-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, glyph set).

/// Default canvas width in cells.
pub const WIDTH: usize = 40;
/// Default canvas height in cells.
pub const HEIGHT: usize = 20;
/// Cells kept free between the outer ring and the nearer canvas edge.
pub const MARGIN: i32 = 2;
/// Fixed label field width; names are padded or truncated to this.
pub const LABEL_WIDTH: usize = 8;
/// Number of reference rings.
pub const RING_LEVELS: u32 = 5;
/// Top of the rating scale; a value of `SCALE_MAX` sits on the outer ring.
pub const SCALE_MAX: f64 = 5.0;

/// Characters used for each chart element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub blank: char,
    pub grid: char,
    pub axis: char,
    pub edge: char,
    pub vertex: char,
}

impl Glyphs {
    pub const fn new(blank: char, grid: char, axis: char, edge: char, vertex: char) -> Self {
        Self { blank, grid, axis, edge, vertex }
    }

    /// Legend line describing the glyphs.
    pub fn legend(&self) -> String {
        format!(
            "Legend: {} = data points, {} = skill polygon, {} = axes, {} = grid",
            self.vertex, self.edge, self.axis, self.grid
        )
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(' ', '.', '+', '*', '@')
    }
}
