// File: crates/radar-core/src/chart.rs
// Summary: Radar chart renderer: ordered paint passes onto a character canvas, then text lines + legend.

use tracing::{debug, trace};

use crate::canvas::Canvas;
use crate::error::{RadarError, Result};
use crate::geometry::{
    axis_angle, lerp_point, point_on_axis, ring_radius, ring_sample_angle, value_radius, GridPoint,
};
use crate::grid::{linspace, ring_degrees, unit_steps};
use crate::metrics::MetricSet;
use crate::types::{Glyphs, HEIGHT, LABEL_WIDTH, MARGIN, RING_LEVELS, SCALE_MAX, WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    pub margin: i32,
    pub ring_levels: u32,
    pub ring_step_degrees: u32,
    pub scale_max: f64,
    pub label_width: usize,
    /// Labels sit this many cells beyond the outer ring.
    pub label_offset: i32,
    /// Segments per polygon edge; each edge paints `edge_segments + 1` samples.
    pub edge_segments: usize,
    pub glyphs: Glyphs,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: MARGIN,
            ring_levels: RING_LEVELS,
            ring_step_degrees: 10,
            scale_max: SCALE_MAX,
            label_width: LABEL_WIDTH,
            label_offset: 2,
            edge_segments: 10,
            glyphs: Glyphs::default(),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RadarError::InvalidOptions("canvas must be at least 1x1"));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(RadarError::InvalidOptions("canvas dimensions exceed i32 range"));
        }
        if self.ring_levels == 0 {
            return Err(RadarError::InvalidOptions("ring_levels must be positive"));
        }
        if self.ring_step_degrees == 0 {
            return Err(RadarError::InvalidOptions("ring_step_degrees must be positive"));
        }
        if self.edge_segments == 0 {
            return Err(RadarError::InvalidOptions("edge_segments must be positive"));
        }
        if !(self.scale_max.is_finite() && self.scale_max > 0.0) {
            return Err(RadarError::InvalidOptions("scale_max must be a positive number"));
        }
        Ok(())
    }
}

/// Center and outer radius, derived once per render from the canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub center: GridPoint,
    pub max_radius: f64,
}

impl Layout {
    /// Derive the layout. Only meaningful for options that pass [`RenderOptions::validate`];
    /// oversized dimensions saturate at `i32::MAX` instead of wrapping.
    pub fn from_options(opts: &RenderOptions) -> Self {
        let half = |n: usize| i32::try_from(n / 2).unwrap_or(i32::MAX);
        let center = GridPoint::new(half(opts.width), half(opts.height));
        let max_radius = center.x.min(center.y).saturating_sub(opts.margin) as f64;
        Self { center, max_radius }
    }
}

/// Paint passes in the order they run. Later passes overwrite earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintPass {
    Rings,
    AxesAndLabels,
    Edges,
    Vertices,
}

impl PaintPass {
    pub const ORDER: [PaintPass; 4] =
        [PaintPass::Rings, PaintPass::AxesAndLabels, PaintPass::Edges, PaintPass::Vertices];

    /// Run this pass; returns the number of cells written.
    fn paint(self, frame: &mut Frame<'_>) -> usize {
        match self {
            PaintPass::Rings => paint_rings(frame),
            PaintPass::AxesAndLabels => paint_axes_and_labels(frame),
            PaintPass::Edges => paint_edges(frame),
            PaintPass::Vertices => paint_vertices(frame),
        }
    }
}

/// Everything one render needs; the canvas is borrowed exclusively by one pass at a time.
struct Frame<'a> {
    canvas: &'a mut Canvas,
    opts: &'a RenderOptions,
    layout: Layout,
    metrics: &'a MetricSet,
    vertices: &'a [GridPoint],
}

#[derive(Clone, Debug, Default)]
pub struct RadarChart {
    pub options: RenderOptions,
}

impl RadarChart {
    pub fn new() -> Self {
        Self { options: RenderOptions::default() }
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_options(&self.options)
    }

    /// Grid cell of each category's value on its axis, in category order.
    pub fn vertices(&self, metrics: &MetricSet) -> Vec<GridPoint> {
        let layout = self.layout();
        let n = metrics.len();
        metrics
            .values()
            .enumerate()
            .map(|(i, v)| {
                let r = value_radius(v, layout.max_radius, self.options.scale_max);
                point_on_axis(axis_angle(i, n), r, layout.center)
            })
            .collect()
    }

    /// Paint the chart and return the canvas rows followed by a blank line and the legend.
    pub fn render(&self, metrics: &MetricSet) -> Result<Vec<String>> {
        if metrics.is_empty() {
            return Err(RadarError::NoCategories);
        }
        self.options.validate()?;

        let layout = self.layout();
        debug!(
            categories = metrics.len(),
            width = self.options.width,
            height = self.options.height,
            center = ?layout.center,
            max_radius = layout.max_radius,
            "rendering radar chart"
        );

        let vertices = self.vertices(metrics);
        let mut canvas = Canvas::new(self.options.width, self.options.height, self.options.glyphs.blank);
        {
            let mut frame = Frame {
                canvas: &mut canvas,
                opts: &self.options,
                layout,
                metrics,
                vertices: &vertices,
            };
            for pass in PaintPass::ORDER {
                let cells = pass.paint(&mut frame);
                trace!(?pass, cells, "paint pass done");
            }
        }

        let mut lines = canvas.into_lines();
        lines.push(String::new());
        lines.push(self.options.glyphs.legend());
        Ok(lines)
    }

    pub fn render_to_string(&self, metrics: &MetricSet) -> Result<String> {
        Ok(self.render(metrics)?.join("\n"))
    }
}

/// Render with the reference 40x20 options.
pub fn render(metrics: &MetricSet) -> Result<Vec<String>> {
    RadarChart::new().render(metrics)
}

// ---- passes -----------------------------------------------------------------

fn paint_rings(frame: &mut Frame<'_>) -> usize {
    let opts = frame.opts;
    let mut written = 0;
    for level in 1..=opts.ring_levels {
        let radius = ring_radius(level, frame.layout.max_radius, opts.ring_levels);
        for deg in ring_degrees(opts.ring_step_degrees) {
            let p = point_on_axis(ring_sample_angle(deg), radius, frame.layout.center);
            if frame.canvas.put(p, opts.glyphs.grid) {
                written += 1;
            }
        }
    }
    written
}

fn paint_axes_and_labels(frame: &mut Frame<'_>) -> usize {
    let glyphs = frame.opts.glyphs;
    let Layout { center, max_radius } = frame.layout;
    let metrics = frame.metrics;
    let n = metrics.len();
    let mut written = 0;
    for (i, name) in metrics.names().enumerate() {
        let angle = axis_angle(i, n);

        // Rings win where they cross the stroke.
        for r in unit_steps(max_radius) {
            let p = point_on_axis(angle, r, center);
            if frame.canvas.get(p).is_some_and(|c| c != glyphs.grid) && frame.canvas.put(p, glyphs.axis) {
                written += 1;
            }
        }

        let anchor = point_on_axis(angle, max_radius + frame.opts.label_offset as f64, center);
        written += frame.canvas.put_str(anchor, &label_field(name, frame.opts.label_width));
    }
    written
}

fn paint_edges(frame: &mut Frame<'_>) -> usize {
    let glyph = frame.opts.glyphs.edge;
    let ts = linspace(0.0, 1.0, frame.opts.edge_segments + 1);
    let vertices = frame.vertices;
    let n = vertices.len();
    let mut written = 0;
    for (i, &start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % n];
        for &t in &ts {
            if frame.canvas.put(lerp_point(start, end, t), glyph) {
                written += 1;
            }
        }
    }
    written
}

fn paint_vertices(frame: &mut Frame<'_>) -> usize {
    let glyph = frame.opts.glyphs.vertex;
    let mut written = 0;
    for &p in frame.vertices {
        if frame.canvas.put(p, glyph) {
            written += 1;
        }
    }
    written
}

/// Name padded with blanks or truncated to exactly `width` chars.
pub fn label_field(name: &str, width: usize) -> String {
    let mut field: String = name.chars().take(width).collect();
    let len = field.chars().count();
    field.extend(std::iter::repeat(' ').take(width - len));
    field
}
