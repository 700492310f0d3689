// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; exports the radar chart geometry, canvas, and text renderer.

pub mod canvas;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod metrics;
pub mod types;

pub use canvas::Canvas;
pub use chart::{render, Layout, PaintPass, RadarChart, RenderOptions};
pub use error::{RadarError, Result};
pub use geometry::GridPoint;
pub use metrics::{Metric, MetricSet};
pub use types::Glyphs;
