// File: crates/radar-examples/src/bin/persona.rs
// Summary: Minimal example that renders a fixed five-axis radar chart to stdout.

use anyhow::Result;
use radar_core::{MetricSet, RadarChart};

fn main() -> Result<()> {
    let metrics = MetricSet::from_pairs([
        ("Lion", 4),
        ("Eagle", 2),
        ("Dolphin", 5),
        ("Wolf", 3),
        ("Elephant", 1),
    ])?;

    println!("{}", RadarChart::new().render_to_string(&metrics)?);
    Ok(())
}
