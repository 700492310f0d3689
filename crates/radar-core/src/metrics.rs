// File: crates/radar-core/src/metrics.rs
// Summary: Ordered category -> rating model consumed by the renderer.
// Notes:
// - Insertion order is axis order: the first category is drawn on the upward axis.
// - Ratings are not range-checked here; out-of-scale values render by extrapolation.

use crate::error::{RadarError, Result};

/// Lowest rating on the survey scale.
pub const RATING_MIN: u8 = 1;
/// Highest rating on the survey scale.
pub const RATING_MAX: u8 = 5;

/// Whether `value` lies on the `RATING_MIN..=RATING_MAX` scale.
pub fn is_in_scale(value: f64) -> bool {
    value >= RATING_MIN as f64 && value <= RATING_MAX as f64
}

#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub name: String,
    pub value: f64,
}

/// Ordered mapping from unique, non-empty category names to ratings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricSet {
    metrics: Vec<Metric>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self { metrics: Vec::new() }
    }

    /// Build from `(name, value)` pairs, keeping their order.
    pub fn from_pairs<I, S, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<f64>,
    {
        let mut set = Self::new();
        for (name, value) in pairs {
            set.insert(name, value)?;
        }
        Ok(set)
    }

    /// Append a category. Rejects blank names and names already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<f64>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RadarError::EmptyCategory);
        }
        if self.metrics.iter().any(|m| m.name == name) {
            return Err(RadarError::DuplicateCategory(name));
        }
        self.metrics.push(Metric { name, value: value.into() });
        Ok(())
    }

    pub fn len(&self) -> usize { self.metrics.len() }

    pub fn is_empty(&self) -> bool { self.metrics.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|m| m.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.metrics.iter().map(|m| m.value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.value)
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}
