//! Radar chart dataset types.
//!
//! These are plain value objects handed to an external renderer; nothing
//! here draws anything.

use serde::{Deserialize, Serialize};

use crate::tier::PriorityTier;

/// One series of the radar dataset: a tier's completion percentage per
/// section, aligned index-for-index with the dataset labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    /// The tier this series describes.
    pub tier: PriorityTier,
    /// Completion percentages in `0.0..=100.0`, one per section.
    pub values: Vec<f64>,
    /// Legend label; renderers fall back to the tier name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Stroke/fill color hint for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stroke width hint for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
}

impl RadarSeries {
    /// Creates a series with no presentation hints.
    pub fn new(tier: PriorityTier, values: Vec<f64>) -> Self {
        Self {
            tier,
            values,
            label: None,
            color: None,
            stroke_width: None,
        }
    }

    /// Sets the legend label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the color hint.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the stroke width hint.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// Multi-axis completion dataset: one axis per section, one series per
/// tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarDataset {
    /// Axis labels, one per section in catalog order.
    pub labels: Vec<String>,
    /// Per-tier series, values aligned with `labels`.
    pub series: Vec<RadarSeries>,
}

impl RadarDataset {
    /// Creates a dataset from labels and series.
    pub fn new(labels: Vec<String>, series: Vec<RadarSeries>) -> Self {
        Self { labels, series }
    }

    /// Returns the series for a tier, if present.
    pub fn series_for(&self, tier: PriorityTier) -> Option<&RadarSeries> {
        self.series.iter().find(|s| s.tier == tier)
    }
}
