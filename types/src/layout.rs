//! Declarative page layout, built once at startup and never mutated.
//!
//! The layout is a plain configuration tree: option tuples for the
//! dropdown, bounds/step/marks for the slider. The core's layout builder
//! fills it from the loaded dataset; the UI only reads it.

use serde::{Deserialize, Serialize};

use crate::widget::PayloadRange;

/// One selectable entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Value handed back to the handlers ("ALL" or a site identifier).
    pub value: String,
    /// Human-readable label shown in the list.
    pub label: String,
}

/// Site-selection dropdown configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub options: Vec<DropdownOption>,
    pub default: String,
    pub placeholder: String,
}

/// Tick label rendered along the slider track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Payload range-slider configuration, bounded by the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub default_range: PayloadRange,
}

/// The whole page description: title, the two input widgets, and the
/// ids of the chart regions they drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: DropdownConfig,
    pub slider: SliderConfig,
}
