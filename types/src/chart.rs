//! Chart specifications handed to the charting collaborator.
//!
//! A [`ChartSpec`] is a pure data description (kind, series, title,
//! labels); rendering belongs entirely to the chart sink. Specs are
//! rebuilt from scratch on every handler invocation, never mutated.

use serde::{Deserialize, Serialize};

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One point of the payload/outcome scatter chart.
///
/// `outcome` doubles as the point's category for color mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: u8,
}

/// Scatter chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// A chart specification for one output slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    /// Title text of the spec, whatever its kind.
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    /// Number of data elements (slices or points).
    pub fn len(&self) -> usize {
        match self {
            ChartSpec::Pie(pie) => pie.slices.len(),
            ChartSpec::Scatter(scatter) => scatter.points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named output region a chart update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSlot {
    SuccessPie,
    PayloadScatter,
}

impl ChartSlot {
    /// DOM element id of the slot's chart region.
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartSlot::SuccessPie => "success-pie-chart",
            ChartSlot::PayloadScatter => "success-payload-scatter-chart",
        }
    }
}

/// A freshly derived spec addressed to one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub slot: ChartSlot,
    pub spec: ChartSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_serializes_with_kind_tag() {
        let spec = ChartSpec::Pie(PieChart {
            title: "Total Launch Success Count".to_string(),
            slices: vec![PieSlice { label: "KSC LC-39A".to_string(), value: 10 }],
        });
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains(r#""kind":"pie""#));

        let back: ChartSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn slots_map_to_stable_element_ids() {
        assert_eq!(ChartSlot::SuccessPie.element_id(), "success-pie-chart");
        assert_eq!(
            ChartSlot::PayloadScatter.element_id(),
            "success-payload-scatter-chart"
        );
    }
}
