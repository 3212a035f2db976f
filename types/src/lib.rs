//! Shared types for the Launchboard dashboard.
//!
//! Everything the core and the UI exchange lives here: chart
//! specifications produced by the query layer, the widget state owned by
//! the hosting runtime, and the immutable layout configuration built at
//! startup. Keeping these in one crate lets the wasm front end and the
//! native tooling agree on the wire shapes without depending on the core.

pub mod chart;
pub mod formatting;
pub mod layout;
pub mod widget;

pub use chart::{ChartSlot, ChartSpec, ChartUpdate, PieChart, PieSlice, ScatterChart, ScatterPoint};
pub use layout::{DashboardLayout, DropdownConfig, DropdownOption, SliderConfig, SliderMark};
pub use widget::{PayloadRange, WidgetState, ALL_SITES};
