//! Root dashboard component.
//!
//! Owns the widget state (dropdown selection, payload range) as signals
//! and re-derives a chart spec through the core query layer whenever a
//! dependency changes. This is the hosting-runtime veneer over the same
//! pure handlers the dispatcher and the CLI drive.

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

use launchboard_core::config::DashboardSettings;
use launchboard_core::dataset::parse_records;
use launchboard_core::{build_layout, DashboardQuery};
use launchboard_types::{ChartSlot, DashboardLayout, PayloadRange, ALL_SITES};

use crate::charts;
use crate::components::{PayloadSlider, SiteDropdown};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Dataset shipped with the app; parsed once at startup and immutable
/// afterwards.
const DATASET_CSV: &str = include_str!("../../data/spacex_launch_dash.csv");

#[component]
pub fn App() -> Element {
    // One-time load. A failure here is fatal: the error page replaces
    // the dashboard, matching the no-partial-dashboard contract.
    let dataset = use_signal(|| parse_records(DATASET_CSV).map_err(|e| e.to_string()));

    let layout: Memo<Option<DashboardLayout>> = use_memo(move || {
        dataset
            .read()
            .as_ref()
            .ok()
            .map(|d| build_layout(d, &DashboardSettings::default()))
    });

    // Widget state, seeded from the layout defaults.
    let selected_site = use_signal(|| ALL_SITES.to_string());
    let payload_range = use_signal(|| {
        dataset
            .peek()
            .as_ref()
            .map(|d| {
                let bounds = d.payload_bounds();
                (bounds.low, bounds.high)
            })
            .unwrap_or((0.0, 0.0))
    });

    // Pie chart: depends on the dropdown only.
    use_effect(move || {
        let site = selected_site.read().clone();
        if let Ok(data) = &*dataset.read() {
            let spec = DashboardQuery::new(data).success_ratio_spec(&site);
            charts::render_chart(ChartSlot::SuccessPie, spec);
        }
    });

    // Scatter chart: depends on the dropdown and the slider.
    use_effect(move || {
        let site = selected_site.read().clone();
        let (low, high) = *payload_range.read();
        if let Ok(data) = &*dataset.read() {
            let spec = DashboardQuery::new(data)
                .payload_outcome_spec(&site, PayloadRange::new(low, high));
            charts::render_chart(ChartSlot::PayloadScatter, spec);
        }
    });

    // Keep the charts sized to the window.
    use_effect(|| {
        let closure = Closure::wrap(Box::new(charts::resize_all_charts) as Box<dyn Fn()>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });

    let body = match layout() {
        Some(layout) => rsx! {
            h1 { class: "dashboard-title", "{layout.title}" }
            SiteDropdown {
                options: layout.dropdown.options.clone(),
                selected: selected_site,
            }
            div { class: "chart-region", id: ChartSlot::SuccessPie.element_id() }
            p { class: "slider-caption", "Payload range (kg):" }
            PayloadSlider { config: layout.slider.clone(), range: payload_range }
            div { class: "chart-region", id: ChartSlot::PayloadScatter.element_id() }
        },
        None => {
            let error = dataset
                .read()
                .as_ref()
                .err()
                .cloned()
                .unwrap_or_else(|| "dataset unavailable".to_string());
            rsx! {
                div { class: "load-error",
                    h1 { "Launch Records Dashboard" }
                    p { "Failed to load the launch dataset: {error}" }
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "dashboard", {body} }
    }
}
