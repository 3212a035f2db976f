//! Input widgets: the site dropdown and the payload range slider.

use dioxus::prelude::*;

use launchboard_types::formatting::format_mass;
use launchboard_types::{DropdownOption, SliderConfig};

/// Site-selection dropdown. Writes the chosen option value (the "ALL"
/// sentinel or a site identifier) back into `selected`.
#[component]
pub fn SiteDropdown(options: Vec<DropdownOption>, selected: Signal<String>) -> Element {
    rsx! {
        div { class: "site-dropdown",
            label { r#for: "site-dropdown", "Launch Site" }
            select {
                id: "site-dropdown",
                value: "{selected}",
                onchange: move |e: Event<FormData>| selected.set(e.value()),
                for opt in options {
                    option {
                        value: "{opt.value}",
                        selected: *selected.read() == opt.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// Payload range slider: two thumbs over one track, clamped so the low
/// thumb never passes the high one.
#[component]
pub fn PayloadSlider(config: SliderConfig, range: Signal<(f64, f64)>) -> Element {
    let (low, high) = range();
    let low_label = format_mass(low, false);
    let high_label = format_mass(high, false);

    rsx! {
        div { class: "payload-slider",
            div { class: "slider-track",
                input {
                    r#type: "range",
                    min: "{config.min}",
                    max: "{config.max}",
                    step: "{config.step}",
                    value: "{low}",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<f64>() {
                            let (_, hi) = range();
                            range.set((v.min(hi), hi));
                        }
                    }
                }
                input {
                    r#type: "range",
                    min: "{config.min}",
                    max: "{config.max}",
                    step: "{config.step}",
                    value: "{high}",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<f64>() {
                            let (lo, _) = range();
                            range.set((lo, v.max(lo)));
                        }
                    }
                }
            }
            div { class: "slider-values",
                "{low_label} kg to {high_label} kg"
            }
            div { class: "slider-marks",
                for mark in config.marks {
                    span { class: "slider-mark", "{mark.label}" }
                }
            }
        }
    }
}
