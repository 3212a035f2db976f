//! Layout builder.
//!
//! Derives the immutable [`DashboardLayout`] configuration tree from the
//! loaded dataset and the dashboard settings. Built once at startup;
//! the UI only ever reads it.

use launchboard_types::formatting::format_mass;
use launchboard_types::{
    DashboardLayout, DropdownConfig, DropdownOption, SliderConfig, SliderMark, ALL_SITES,
};

use crate::config::DashboardSettings;
use crate::dataset::LaunchDataset;
use crate::sites;

pub const PAGE_TITLE: &str = "Launch Records Dashboard";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";

/// Build the page layout: `"ALL"` plus each site (sorted) in the
/// dropdown, and a slider spanning the dataset's payload bounds with a
/// mark at every configured interval.
pub fn build_layout(dataset: &LaunchDataset, settings: &DashboardSettings) -> DashboardLayout {
    let mut options = Vec::with_capacity(dataset.sites().len() + 1);
    options.push(DropdownOption {
        value: ALL_SITES.to_string(),
        label: "All Sites".to_string(),
    });
    for site in dataset.sites() {
        options.push(DropdownOption {
            value: site.clone(),
            label: sites::display_label(site).to_string(),
        });
    }

    let bounds = dataset.payload_bounds();
    let mut marks = Vec::new();
    if settings.mark_interval_kg > 0.0 {
        let mut mark = bounds.low;
        while mark <= bounds.high {
            marks.push(SliderMark {
                value: mark,
                label: format_mass(mark, settings.european_numbers),
            });
            mark += settings.mark_interval_kg;
        }
    }

    DashboardLayout {
        title: PAGE_TITLE.to_string(),
        dropdown: DropdownConfig {
            options,
            default: ALL_SITES.to_string(),
            placeholder: DROPDOWN_PLACEHOLDER.to_string(),
        },
        slider: SliderConfig {
            min: bounds.low,
            max: bounds.high,
            step: settings.slider_step,
            marks,
            default_range: bounds,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchDataset, LaunchRecord};

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: Some(payload),
            outcome: 1,
        }
    }

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("VAFB SLC-4E", 0.0),
            record("CCAFS LC-40", 9600.0),
            record("KSC LC-39A", 2500.0),
        ])
    }

    #[test]
    fn all_sites_is_always_the_first_option() {
        let layout = build_layout(&dataset(), &DashboardSettings::default());

        assert_eq!(layout.dropdown.options[0].value, ALL_SITES);
        assert_eq!(layout.dropdown.default, ALL_SITES);

        // Remaining options follow the sorted site order.
        let values: Vec<&str> = layout.dropdown.options[1..]
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, ["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn registered_sites_get_descriptive_labels() {
        let layout = build_layout(&dataset(), &DashboardSettings::default());

        let ksc = layout
            .dropdown
            .options
            .iter()
            .find(|o| o.value == "KSC LC-39A")
            .unwrap();
        assert_eq!(ksc.label, "Kennedy Space Center Launch Complex 39A");
    }

    #[test]
    fn slider_defaults_to_the_full_bounds() {
        let layout = build_layout(&dataset(), &DashboardSettings::default());

        assert_eq!(layout.slider.min, 0.0);
        assert_eq!(layout.slider.max, 9600.0);
        assert_eq!(layout.slider.step, 1000.0);
        assert_eq!(layout.slider.default_range.low, 0.0);
        assert_eq!(layout.slider.default_range.high, 9600.0);
    }

    #[test]
    fn marks_fall_on_the_configured_interval() {
        let settings = DashboardSettings { mark_interval_kg: 5000.0, ..Default::default() };
        let layout = build_layout(&dataset(), &settings);

        let values: Vec<f64> = layout.slider.marks.iter().map(|m| m.value).collect();
        assert_eq!(values, [0.0, 5000.0]);
        assert_eq!(layout.slider.marks[1].label, "5,000");
    }
}
