//! Dashboard settings.
//!
//! Optional user preferences, distinct from the dataset-derived layout.
//! On native targets they round-trip through a TOML file via confy; the
//! wasm build just uses the defaults. Settings failures are never fatal;
//! only dataset loading is.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Dataset file read at startup (native targets).
    pub dataset_path: PathBuf,
    /// Slider step granularity, in kilograms of payload.
    pub slider_step: f64,
    /// Spacing of the slider tick marks, in kilograms.
    pub mark_interval_kg: f64,
    /// Swap `.` and `,` in formatted numbers.
    pub european_numbers: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/spacex_launch_dash.csv"),
            slider_step: 1000.0,
            mark_interval_kg: 10_000.0,
            european_numbers: false,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DashboardSettings {
    const APP_NAME: &'static str = "launchboard";

    /// Load the stored settings, falling back to defaults on any error.
    pub fn load() -> Self {
        match confy::load(Self::APP_NAME, None) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the settings to the user's config directory.
    pub fn store(&self) -> Result<(), confy::ConfyError> {
        confy::store(Self::APP_NAME, None, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget_contract() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.slider_step, 1000.0);
        assert_eq!(settings.mark_interval_kg, 10_000.0);
        assert!(!settings.european_numbers);
    }
}
