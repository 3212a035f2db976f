//! Query layer: derives chart specifications from the loaded table.
//!
//! Both queries are pure, synchronous passes over the record vector:
//! same inputs against the same dataset always produce the same spec,
//! and nothing here mutates the table or any other state. Out-of-domain
//! inputs (a site the layout never offered, a reversed range) simply
//! produce an empty filtered set and a valid zero-data spec.

use hashbrown::HashMap;

use launchboard_types::{
    ChartSpec, PayloadRange, PieChart, PieSlice, ScatterChart, ScatterPoint, ALL_SITES,
};

use crate::dataset::LaunchDataset;

pub const PIE_TITLE_ALL: &str = "Total Launch Success Count";
pub const SCATTER_TITLE_ALL: &str = "Payload Mass vs. Launch Success";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "Launch Success (1=Success, 0=Failure)";

/// Read-only view over a loaded dataset that answers the two dashboard
/// queries.
#[derive(Debug, Clone, Copy)]
pub struct DashboardQuery<'a> {
    dataset: &'a LaunchDataset,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(dataset: &'a LaunchDataset) -> Self {
        Self { dataset }
    }

    /// Success-ratio pie chart for the dropdown selection.
    ///
    /// `"ALL"` produces one slice per distinct site, valued by that
    /// site's success count. A specific site produces exactly two
    /// slices, `Success` and `Failure`, with explicit counts, so rows
    /// whose outcome is neither 0 nor 1 land in neither slice.
    pub fn success_ratio(&self, selected_site: &str) -> PieChart {
        if selected_site == ALL_SITES {
            let mut successes: HashMap<&str, u64> = HashMap::new();
            for record in self.dataset.records() {
                if record.outcome == 1 {
                    *successes.entry(record.site.as_str()).or_default() += 1;
                }
            }

            // One slice per site present in the table, sorted site order,
            // including sites with zero successes.
            let slices = self
                .dataset
                .sites()
                .iter()
                .map(|site| PieSlice {
                    label: site.clone(),
                    value: successes.get(site.as_str()).copied().unwrap_or(0),
                })
                .collect();

            return PieChart { title: PIE_TITLE_ALL.to_string(), slices };
        }

        let mut success_count = 0;
        let mut failure_count = 0;
        for record in self.dataset.records() {
            if record.site != selected_site {
                continue;
            }
            match record.outcome {
                1 => success_count += 1,
                0 => failure_count += 1,
                _ => {}
            }
        }

        PieChart {
            title: format!("Success vs Failure for {selected_site}"),
            slices: vec![
                PieSlice { label: "Success".to_string(), value: success_count },
                PieSlice { label: "Failure".to_string(), value: failure_count },
            ],
        }
    }

    /// Payload/outcome scatter chart for the dropdown selection and the
    /// slider interval (inclusive on both ends).
    ///
    /// Rows without a defined payload never appear. A reversed interval
    /// matches nothing and yields a valid zero-point spec.
    pub fn payload_outcome(&self, selected_site: &str, range: PayloadRange) -> ScatterChart {
        let points = self
            .dataset
            .records()
            .iter()
            .filter(|r| selected_site == ALL_SITES || r.site == selected_site)
            .filter_map(|r| {
                let mass = r.payload_mass_kg?;
                range.contains(mass).then_some(ScatterPoint {
                    payload_mass_kg: mass,
                    outcome: r.outcome,
                })
            })
            .collect();

        let title = if selected_site == ALL_SITES {
            SCATTER_TITLE_ALL.to_string()
        } else {
            format!("Payload Mass vs. Launch Success for {selected_site}")
        };

        ScatterChart {
            title,
            x_label: SCATTER_X_LABEL.to_string(),
            y_label: SCATTER_Y_LABEL.to_string(),
            points,
        }
    }

    /// Convenience wrappers returning slot-agnostic specs.
    pub fn success_ratio_spec(&self, selected_site: &str) -> ChartSpec {
        ChartSpec::Pie(self.success_ratio(selected_site))
    }

    pub fn payload_outcome_spec(&self, selected_site: &str, range: PayloadRange) -> ChartSpec {
        ChartSpec::Scatter(self.payload_outcome(selected_site, range))
    }
}
