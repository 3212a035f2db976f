//! Widget-event dispatch.
//!
//! An explicit, single-threaded replacement for hidden reactive
//! bindings: the [`Dispatcher`] owns the current widget state, and each
//! incoming [`WidgetEvent`] synchronously invokes the pure query for
//! every chart slot that depends on the changed widget, forwarding the
//! resulting [`ChartUpdate`]s to a [`ChartSink`]. Handlers never run
//! concurrently for one dispatcher, and the shared dataset is read-only,
//! so no synchronization is involved.

use launchboard_types::{ChartSlot, ChartUpdate, PayloadRange, WidgetState};

use crate::dataset::LaunchDataset;
use crate::query::DashboardQuery;

/// A widget-state change reported by the hosting runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The site dropdown changed; refreshes both charts.
    SiteSelected(String),
    /// The payload slider changed; refreshes the scatter chart only.
    PayloadRangeChanged(PayloadRange),
}

/// Receives derived chart specifications, one per affected slot.
pub trait ChartSink {
    fn apply(&mut self, update: ChartUpdate);
}

/// Collecting sink, used by tests and the CLI.
impl ChartSink for Vec<ChartUpdate> {
    fn apply(&mut self, update: ChartUpdate) {
        self.push(update);
    }
}

/// Holds the current widget state and drives the query layer.
pub struct Dispatcher<'a> {
    dataset: &'a LaunchDataset,
    state: WidgetState,
}

impl<'a> Dispatcher<'a> {
    /// Start from the layout defaults: all sites, full payload range.
    pub fn new(dataset: &'a LaunchDataset) -> Self {
        Self {
            dataset,
            state: WidgetState::initial(dataset.payload_bounds()),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Apply one widget event: update the held state, re-derive the
    /// affected chart specs, and forward them to `sink` in slot order.
    ///
    /// Event values are passed through as-is; the query layer degrades
    /// out-of-domain values to empty results, so dispatch never fails.
    pub fn dispatch(&mut self, event: WidgetEvent, sink: &mut impl ChartSink) {
        match event {
            WidgetEvent::SiteSelected(site) => {
                tracing::debug!(site = %site, "site selection changed");
                self.state.selected_site = site;
                self.emit(ChartSlot::SuccessPie, sink);
                self.emit(ChartSlot::PayloadScatter, sink);
            }
            WidgetEvent::PayloadRangeChanged(range) => {
                tracing::debug!(low = range.low, high = range.high, "payload range changed");
                self.state.payload_range = range;
                self.emit(ChartSlot::PayloadScatter, sink);
            }
        }
    }

    /// Derive every chart from the current state, e.g. for the first
    /// render after startup.
    pub fn refresh_all(&self, sink: &mut impl ChartSink) {
        self.emit(ChartSlot::SuccessPie, sink);
        self.emit(ChartSlot::PayloadScatter, sink);
    }

    fn emit(&self, slot: ChartSlot, sink: &mut impl ChartSink) {
        let query = DashboardQuery::new(self.dataset);
        let spec = match slot {
            ChartSlot::SuccessPie => query.success_ratio_spec(&self.state.selected_site),
            ChartSlot::PayloadScatter => {
                query.payload_outcome_spec(&self.state.selected_site, self.state.payload_range)
            }
        };
        sink.apply(ChartUpdate { slot, spec });
    }
}

#[cfg(test)]
mod tests {
    use launchboard_types::{ChartSpec, ALL_SITES};

    use super::*;
    use crate::dataset::{LaunchDataset, LaunchRecord};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "SiteA".to_string(),
                payload_mass_kg: Some(500.0),
                outcome: 1,
            },
            LaunchRecord {
                site: "SiteA".to_string(),
                payload_mass_kg: Some(2000.0),
                outcome: 0,
            },
            LaunchRecord {
                site: "SiteB".to_string(),
                payload_mass_kg: Some(1500.0),
                outcome: 1,
            },
        ])
    }

    #[test]
    fn initial_state_covers_the_full_range() {
        let dataset = dataset();
        let dispatcher = Dispatcher::new(&dataset);

        assert_eq!(dispatcher.state().selected_site, ALL_SITES);
        assert_eq!(dispatcher.state().payload_range.low, 500.0);
        assert_eq!(dispatcher.state().payload_range.high, 2000.0);
    }

    #[test]
    fn site_selection_updates_both_slots_in_order() {
        let dataset = dataset();
        let mut dispatcher = Dispatcher::new(&dataset);
        let mut updates: Vec<ChartUpdate> = Vec::new();

        dispatcher.dispatch(WidgetEvent::SiteSelected("SiteA".to_string()), &mut updates);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].slot, ChartSlot::SuccessPie);
        assert_eq!(updates[1].slot, ChartSlot::PayloadScatter);
        assert_eq!(updates[0].spec.title(), "Success vs Failure for SiteA");
    }

    #[test]
    fn range_change_updates_only_the_scatter_slot() {
        let dataset = dataset();
        let mut dispatcher = Dispatcher::new(&dataset);
        let mut updates: Vec<ChartUpdate> = Vec::new();

        dispatcher.dispatch(
            WidgetEvent::PayloadRangeChanged(PayloadRange::new(0.0, 1600.0)),
            &mut updates,
        );

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].slot, ChartSlot::PayloadScatter);
        assert_eq!(updates[0].spec.len(), 2);
    }

    #[test]
    fn state_persists_across_events() {
        let dataset = dataset();
        let mut dispatcher = Dispatcher::new(&dataset);
        let mut updates: Vec<ChartUpdate> = Vec::new();

        dispatcher.dispatch(WidgetEvent::SiteSelected("SiteA".to_string()), &mut updates);
        updates.clear();
        // The range change must still see SiteA selected.
        dispatcher.dispatch(
            WidgetEvent::PayloadRangeChanged(PayloadRange::new(0.0, 1000.0)),
            &mut updates,
        );

        let ChartSpec::Scatter(scatter) = &updates[0].spec else {
            panic!("expected a scatter spec");
        };
        assert_eq!(scatter.title, "Payload Mass vs. Launch Success for SiteA");
        assert_eq!(scatter.points.len(), 1);
        assert_eq!(scatter.points[0].payload_mass_kg, 500.0);
    }

    #[test]
    fn refresh_all_emits_every_slot_from_current_state() {
        let dataset = dataset();
        let dispatcher = Dispatcher::new(&dataset);
        let mut updates: Vec<ChartUpdate> = Vec::new();

        dispatcher.refresh_all(&mut updates);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].spec.title(), "Total Launch Success Count");
        // Full default range: every row with a defined payload.
        assert_eq!(updates[1].spec.len(), 3);
    }
}
