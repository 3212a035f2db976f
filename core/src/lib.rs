pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod query;
pub mod sites;

// Re-exports for convenience
pub use config::DashboardSettings;
pub use dataset::{LaunchDataset, LaunchRecord};
pub use dispatch::{ChartSink, Dispatcher, WidgetEvent};
pub use error::LoadError;
pub use layout::build_layout;
pub use query::DashboardQuery;
