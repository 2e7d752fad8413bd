pub mod service;

pub use service::{DashboardAggregator, DashboardView};
