pub mod overview_service;

pub use overview_service::OverviewCalculator;
