// Reports module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::OverviewReport;
pub use services::OverviewCalculator;
