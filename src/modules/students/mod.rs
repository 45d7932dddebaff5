// Students module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{StudentAggregate, StudentStatistics};
pub use services::StudentAggregator;
