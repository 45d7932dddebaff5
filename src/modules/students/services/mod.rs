pub mod student_aggregator;

pub use student_aggregator::StudentAggregator;
