pub mod enrollment_stats;
pub mod payment_info;

pub use enrollment_stats::EnrollmentStatsCalculator;
pub use payment_info::PaymentInfoCalculator;
