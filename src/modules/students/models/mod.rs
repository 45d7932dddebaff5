pub mod student_aggregate;

pub use student_aggregate::{
    EnrollmentSummary, PaymentBreakdown, StudentAggregate, StudentPayment, StudentStatistics,
};
