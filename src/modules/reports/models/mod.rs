pub mod overview;

pub use overview::{
    EnrollmentStatusCounts, FinancialTotals, OverviewCounts, OverviewReport, PaymentMethodCounts,
    TopCourse, TopStudent,
};
