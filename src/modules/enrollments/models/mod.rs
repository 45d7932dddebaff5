pub mod enrollment;
pub mod payment_info;

pub use enrollment::Enrollment;
pub use payment_info::{EnrichedEnrollment, EnrollmentStatistics, PaymentInfo};
