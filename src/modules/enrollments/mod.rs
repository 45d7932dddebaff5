// Enrollments module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{EnrichedEnrollment, Enrollment, EnrollmentStatistics, PaymentInfo};
pub use services::{EnrollmentStatsCalculator, PaymentInfoCalculator};
