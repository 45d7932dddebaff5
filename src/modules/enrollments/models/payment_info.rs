use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::StatusCounts;

/// Derived payment statistics for one enrollment
///
/// `total_paid` sums every payment attached to the enrollment regardless of
/// status, and `payment_percentage` is not clamped at 100; both mirror the
/// recorded behavior of the ledger this service replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub total_paid: Decimal,
    /// Outstanding balance, clamped at zero
    pub remaining: Decimal,
    pub payment_percentage: i64,
    pub installment_amount: Decimal,
    pub completed_installments: u32,
    pub current_installment: u32,
    pub total_installments: u32,
    pub payment_count: usize,
    pub payments_by_status: StatusCounts,
}

/// Enrollment together with its derived payment statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEnrollment {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub payment_info: PaymentInfo,
}

/// Aggregate counters over a (possibly filtered) enrollment listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatistics {
    pub total_enrollments: usize,
    pub total_course_fees: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
    pub average_payment_percentage: i64,
    /// Enrollments with no outstanding balance
    pub fully_paid: usize,
    /// Enrollments with some but not all fees paid
    pub partially_paid: usize,
    /// Enrollments with no payments counted at all
    pub not_paid: usize,
}
