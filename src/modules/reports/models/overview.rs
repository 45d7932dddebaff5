use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::payments::models::StatusCounts;

/// Headline entity counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCounts {
    pub total_students: usize,
    pub total_enrollments: usize,
    pub total_courses: usize,
    pub total_payments: usize,
}

/// Money totals, split by payment status where it matters
///
/// Unlike the per-enrollment enrichment, `total_paid` here counts completed
/// payments only; the other buckets carry their own sums.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    pub total_course_fees: Decimal,
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub total_failed: Decimal,
    pub total_refunded: Decimal,
}

/// Ledger counts per payment method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodCounts {
    pub online: usize,
    pub offline: usize,
    pub bank_transfer: usize,
    pub credit_card: usize,
    pub upi: usize,
    pub other: usize,
}

/// Enrollment settlement buckets, judged on completed payments only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatusCounts {
    pub fully_paid: usize,
    pub partially_paid: usize,
    pub not_paid: usize,
}

/// Leaderboard entry: a student by completed payment volume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStudent {
    pub student_id: String,
    pub student_name: String,
    pub total_paid: Decimal,
    pub payment_count: usize,
}

/// Leaderboard entry: a course by enrollment count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCourse {
    pub course_id: String,
    pub course_name: String,
    pub enrollment_count: usize,
    pub total_fees: Decimal,
    pub total_paid: Decimal,
    pub payment_percentage: i64,
}

/// Admin dashboard report over the whole ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewReport {
    pub overview: OverviewCounts,
    pub financial: FinancialTotals,
    pub payment_status: StatusCounts,
    pub payment_methods: PaymentMethodCounts,
    pub enrollment_status: EnrollmentStatusCounts,
    pub top_students: Vec<TopStudent>,
    pub top_courses: Vec<TopCourse>,
    pub collection_rate: i64,
    pub generated_at: String,
}
