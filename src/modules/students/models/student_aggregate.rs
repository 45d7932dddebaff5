use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{Payment, PaymentStatus};

/// Enrollment projected to the stable subset shown under a student
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentSummary {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub course_fees: Decimal,
    /// Normalized to at least 1
    pub selected_installments: u32,
    pub enrollment_date: NaiveDate,
}

impl From<&Enrollment> for EnrollmentSummary {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id.clone(),
            course_id: enrollment.course_id.clone(),
            course_name: enrollment.course_name.clone(),
            course_fees: enrollment.course_fees,
            selected_installments: enrollment.installment_count(),
            enrollment_date: enrollment.enrollment_date,
        }
    }
}

/// Ledger record projected to the stable subset shown under a student
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayment {
    pub id: String,
    pub enrollment_id: String,
    pub course_id: String,
    pub course_name: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub status: PaymentStatus,
    pub notes: String,
    pub receipt_id: String,
}

impl From<&Payment> for StudentPayment {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.clone(),
            enrollment_id: payment.enrollment_id.clone(),
            course_id: payment.course_id.clone(),
            course_name: payment.course_name.clone(),
            amount: payment.amount,
            payment_date: payment.payment_date,
            payment_method: payment.payment_method.clone(),
            status: payment.status,
            notes: payment.notes.clone(),
            receipt_id: payment.receipt_id.clone(),
        }
    }
}

/// Installment progress for one of a student's enrollments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub course_id: String,
    pub course_name: String,
    pub course_fees: Decimal,
    pub total_installments: u32,
    pub completed_installments: u32,
    pub current_installment: u32,
    pub per_installment_amount: Decimal,
    pub total_paid: Decimal,
    pub remaining: Decimal,
    pub payment_percentage: i64,
}

/// Rolled-up totals across all of a student's enrollments
///
/// The breakdown is populated only by the single-student lookup; the listing
/// endpoint leaves it empty and it is skipped on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatistics {
    pub total_enrollments: usize,
    pub total_course_fees: Decimal,
    pub total_paid: Decimal,
    pub total_remaining: Decimal,
    pub completed_payments: usize,
    pub pending_payments: usize,
    pub failed_payments: usize,
    pub refunded_payments: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub payment_breakdown: Vec<PaymentBreakdown>,
}

/// One student with their enrollments, payments, and rolled-up statistics
///
/// Identity fields come from the student's first enrollment in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAggregate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enrollments: Vec<EnrollmentSummary>,
    pub payments: Vec<StudentPayment>,
    pub statistics: StudentStatistics,
}

impl StudentAggregate {
    /// Empty aggregate carrying only the identity taken from an enrollment.
    pub fn shell(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.student_id.clone(),
            name: enrollment.student_name.clone(),
            email: enrollment.student_email.clone(),
            phone: enrollment.student_phone.clone(),
            enrollments: Vec::new(),
            payments: Vec::new(),
            statistics: StudentStatistics::default(),
        }
    }
}
