use tracing::warn;

use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{OnlinePayment, Payment};

/// Merges offline-recorded and checkout-captured payments into one ledger.
///
/// Online records arrive in the checkout's own shape and have to be resolved
/// against the enrollment they reference before they can sit next to offline
/// records: the student/course identity is copied from the enrollment, the
/// status vocabulary is normalized, and missing method/receipt fields get
/// their defaults. An online payment whose enrollment cannot be resolved is
/// dropped from the ledger entirely.
pub struct PaymentLedger;

impl PaymentLedger {
    /// Normalize one online payment into a ledger record.
    ///
    /// Returns `None` when the referenced enrollment does not exist.
    pub fn normalize(online: &OnlinePayment, enrollments: &[Enrollment]) -> Option<Payment> {
        let enrollment = enrollments.iter().find(|e| e.id == online.enrollment_id)?;

        Some(Payment {
            id: online.id.clone(),
            receipt_id: online
                .receipt_id
                .clone()
                .unwrap_or_else(|| format!("RCP-{}", online.id)),
            student_id: enrollment.student_id.clone(),
            student_name: enrollment.student_name.clone(),
            enrollment_id: online.enrollment_id.clone(),
            course_id: enrollment.course_id.clone(),
            course_name: enrollment.course_name.clone(),
            amount: online.amount,
            payment_date: online.paid_at,
            payment_method: online
                .method
                .clone()
                .unwrap_or_else(|| "online".to_string()),
            status: online.status.normalized(),
            notes: String::new(),
        })
    }

    /// Full merged ledger: offline records first, then resolvable online
    /// records, each group in source order.
    pub fn merged(
        enrollments: &[Enrollment],
        offline: &[Payment],
        online: &[OnlinePayment],
    ) -> Vec<Payment> {
        let mut ledger = offline.to_vec();

        for payment in online {
            match Self::normalize(payment, enrollments) {
                Some(normalized) => ledger.push(normalized),
                None => warn!(
                    payment_id = %payment.id,
                    enrollment_id = %payment.enrollment_id,
                    "Dropping online payment referencing unknown enrollment"
                ),
            }
        }

        ledger
    }

    /// Merged ledger filtered down to a single student.
    pub fn payments_for_student(
        student_id: &str,
        enrollments: &[Enrollment],
        offline: &[Payment],
        online: &[OnlinePayment],
    ) -> Vec<Payment> {
        Self::merged(enrollments, offline, online)
            .into_iter()
            .filter(|p| p.student_id == student_id)
            .collect()
    }
}
