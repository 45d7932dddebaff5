use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::enrollments::models::Enrollment;
use crate::modules::enrollments::services::PaymentInfoCalculator;
use crate::modules::payments::models::{OnlinePayment, Payment, PaymentStatus};
use crate::modules::payments::services::PaymentLedger;
use crate::modules::students::models::{
    EnrollmentSummary, PaymentBreakdown, StudentAggregate, StudentPayment, StudentStatistics,
};

/// Groups enrollments and merged payments into per-student aggregates.
///
/// Students appear in first-seen order of their enrollments; payment lists
/// keep the merged ledger order. A merged payment whose student has no
/// enrollment is not attached anywhere.
pub struct StudentAggregator;

impl StudentAggregator {
    /// Aggregate every enrolled student.
    pub fn aggregate_all(
        enrollments: &[Enrollment],
        offline: &[Payment],
        online: &[OnlinePayment],
    ) -> Vec<StudentAggregate> {
        let ledger = PaymentLedger::merged(enrollments, offline, online);

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut students: Vec<StudentAggregate> = Vec::new();

        for enrollment in enrollments {
            let idx = match index.get(&enrollment.student_id) {
                Some(&idx) => idx,
                None => {
                    students.push(StudentAggregate::shell(enrollment));
                    index.insert(enrollment.student_id.clone(), students.len() - 1);
                    students.len() - 1
                }
            };
            students[idx].enrollments.push(EnrollmentSummary::from(enrollment));
        }

        for payment in &ledger {
            if let Some(&idx) = index.get(&payment.student_id) {
                students[idx].payments.push(StudentPayment::from(payment));
            }
        }

        for student in &mut students {
            student.statistics =
                Self::statistics(&student.enrollments, &student.payments, false);
        }

        info!(count = students.len(), "Aggregated enrolled students");
        students
    }

    /// Aggregate a single student, including the per-enrollment breakdown.
    ///
    /// A student id no enrollment references is a not-found error rather than
    /// an empty aggregate.
    pub fn aggregate_one(
        student_id: &str,
        enrollments: &[Enrollment],
        offline: &[Payment],
        online: &[OnlinePayment],
    ) -> Result<StudentAggregate> {
        let student_enrollments: Vec<&Enrollment> = enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .collect();

        let first = student_enrollments
            .first()
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let mut student = StudentAggregate::shell(first);
        student.enrollments = student_enrollments
            .iter()
            .map(|e| EnrollmentSummary::from(*e))
            .collect();
        student.payments =
            PaymentLedger::payments_for_student(student_id, enrollments, offline, online)
                .iter()
                .map(StudentPayment::from)
                .collect();
        student.statistics = Self::statistics(&student.enrollments, &student.payments, true);

        Ok(student)
    }

    /// Fold per-enrollment figures into the student totals.
    fn statistics(
        enrollments: &[EnrollmentSummary],
        payments: &[StudentPayment],
        with_breakdown: bool,
    ) -> StudentStatistics {
        let mut stats = StudentStatistics {
            total_enrollments: enrollments.len(),
            ..StudentStatistics::default()
        };

        for enrollment in enrollments {
            stats.total_course_fees += enrollment.course_fees;

            let total_paid: Decimal = payments
                .iter()
                .filter(|p| p.enrollment_id == enrollment.id)
                .map(|p| p.amount)
                .sum();
            let remaining = (enrollment.course_fees - total_paid).max(Decimal::ZERO);

            stats.total_paid += total_paid;
            stats.total_remaining += remaining;

            if with_breakdown {
                // selected_installments is already normalized to >= 1
                let per_installment_amount =
                    enrollment.course_fees / Decimal::from(enrollment.selected_installments);
                let completed_installments = if per_installment_amount > Decimal::ZERO {
                    (total_paid / per_installment_amount)
                        .floor()
                        .to_u32()
                        .unwrap_or(0)
                } else {
                    0
                };

                stats.payment_breakdown.push(PaymentBreakdown {
                    course_id: enrollment.course_id.clone(),
                    course_name: enrollment.course_name.clone(),
                    course_fees: enrollment.course_fees,
                    total_installments: enrollment.selected_installments,
                    completed_installments,
                    current_installment: completed_installments + 1,
                    per_installment_amount,
                    total_paid,
                    remaining,
                    payment_percentage: PaymentInfoCalculator::percentage(
                        total_paid,
                        enrollment.course_fees,
                    ),
                });
            }
        }

        stats.completed_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed)
            .count();
        stats.pending_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending)
            .count();
        stats.failed_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Failed)
            .count();
        stats.refunded_payments = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Refunded)
            .count();

        stats
    }
}
