use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::modules::enrollments::models::{EnrichedEnrollment, Enrollment, PaymentInfo};
use crate::modules::payments::models::{Payment, StatusCounts};

/// Computes per-enrollment payment statistics from the full ledger.
///
/// Pure and deterministic: the same enrollment and ledger always produce the
/// same `PaymentInfo`. Payments are selected by `enrollment_id` equality and
/// summed regardless of status.
pub struct PaymentInfoCalculator;

impl PaymentInfoCalculator {
    /// Derive the payment statistics for one enrollment.
    ///
    /// Zero matching payments yield a zeroed record with `remaining` equal to
    /// the full fees. A zero-fee enrollment reports zero percentage and zero
    /// completed installments instead of dividing by zero.
    pub fn compute(enrollment: &Enrollment, ledger: &[Payment]) -> PaymentInfo {
        let matching: Vec<&Payment> = ledger
            .iter()
            .filter(|p| p.enrollment_id == enrollment.id)
            .collect();

        let total_paid: Decimal = matching.iter().map(|p| p.amount).sum();
        let remaining = (enrollment.course_fees - total_paid).max(Decimal::ZERO);

        let total_installments = enrollment.installment_count();
        let installment_amount = enrollment.course_fees / Decimal::from(total_installments);

        let completed_installments = if installment_amount > Decimal::ZERO {
            (total_paid / installment_amount)
                .floor()
                .to_u32()
                .unwrap_or(0)
        } else {
            0
        };

        PaymentInfo {
            total_paid,
            remaining,
            payment_percentage: Self::percentage(total_paid, enrollment.course_fees),
            installment_amount,
            completed_installments,
            current_installment: completed_installments + 1,
            total_installments,
            payment_count: matching.len(),
            payments_by_status: StatusCounts::tally(matching.iter().copied()),
        }
    }

    /// Enrollment plus its derived statistics, ready for serialization.
    pub fn enrich(enrollment: &Enrollment, ledger: &[Payment]) -> EnrichedEnrollment {
        EnrichedEnrollment {
            payment_info: Self::compute(enrollment, ledger),
            enrollment: enrollment.clone(),
        }
    }

    /// Rounded percentage of `paid` against `fees`.
    ///
    /// Not clamped: overpayment reports more than 100. Non-positive fees
    /// report zero.
    pub fn percentage(paid: Decimal, fees: Decimal) -> i64 {
        if fees <= Decimal::ZERO {
            return 0;
        }

        (paid * Decimal::from(100) / fees)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
    }
}
