use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::modules::enrollments::models::{EnrichedEnrollment, EnrollmentStatistics};

/// Rolls enriched enrollments up into listing-wide counters.
pub struct EnrollmentStatsCalculator;

impl EnrollmentStatsCalculator {
    /// Aggregate counters over an already-filtered enrollment listing.
    ///
    /// The average percentage uses 1 as the divisor floor so an empty listing
    /// reports zero instead of dividing by zero.
    pub fn compute(enriched: &[EnrichedEnrollment]) -> EnrollmentStatistics {
        let total_course_fees: Decimal = enriched
            .iter()
            .map(|e| e.enrollment.course_fees)
            .sum();
        let total_paid: Decimal = enriched.iter().map(|e| e.payment_info.total_paid).sum();
        let total_remaining: Decimal = enriched.iter().map(|e| e.payment_info.remaining).sum();

        let percentage_sum: i64 = enriched
            .iter()
            .map(|e| e.payment_info.payment_percentage)
            .sum();
        let divisor = enriched.len().max(1);
        let average_payment_percentage = (Decimal::from(percentage_sum)
            / Decimal::from(divisor as u64))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);

        EnrollmentStatistics {
            total_enrollments: enriched.len(),
            total_course_fees,
            total_paid,
            total_remaining,
            average_payment_percentage,
            fully_paid: enriched
                .iter()
                .filter(|e| e.payment_info.remaining.is_zero())
                .count(),
            partially_paid: enriched
                .iter()
                .filter(|e| {
                    e.payment_info.total_paid > Decimal::ZERO
                        && e.payment_info.remaining > Decimal::ZERO
                })
                .count(),
            not_paid: enriched
                .iter()
                .filter(|e| e.payment_info.total_paid.is_zero())
                .count(),
        }
    }
}
