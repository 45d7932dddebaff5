use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::info;

use crate::modules::enrollments::models::Enrollment;
use crate::modules::enrollments::services::PaymentInfoCalculator;
use crate::modules::payments::models::{
    AmountsByStatus, OnlinePayment, Payment, PaymentStatus, StatusCounts,
};
use crate::modules::payments::services::PaymentLedger;
use crate::modules::reports::models::{
    EnrollmentStatusCounts, FinancialTotals, OverviewCounts, OverviewReport, PaymentMethodCounts,
    TopCourse, TopStudent,
};

/// Builds the admin dashboard report from the merged ledger.
pub struct OverviewCalculator;

impl OverviewCalculator {
    /// Compute the full dashboard report.
    ///
    /// Settlement buckets and both leaderboards consider completed payments
    /// only; course totals are counted once per course.
    pub fn compute(
        enrollments: &[Enrollment],
        offline: &[Payment],
        online: &[OnlinePayment],
    ) -> OverviewReport {
        let ledger = PaymentLedger::merged(enrollments, offline, online);

        let students: HashSet<&str> = enrollments
            .iter()
            .map(|e| e.student_id.as_str())
            .collect();
        let courses: HashSet<&str> = enrollments.iter().map(|e| e.course_id.as_str()).collect();

        let amounts = AmountsByStatus::tally(&ledger);
        let financial = FinancialTotals {
            total_course_fees: enrollments.iter().map(|e| e.course_fees).sum(),
            total_paid: amounts.completed,
            total_pending: amounts.pending,
            total_failed: amounts.failed,
            total_refunded: amounts.refunded,
        };

        let report = OverviewReport {
            overview: OverviewCounts {
                total_students: students.len(),
                total_enrollments: enrollments.len(),
                total_courses: courses.len(),
                total_payments: ledger.len(),
            },
            payment_status: StatusCounts::tally(&ledger),
            payment_methods: Self::method_counts(&ledger),
            enrollment_status: Self::settlement_buckets(enrollments, &ledger),
            top_students: Self::top_students(&ledger),
            top_courses: Self::top_courses(enrollments, &ledger),
            collection_rate: PaymentInfoCalculator::percentage(
                financial.total_paid,
                financial.total_course_fees,
            ),
            financial,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };

        info!(
            students = report.overview.total_students,
            enrollments = report.overview.total_enrollments,
            payments = report.overview.total_payments,
            "Dashboard report generated"
        );

        report
    }

    fn method_counts(ledger: &[Payment]) -> PaymentMethodCounts {
        let mut counts = PaymentMethodCounts::default();
        for payment in ledger {
            match payment.payment_method.as_str() {
                "online" => counts.online += 1,
                "offline" => counts.offline += 1,
                "Bank Transfer" => counts.bank_transfer += 1,
                "Credit Card" => counts.credit_card += 1,
                "UPI" => counts.upi += 1,
                _ => counts.other += 1,
            }
        }
        counts
    }

    fn settlement_buckets(
        enrollments: &[Enrollment],
        ledger: &[Payment],
    ) -> EnrollmentStatusCounts {
        let mut buckets = EnrollmentStatusCounts::default();

        for enrollment in enrollments {
            let paid: Decimal = ledger
                .iter()
                .filter(|p| {
                    p.enrollment_id == enrollment.id && p.status == PaymentStatus::Completed
                })
                .map(|p| p.amount)
                .sum();

            if paid >= enrollment.course_fees {
                buckets.fully_paid += 1;
            } else if paid > Decimal::ZERO {
                buckets.partially_paid += 1;
            } else {
                buckets.not_paid += 1;
            }
        }

        buckets
    }

    fn top_students(ledger: &[Payment]) -> Vec<TopStudent> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut leaders: Vec<TopStudent> = Vec::new();

        for payment in ledger {
            if payment.status != PaymentStatus::Completed {
                continue;
            }
            let idx = match index.get(payment.student_id.as_str()) {
                Some(&idx) => idx,
                None => {
                    leaders.push(TopStudent {
                        student_id: payment.student_id.clone(),
                        student_name: payment.student_name.clone(),
                        total_paid: Decimal::ZERO,
                        payment_count: 0,
                    });
                    index.insert(payment.student_id.as_str(), leaders.len() - 1);
                    leaders.len() - 1
                }
            };
            leaders[idx].total_paid += payment.amount;
            leaders[idx].payment_count += 1;
        }

        leaders.sort_by(|a, b| b.total_paid.cmp(&a.total_paid));
        leaders.truncate(5);
        leaders
    }

    fn top_courses(enrollments: &[Enrollment], ledger: &[Payment]) -> Vec<TopCourse> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut courses: Vec<TopCourse> = Vec::new();

        for enrollment in enrollments {
            let idx = match index.get(enrollment.course_id.as_str()) {
                Some(&idx) => idx,
                None => {
                    let total_paid: Decimal = ledger
                        .iter()
                        .filter(|p| {
                            p.course_id == enrollment.course_id
                                && p.status == PaymentStatus::Completed
                        })
                        .map(|p| p.amount)
                        .sum();
                    courses.push(TopCourse {
                        course_id: enrollment.course_id.clone(),
                        course_name: enrollment.course_name.clone(),
                        enrollment_count: 0,
                        total_fees: Decimal::ZERO,
                        total_paid,
                        payment_percentage: 0,
                    });
                    index.insert(enrollment.course_id.as_str(), courses.len() - 1);
                    courses.len() - 1
                }
            };
            courses[idx].enrollment_count += 1;
            courses[idx].total_fees += enrollment.course_fees;
        }

        courses.sort_by(|a, b| b.enrollment_count.cmp(&a.enrollment_count));
        courses.truncate(5);

        for course in &mut courses {
            course.payment_percentage =
                PaymentInfoCalculator::percentage(course.total_paid, course.total_fees);
        }

        courses
    }
}
