//! Unit tests for the student aggregation pipeline: grouping order, online
//! payment normalization, and the per-student rollups.

use chrono::NaiveDate;
use enrollpay::modules::enrollments::models::Enrollment;
use enrollpay::modules::payments::models::{OnlinePayment, OnlineStatus, Payment, PaymentStatus};
use enrollpay::modules::payments::services::PaymentLedger;
use enrollpay::modules::students::services::StudentAggregator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn enrollment(id: &str, student_id: &str, course_id: &str, fees: Decimal, installments: u32) -> Enrollment {
    Enrollment {
        id: id.to_string(),
        student_id: student_id.to_string(),
        student_name: format!("Student {}", student_id),
        student_email: format!("{}@example.com", student_id.to_lowercase()),
        student_phone: "9876543210".to_string(),
        course_id: course_id.to_string(),
        course_name: format!("Course {}", course_id),
        course_fees: fees,
        selected_installments: installments,
        enrollment_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
    }
}

fn offline(id: &str, enrollment_id: &str, student_id: &str, amount: Decimal, status: PaymentStatus) -> Payment {
    Payment {
        id: id.to_string(),
        receipt_id: format!("REC-{}", id),
        student_id: student_id.to_string(),
        student_name: format!("Student {}", student_id),
        enrollment_id: enrollment_id.to_string(),
        course_id: "C-1".to_string(),
        course_name: "Course C-1".to_string(),
        amount,
        payment_date: NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
        payment_method: "Bank Transfer".to_string(),
        status,
        notes: String::new(),
    }
}

fn online(id: &str, enrollment_id: &str, amount: Decimal, status: OnlineStatus) -> OnlinePayment {
    OnlinePayment {
        id: id.to_string(),
        enrollment_id: enrollment_id.to_string(),
        installment_no: 1,
        amount,
        paid_at: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
        method: None,
        txn_ref: format!("TXN-{}", id),
        status,
        receipt_id: None,
    }
}

#[test]
fn test_grouping_follows_first_seen_enrollment_order() {
    let enrollments = vec![
        enrollment("ENR-1", "STU-B", "C-1", dec!(1000), 2),
        enrollment("ENR-2", "STU-A", "C-1", dec!(1000), 2),
        enrollment("ENR-3", "STU-B", "C-2", dec!(2000), 2),
        enrollment("ENR-4", "STU-C", "C-1", dec!(1000), 2),
    ];

    let students = StudentAggregator::aggregate_all(&enrollments, &[], &[]);

    let ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["STU-B", "STU-A", "STU-C"]);
    assert_eq!(students[0].enrollments.len(), 2);
    assert_eq!(students[0].statistics.total_course_fees, dec!(3000));
}

#[test]
fn test_online_success_normalized_to_completed_in_output() {
    let enrollments = vec![enrollment("ENR-1", "STU-1", "C-1", dec!(1000), 2)];
    let online_payments = vec![online("OPAY-1", "ENR-1", dec!(500), OnlineStatus::Success)];

    let students = StudentAggregator::aggregate_all(&enrollments, &[], &online_payments);

    assert_eq!(students[0].payments.len(), 1);
    assert_eq!(students[0].payments[0].status, PaymentStatus::Completed);
    assert_eq!(students[0].payments[0].receipt_id, "RCP-OPAY-1");
    assert_eq!(students[0].statistics.completed_payments, 1);
}

#[test]
fn test_payments_for_student_is_offline_then_online() {
    let enrollments = vec![
        enrollment("ENR-1", "STU-1", "C-1", dec!(1000), 2),
        enrollment("ENR-2", "STU-2", "C-1", dec!(1000), 2),
    ];
    let offline_payments = vec![
        offline("PAY-1", "ENR-1", "STU-1", dec!(100), PaymentStatus::Completed),
        offline("PAY-2", "ENR-2", "STU-2", dec!(100), PaymentStatus::Completed),
        offline("PAY-3", "ENR-1", "STU-1", dec!(100), PaymentStatus::Pending),
    ];
    let online_payments = vec![
        online("OPAY-1", "ENR-2", dec!(200), OnlineStatus::Success),
        online("OPAY-2", "ENR-1", dec!(200), OnlineStatus::Pending),
    ];

    let payments = PaymentLedger::payments_for_student(
        "STU-1",
        &enrollments,
        &offline_payments,
        &online_payments,
    );

    let ids: Vec<&str> = payments.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["PAY-1", "PAY-3", "OPAY-2"]);
    assert_eq!(payments[2].status, PaymentStatus::Pending);
}

#[test]
fn test_unresolvable_online_payment_never_surfaces() {
    let enrollments = vec![enrollment("ENR-1", "STU-1", "C-1", dec!(1000), 2)];
    let online_payments = vec![online("OPAY-1", "ENR-404", dec!(500), OnlineStatus::Success)];

    let students = StudentAggregator::aggregate_all(&enrollments, &[], &online_payments);

    assert!(students[0].payments.is_empty());
    assert_eq!(students[0].statistics.total_paid, Decimal::ZERO);
}

#[test]
fn test_detail_rollup_spans_enrollments() {
    let enrollments = vec![
        enrollment("ENR-1", "STU-1", "C-1", dec!(1000), 4),
        enrollment("ENR-2", "STU-1", "C-2", dec!(2000), 2),
    ];
    let offline_payments = vec![
        offline("PAY-1", "ENR-1", "STU-1", dec!(600), PaymentStatus::Completed),
        offline("PAY-2", "ENR-2", "STU-1", dec!(2000), PaymentStatus::Completed),
    ];

    let student =
        StudentAggregator::aggregate_one("STU-1", &enrollments, &offline_payments, &[]).unwrap();

    assert_eq!(student.statistics.total_enrollments, 2);
    assert_eq!(student.statistics.total_course_fees, dec!(3000));
    assert_eq!(student.statistics.total_paid, dec!(2600));
    assert_eq!(student.statistics.total_remaining, dec!(400));
    assert_eq!(student.statistics.payment_breakdown.len(), 2);

    let first = &student.statistics.payment_breakdown[0];
    assert_eq!(first.completed_installments, 2);
    assert_eq!(first.current_installment, 3);

    let second = &student.statistics.payment_breakdown[1];
    assert_eq!(second.remaining, Decimal::ZERO);
    assert_eq!(second.payment_percentage, 100);
}

#[test]
fn test_unknown_student_is_an_error_not_an_empty_aggregate() {
    let enrollments = vec![enrollment("ENR-1", "STU-1", "C-1", dec!(1000), 2)];

    assert!(StudentAggregator::aggregate_one("STU-2", &enrollments, &[], &[]).is_err());
}
