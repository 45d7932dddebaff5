//! Contract tests for GET /api/enrollments: envelope shape, filtering, and
//! the enriched payment statistics.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::{test, web, App};
use chrono::NaiveDate;
use enrollpay::core::LedgerStore;
use enrollpay::modules::enrollments;
use enrollpay::modules::enrollments::models::Enrollment;
use enrollpay::modules::payments::models::{Payment, PaymentStatus};
use enrollpay::store::MemoryStore;
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

fn payment(id: &str, enrollment_id: &str, student_id: &str, amount: Decimal) -> Payment {
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
        payment_method: "UPI".to_string(),
        status: PaymentStatus::Completed,
        notes: String::new(),
    }
}

fn fixture_store() -> Arc<dyn LedgerStore> {
    Arc::new(MemoryStore::seeded(
        Vec::new(),
        vec![
            enrollment("ENR-1", "STU-1", "C-1", dec!(1000), 4),
            enrollment("ENR-2", "STU-1", "C-2", dec!(2000), 2),
            enrollment("ENR-3", "STU-2", "C-1", dec!(1000), 2),
        ],
        vec![
            payment("PAY-1", "ENR-1", "STU-1", dec!(250)),
            payment("PAY-2", "ENR-1", "STU-1", dec!(350)),
            payment("PAY-3", "ENR-3", "STU-2", dec!(1000)),
        ],
        Vec::new(),
    ))
}

async fn get_json(store: Arc<dyn LedgerStore>, uri: &str) -> serde_json::Value {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .service(web::scope("/api").configure(enrollments::controllers::configure)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    test::call_and_read_body_json(&app, req).await
}

fn decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

#[actix_web::test]
async fn test_listing_envelope_and_count() {
    let body = get_json(fixture_store(), "/api/enrollments").await;

    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(body["count"], serde_json::json!(3));
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["statistics"]["totalEnrollments"], serde_json::json!(3));
}

#[actix_web::test]
async fn test_student_filter_matches_count_and_rows() {
    let body = get_json(fixture_store(), "/api/enrollments?studentId=STU-1").await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(body["count"], serde_json::json!(2));
    assert_eq!(body["statistics"]["totalEnrollments"].as_u64().unwrap() as usize, data.len());
    for row in data {
        assert_eq!(row["studentId"], serde_json::json!("STU-1"));
    }
}

#[actix_web::test]
async fn test_filters_combine_with_and() {
    let body = get_json(
        fixture_store(),
        "/api/enrollments?studentId=STU-1&courseId=C-2",
    )
    .await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], serde_json::json!("ENR-2"));
}

#[actix_web::test]
async fn test_payment_info_worked_example() {
    let body = get_json(fixture_store(), "/api/enrollments?courseId=C-1&studentId=STU-1").await;

    let info = &body["data"][0]["paymentInfo"];
    assert_eq!(decimal(&info["totalPaid"]), dec!(600));
    assert_eq!(decimal(&info["remaining"]), dec!(400));
    assert_eq!(decimal(&info["installmentAmount"]), dec!(250));
    assert_eq!(info["completedInstallments"], serde_json::json!(2));
    assert_eq!(info["currentInstallment"], serde_json::json!(3));
    assert_eq!(info["totalInstallments"], serde_json::json!(4));
    assert_eq!(info["paymentPercentage"], serde_json::json!(60));
    assert_eq!(info["paymentCount"], serde_json::json!(2));
    assert_eq!(info["paymentsByStatus"]["completed"], serde_json::json!(2));
}

#[actix_web::test]
async fn test_statistics_buckets() {
    let body = get_json(fixture_store(), "/api/enrollments").await;

    let stats = &body["statistics"];
    assert_eq!(decimal(&stats["totalCourseFees"]), dec!(4000));
    assert_eq!(decimal(&stats["totalPaid"]), dec!(1600));
    assert_eq!(decimal(&stats["totalRemaining"]), dec!(2400));
    assert_eq!(stats["fullyPaid"], serde_json::json!(1));
    assert_eq!(stats["partiallyPaid"], serde_json::json!(1));
    assert_eq!(stats["notPaid"], serde_json::json!(1));
    // (60 + 0 + 100) / 3 rounds to 53
    assert_eq!(stats["averagePaymentPercentage"], serde_json::json!(53));
}

#[actix_web::test]
async fn test_repeated_requests_are_byte_identical() {
    let store = fixture_store();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .service(web::scope("/api").configure(enrollments::controllers::configure)),
    )
    .await;

    let first = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/api/enrollments").to_request(),
    )
    .await;
    let second = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/api/enrollments").to_request(),
    )
    .await;

    assert_eq!(first, second);
}
