//! Contract tests for GET /api/students and GET /api/students/{id} against
//! the sample dataset.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::{test, web, App};
use enrollpay::core::LedgerStore;
use enrollpay::modules::students;
use enrollpay::store::MemoryStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_store() -> Arc<dyn LedgerStore> {
    Arc::new(MemoryStore::with_sample_data())
}

async fn call(
    store: Arc<dyn LedgerStore>,
    uri: &str,
) -> (actix_web::http::StatusCode, serde_json::Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .service(web::scope("/api").configure(students::controllers::configure)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body_json(resp).await;
    (status, body)
}

fn decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

#[actix_web::test]
async fn test_listing_groups_in_first_seen_order() {
    let (status, body) = call(sample_store(), "/api/students").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(body["count"], serde_json::json!(4));

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["STU-1001", "STU-1002", "STU-1003", "STU-1004"]);
}

#[actix_web::test]
async fn test_listing_includes_normalized_online_payment() {
    let (_, body) = call(sample_store(), "/api/students").await;

    // The checkout payment belongs to Priya's Python enrollment
    let priya = &body["data"][1];
    assert_eq!(priya["id"], serde_json::json!("STU-1002"));

    let online: Vec<&serde_json::Value> = priya["payments"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["id"] == serde_json::json!("OPAY-1001"))
        .collect();

    assert_eq!(online.len(), 1);
    assert_eq!(online[0]["status"], serde_json::json!("completed"));
    assert_eq!(online[0]["paymentMethod"], serde_json::json!("online"));
    assert_eq!(online[0]["receiptId"], serde_json::json!("RCP-OPAY-1001"));
}

#[actix_web::test]
async fn test_listing_statistics_rollup() {
    let (_, body) = call(sample_store(), "/api/students").await;

    let priya = &body["data"][1]["statistics"];
    assert_eq!(priya["totalEnrollments"], serde_json::json!(1));
    assert_eq!(decimal(&priya["totalCourseFees"]), dec!(18000));
    // 6000 offline plus 6000 normalized online
    assert_eq!(decimal(&priya["totalPaid"]), dec!(12000));
    assert_eq!(decimal(&priya["totalRemaining"]), dec!(6000));
    assert_eq!(priya["completedPayments"], serde_json::json!(2));
    // The listing omits the per-enrollment breakdown
    assert!(priya.get("paymentBreakdown").is_none());
}

#[actix_web::test]
async fn test_detail_includes_installment_breakdown() {
    let (status, body) = call(sample_store(), "/api/students/STU-1002").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], serde_json::json!(true));

    let student = &body["data"];
    assert_eq!(student["name"], serde_json::json!("Priya Sharma"));
    assert_eq!(student["enrollments"].as_array().unwrap().len(), 1);
    assert_eq!(student["payments"].as_array().unwrap().len(), 2);

    let breakdown = &student["statistics"]["paymentBreakdown"][0];
    assert_eq!(decimal(&breakdown["perInstallmentAmount"]), dec!(6000));
    assert_eq!(breakdown["completedInstallments"], serde_json::json!(2));
    assert_eq!(breakdown["currentInstallment"], serde_json::json!(3));
    assert_eq!(decimal(&breakdown["remaining"]), dec!(6000));
    assert_eq!(breakdown["paymentPercentage"], serde_json::json!(67));
}

#[actix_web::test]
async fn test_unknown_student_is_404() {
    let (status, body) = call(sample_store(), "/api/students/STU-9999").await;

    assert_eq!(status, 404);
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(body["error"], serde_json::json!("Student not found"));
}

#[actix_web::test]
async fn test_blank_student_id_is_400() {
    let (status, body) = call(sample_store(), "/api/students/%20").await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(body["error"], serde_json::json!("Student ID is required"));
}
