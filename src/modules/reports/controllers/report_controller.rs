use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::core::{LedgerStore, Result};
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::Payment;
use crate::modules::reports::models::OverviewReport;
use crate::modules::reports::services::OverviewCalculator;
use crate::store::sample_data;

/// Response structure for the dashboard statistics endpoint
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub data: OverviewReport,
}

/// One student of the demo dataset with their enrollments inlined
#[derive(Debug, Serialize)]
pub struct SampleStudent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enrollments: Vec<Enrollment>,
}

/// Response structure for the demo dataset endpoint
#[derive(Debug, Serialize)]
pub struct SampleDataResponse {
    pub students: Vec<SampleStudent>,
    pub payments: Vec<Payment>,
}

/// GET /api/statistics
///
/// Comprehensive dashboard report over the merged payment ledger.
pub async fn get_statistics(store: web::Data<dyn LedgerStore>) -> HttpResponse {
    match handle_get_statistics(store).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to fetch statistics: {}", e);
            e.envelope("Failed to fetch statistics")
        }
    }
}

async fn handle_get_statistics(store: web::Data<dyn LedgerStore>) -> Result<StatisticsResponse> {
    let enrollments = store.list_enrollments().await?;
    let offline = store.list_payments().await?;
    let online = store.list_online_payments().await?;

    Ok(StatisticsResponse {
        success: true,
        data: OverviewCalculator::compute(&enrollments, &offline, &online),
    })
}

/// GET /api/sample-data
///
/// The static demo dataset, grouped by student. Serves the same fixtures the
/// memory store seeds with, regardless of the configured backend.
pub async fn get_sample_data() -> HttpResponse {
    HttpResponse::Ok().json(SampleDataResponse {
        students: group_sample_students(),
        payments: sample_data::payments(),
    })
}

fn group_sample_students() -> Vec<SampleStudent> {
    let mut students: Vec<SampleStudent> = Vec::new();

    for enrollment in sample_data::enrollments() {
        match students.iter_mut().find(|s| s.id == enrollment.student_id) {
            Some(student) => student.enrollments.push(enrollment),
            None => students.push(SampleStudent {
                id: enrollment.student_id.clone(),
                name: enrollment.student_name.clone(),
                email: enrollment.student_email.clone(),
                phone: enrollment.student_phone.clone(),
                enrollments: vec![enrollment],
            }),
        }
    }

    students
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/statistics", web::get().to(get_statistics))
        .route("/sample-data", web::get().to(get_sample_data));
}
