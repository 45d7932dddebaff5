use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{LedgerStore, Result};
use crate::modules::enrollments::models::{EnrichedEnrollment, Enrollment, EnrollmentStatistics};
use crate::modules::enrollments::services::{EnrollmentStatsCalculator, PaymentInfoCalculator};

/// Query parameters for the enrollment listing
///
/// Filters combine with AND; absent parameters impose no filter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentQuery {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
}

/// Response structure for the enrollment listing
#[derive(Debug, Serialize)]
pub struct EnrollmentsResponse {
    pub success: bool,
    pub count: usize,
    pub statistics: EnrollmentStatistics,
    pub data: Vec<EnrichedEnrollment>,
}

/// GET /api/enrollments
///
/// Lists enrollments (optionally filtered by student and/or course), each
/// enriched with its derived payment statistics, plus listing-wide counters.
pub async fn get_enrollments(
    store: web::Data<dyn LedgerStore>,
    query: web::Query<EnrollmentQuery>,
) -> HttpResponse {
    match handle_get_enrollments(store, query).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to fetch enrollments: {}", e);
            e.envelope("Failed to fetch enrollments")
        }
    }
}

async fn handle_get_enrollments(
    store: web::Data<dyn LedgerStore>,
    query: web::Query<EnrollmentQuery>,
) -> Result<EnrollmentsResponse> {
    let enrollments = store.list_enrollments().await?;
    let payments = store.list_payments().await?;

    let filtered: Vec<Enrollment> = enrollments
        .into_iter()
        .filter(|e| {
            query
                .student_id
                .as_deref()
                .map_or(true, |s| e.student_id == s)
        })
        .filter(|e| query.course_id.as_deref().map_or(true, |c| e.course_id == c))
        .collect();

    let enriched: Vec<EnrichedEnrollment> = filtered
        .iter()
        .map(|e| PaymentInfoCalculator::enrich(e, &payments))
        .collect();

    let statistics = EnrollmentStatsCalculator::compute(&enriched);

    Ok(EnrollmentsResponse {
        success: true,
        count: enriched.len(),
        statistics,
        data: enriched,
    })
}

/// Configure routes for the enrollments module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/enrollments").route("", web::get().to(get_enrollments)));
}
