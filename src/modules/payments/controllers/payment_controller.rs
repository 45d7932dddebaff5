use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{AppError, LedgerStore, Result};
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{AmountsByStatus, Payment, PaymentStatus, StatusCounts};

/// Query parameters for the offline payment listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub enrollment_id: Option<String>,
}

/// Ledger record with the enrollment it settles attached
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWithEnrollment {
    #[serde(flatten)]
    pub payment: Payment,
    pub enrollment_details: Option<Enrollment>,
}

/// Counters over the filtered payment listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCollectionStatistics {
    pub total_payments: usize,
    pub total_amount: Decimal,
    pub by_status: StatusCounts,
    pub amount_by_status: AmountsByStatus,
}

/// Response structure for the payment listing
#[derive(Debug, Serialize)]
pub struct PaymentsResponse {
    pub success: bool,
    pub count: usize,
    pub statistics: PaymentCollectionStatistics,
    pub data: Vec<PaymentWithEnrollment>,
}

/// GET /api/payments
///
/// Lists offline payments filtered by student, status, and/or enrollment,
/// with per-status counters and the owning enrollment attached to each row.
pub async fn get_payments(
    store: web::Data<dyn LedgerStore>,
    query: web::Query<PaymentQuery>,
) -> HttpResponse {
    match handle_get_payments(store, query).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to fetch payments: {}", e);
            e.envelope("Failed to fetch payments")
        }
    }
}

async fn handle_get_payments(
    store: web::Data<dyn LedgerStore>,
    query: web::Query<PaymentQuery>,
) -> Result<PaymentsResponse> {
    // Reject unknown status values at the boundary instead of silently
    // matching nothing
    let status_filter = query
        .status
        .as_deref()
        .map(|s| s.parse::<PaymentStatus>())
        .transpose()
        .map_err(AppError::validation)?;

    let payments = store.list_payments().await?;
    let enrollments = store.list_enrollments().await?;

    let filtered: Vec<Payment> = payments
        .into_iter()
        .filter(|p| {
            query
                .student_id
                .as_deref()
                .map_or(true, |s| p.student_id == s)
        })
        .filter(|p| status_filter.map_or(true, |s| p.status == s))
        .filter(|p| {
            query
                .enrollment_id
                .as_deref()
                .map_or(true, |e| p.enrollment_id == e)
        })
        .collect();

    let statistics = PaymentCollectionStatistics {
        total_payments: filtered.len(),
        total_amount: filtered.iter().map(|p| p.amount).sum(),
        by_status: StatusCounts::tally(&filtered),
        amount_by_status: AmountsByStatus::tally(&filtered),
    };

    let count = filtered.len();
    let data: Vec<PaymentWithEnrollment> = filtered
        .into_iter()
        .map(|payment| {
            let enrollment_details = enrollments
                .iter()
                .find(|e| e.id == payment.enrollment_id)
                .cloned();
            PaymentWithEnrollment {
                payment,
                enrollment_details,
            }
        })
        .collect();

    Ok(PaymentsResponse {
        success: true,
        count,
        statistics,
        data,
    })
}

/// Configure routes for the payments module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payments").route("", web::get().to(get_payments)));
}
