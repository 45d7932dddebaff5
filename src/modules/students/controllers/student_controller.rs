use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::core::{AppError, LedgerStore, Result};
use crate::modules::students::models::StudentAggregate;
use crate::modules::students::services::StudentAggregator;

/// Response structure for the student listing
#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<StudentAggregate>,
}

/// Response structure for a single student lookup
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub success: bool,
    pub data: StudentAggregate,
}

/// GET /api/students
///
/// Groups every enrollment by student and rolls up payment statistics across
/// offline and normalized online records.
pub async fn get_students(store: web::Data<dyn LedgerStore>) -> HttpResponse {
    match handle_get_students(store).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to fetch students: {}", e);
            e.envelope("Failed to fetch students")
        }
    }
}

async fn handle_get_students(store: web::Data<dyn LedgerStore>) -> Result<StudentsResponse> {
    let enrollments = store.list_enrollments().await?;
    let offline = store.list_payments().await?;
    let online = store.list_online_payments().await?;

    let students = StudentAggregator::aggregate_all(&enrollments, &offline, &online);

    Ok(StudentsResponse {
        success: true,
        count: students.len(),
        data: students,
    })
}

/// GET /api/students/{id}
///
/// Single-student aggregate with the per-enrollment installment breakdown.
/// Unknown ids are a 404; a blank id is a 400.
pub async fn get_student(
    store: web::Data<dyn LedgerStore>,
    path: web::Path<String>,
) -> HttpResponse {
    match handle_get_student(store, path.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to fetch student details: {}", e);
            e.envelope("Failed to fetch student details")
        }
    }
}

async fn handle_get_student(
    store: web::Data<dyn LedgerStore>,
    student_id: String,
) -> Result<StudentResponse> {
    if student_id.trim().is_empty() {
        return Err(AppError::validation("Student ID is required"));
    }

    let enrollments = store.list_enrollments().await?;
    let offline = store.list_payments().await?;
    let online = store.list_online_payments().await?;

    let student = StudentAggregator::aggregate_one(&student_id, &enrollments, &offline, &online)?;

    Ok(StudentResponse {
        success: true,
        data: student,
    })
}

/// Configure routes for the students module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .route("", web::get().to(get_students))
            .route("/{id}", web::get().to(get_student)),
    );
}
