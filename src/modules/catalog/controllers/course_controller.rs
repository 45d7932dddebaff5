use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::{LedgerStore, Result};
use crate::modules::catalog::models::Course;

/// Query parameters for the course catalog listing
#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    /// Include inactive courses
    #[serde(default)]
    pub all: bool,
}

/// Response structure for the course catalog
#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Course>,
}

/// GET /api/courses
///
/// Active catalog entries; `?all=true` includes retired courses.
pub async fn get_courses(
    store: web::Data<dyn LedgerStore>,
    query: web::Query<CourseQuery>,
) -> HttpResponse {
    match handle_get_courses(store, query).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to fetch courses: {}", e);
            e.envelope("Failed to fetch courses")
        }
    }
}

async fn handle_get_courses(
    store: web::Data<dyn LedgerStore>,
    query: web::Query<CourseQuery>,
) -> Result<CoursesResponse> {
    let courses: Vec<Course> = store
        .list_courses()
        .await?
        .into_iter()
        .filter(|c| query.all || c.active)
        .collect();

    Ok(CoursesResponse {
        success: true,
        count: courses.len(),
        data: courses,
    })
}

/// Configure routes for the catalog module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/courses").route("", web::get().to(get_courses)));
}
