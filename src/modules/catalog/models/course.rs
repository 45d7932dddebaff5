use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Immutable course catalog entry
///
/// Enrollments copy `price` into their own `course_fees` at enrollment time,
/// so later catalog edits never change what a student owes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub max_installments: u32,
    pub active: bool,
}
