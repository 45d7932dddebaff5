use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One student's purchase of one course at a fixed fee
///
/// `course_fees` is frozen at enrollment time; catalog price changes never
/// affect it. `selected_installments` of zero means the student never picked
/// a split and is treated as a single installment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub course_id: String,
    pub course_name: String,
    pub course_fees: Decimal,
    pub selected_installments: u32,
    pub enrollment_date: NaiveDate,
}

impl Enrollment {
    /// Installment count with the zero-like default applied.
    pub fn installment_count(&self) -> u32 {
        self.selected_installments.max(1)
    }
}
