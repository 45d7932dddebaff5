use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{LedgerStore, Result};
use crate::modules::catalog::models::Course;
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{OnlinePayment, Payment};

/// MySQL-backed ledger store
///
/// Rows are ordered by primary key, the insertion order of the ledger, so
/// the first-seen grouping guarantee holds for this backend too.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl LedgerStore for MySqlStore {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, category, description, instructor, duration,
                   start_date, end_date, price, max_installments, active
            FROM courses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, student_id, student_name, student_email, student_phone,
                   course_id, course_name, course_fees, selected_installments,
                   enrollment_date
            FROM enrollments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(enrollments)
    }

    async fn list_payments(&self) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, receipt_id, student_id, student_name, enrollment_id,
                   course_id, course_name, amount, payment_date, payment_method,
                   status, notes
            FROM offline_payments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    async fn list_online_payments(&self) -> Result<Vec<OnlinePayment>> {
        let payments = sqlx::query_as::<_, OnlinePayment>(
            r#"
            SELECT id, enrollment_id, installment_no, amount, paid_at,
                   method, txn_ref, status, receipt_id
            FROM online_payments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }
}
