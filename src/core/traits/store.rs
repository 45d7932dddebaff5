use async_trait::async_trait;

use crate::core::error::Result;
use crate::modules::catalog::models::Course;
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{OnlinePayment, Payment};

/// Read-only access to the enrollment and payment collections.
///
/// The aggregation layer never writes through this trait; implementations
/// may back onto a database or an in-memory fixture without the handlers
/// noticing. Listings preserve source insertion order, which drives the
/// first-seen grouping guarantees of the student aggregation.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Course catalog entries.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// All enrollments, in insertion order.
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;

    /// Offline-recorded payments, in insertion order.
    async fn list_payments(&self) -> Result<Vec<Payment>>;

    /// Payments captured through the online checkout flow.
    async fn list_online_payments(&self) -> Result<Vec<OnlinePayment>>;
}
