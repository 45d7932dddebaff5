use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::{AppError, LedgerStore, Result};
use crate::modules::catalog::models::Course;
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{OnlinePayment, Payment};
use crate::store::sample_data;

#[derive(Default)]
struct Collections {
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    payments: Vec<Payment>,
    online_payments: Vec<OnlinePayment>,
}

/// In-memory ledger store
///
/// Vectors keep insertion order, which is what the aggregation layer's
/// first-seen grouping guarantee leans on. The lock exists only so fixtures
/// and tests can append; handlers never write.
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }

    /// Store pre-populated with the demo dataset.
    pub fn with_sample_data() -> Self {
        Self::seeded(
            sample_data::courses(),
            sample_data::enrollments(),
            sample_data::payments(),
            sample_data::online_payments(),
        )
    }

    /// Store seeded with explicit collections.
    pub fn seeded(
        courses: Vec<Course>,
        enrollments: Vec<Enrollment>,
        payments: Vec<Payment>,
        online_payments: Vec<OnlinePayment>,
    ) -> Self {
        Self {
            inner: RwLock::new(Collections {
                courses,
                enrollments,
                payments,
                online_payments,
            }),
        }
    }

    pub fn add_enrollment(&self, enrollment: Enrollment) -> Result<()> {
        self.write()?.enrollments.push(enrollment);
        Ok(())
    }

    pub fn add_payment(&self, payment: Payment) -> Result<()> {
        self.write()?.payments.push(payment);
        Ok(())
    }

    pub fn add_online_payment(&self, payment: OnlinePayment) -> Result<()> {
        self.write()?.online_payments.push(payment);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| AppError::internal("Ledger store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| AppError::internal("Ledger store lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.read()?.courses.clone())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        Ok(self.read()?.enrollments.clone())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>> {
        Ok(self.read()?.payments.clone())
    }

    async fn list_online_payments(&self) -> Result<Vec<OnlinePayment>> {
        Ok(self.read()?.online_payments.clone())
    }
}
