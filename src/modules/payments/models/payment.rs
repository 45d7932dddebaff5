use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle status of a recorded payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Funds received and confirmed
    Completed,
    /// Recorded but not yet confirmed
    Pending,
    /// Attempted and rejected
    Failed,
    /// Returned to the student after completion
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

/// Payment ledger record
///
/// Offline payments are stored in this shape directly; online payments are
/// normalized into it before aggregation. Records are append-only and carry
/// the student/course identity denormalized, the way staff entered them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub receipt_id: String,
    pub student_id: String,
    pub student_name: String,
    pub enrollment_id: String,
    pub course_id: String,
    pub course_name: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    #[sqlx(try_from = "String")]
    pub status: PaymentStatus,
    pub notes: String,
}

/// Status reported by the online checkout flow
///
/// `Success` is the checkout's name for a confirmed payment and maps to
/// [`PaymentStatus::Completed`]; the remaining values pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Success,
    Pending,
    Failed,
    Refunded,
}

impl OnlineStatus {
    /// Map the checkout status onto the ledger status vocabulary.
    pub fn normalized(&self) -> PaymentStatus {
        match self {
            Self::Success => PaymentStatus::Completed,
            Self::Pending => PaymentStatus::Pending,
            Self::Failed => PaymentStatus::Failed,
            Self::Refunded => PaymentStatus::Refunded,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl TryFrom<String> for OnlineStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "success" => Ok(Self::Success),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(format!("Invalid online payment status: {}", value)),
        }
    }
}

/// Payment captured through the student-facing checkout
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OnlinePayment {
    pub id: String,
    pub enrollment_id: String,
    pub installment_no: u32,
    pub amount: Decimal,
    pub paid_at: NaiveDate,
    /// Absent means the checkout did not report one; defaults to "online"
    pub method: Option<String>,
    pub txn_ref: String,
    #[sqlx(try_from = "String")]
    pub status: OnlineStatus,
    pub receipt_id: Option<String>,
}

/// Per-status payment counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
    pub refunded: usize,
}

impl StatusCounts {
    /// Count payments into their status buckets.
    pub fn tally<'a, I>(payments: I) -> Self
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let mut counts = Self::default();
        for payment in payments {
            match payment.status {
                PaymentStatus::Completed => counts.completed += 1,
                PaymentStatus::Pending => counts.pending += 1,
                PaymentStatus::Failed => counts.failed += 1,
                PaymentStatus::Refunded => counts.refunded += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.completed + self.pending + self.failed + self.refunded
    }
}

/// Per-status payment amount sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountsByStatus {
    pub completed: Decimal,
    pub pending: Decimal,
    pub failed: Decimal,
    pub refunded: Decimal,
}

impl AmountsByStatus {
    /// Sum payment amounts into their status buckets.
    pub fn tally<'a, I>(payments: I) -> Self
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let mut amounts = Self::default();
        for payment in payments {
            match payment.status {
                PaymentStatus::Completed => amounts.completed += payment.amount,
                PaymentStatus::Pending => amounts.pending += payment.amount,
                PaymentStatus::Failed => amounts.failed += payment.amount,
                PaymentStatus::Refunded => amounts.refunded += payment.amount,
            }
        }
        amounts
    }
}
