pub mod payment;

pub use payment::{AmountsByStatus, OnlinePayment, OnlineStatus, Payment, PaymentStatus, StatusCounts};
