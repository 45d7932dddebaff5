// Payments module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AmountsByStatus, OnlinePayment, OnlineStatus, Payment, PaymentStatus, StatusCounts};
pub use services::PaymentLedger;
