pub mod enrollment_controller;

pub use enrollment_controller::configure;
