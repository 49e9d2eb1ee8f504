//! Business logic services for the Garden Weather Advisor service

pub mod advisory;

pub use advisory::AdvisoryService;
