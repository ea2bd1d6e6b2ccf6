//! PayX Service
//!
//! Orchestration logic for routing payment operations to gateway
//! adapters and normalizing their failures.

pub mod payment;

pub use payment::{PaymentOrchestrator, PaymentService};
