//! PayX Types
//!
//! Shared models and traits for the PayX payment orchestration core.
//! This crate contains all domain models organized by business entity.

pub mod adapters;
pub mod errors;
pub mod payments;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use payments::{
	CancelPaymentParams, CancelRequest, CreatePaymentParams, PaymentMethod, PaymentRequest,
	PaymentResponse, PaymentResult, PaymentStatus, RetrievePaymentParams, RetrieveRequest,
};

pub use adapters::{GatewayAdapter, GatewayError, GatewayResult, PaymentGateway};

pub use errors::{CoreError, CORE_ERROR_CODE, UNKNOWN_CODE};
