//! Core payment domain models

use serde::{Deserialize, Serialize};

pub mod params;
pub mod request;
pub mod response;

pub use params::{CancelPaymentParams, CreatePaymentParams, RetrievePaymentParams};
pub use request::{CancelRequest, PaymentRequest, RetrieveRequest};
pub use response::PaymentResponse;

use crate::errors::CoreError;

/// Result type for orchestrated payment operations
pub type PaymentResult<T> = Result<T, CoreError>;

/// Payment methods understood across gateways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
	Card,
	BankTransfer,
	Ewallet,
	Qris,
	VirtualAccount,
	Other,
}

/// Unified payment status values used by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
	RequiresAction,
	Pending,
	Succeeded,
	Failed,
	Canceled,
}
