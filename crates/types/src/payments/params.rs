//! Routing envelopes accepted by the orchestration facade
//!
//! Each set of params names the target gateway alongside the operation
//! payload. The gateway key never reaches the adapter; only the payload
//! does.

use serde::{Deserialize, Serialize};

use super::request::PaymentRequest;

/// Parameters for creating a payment through a named gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentParams {
	/// Key identifying which adapter handles the request
	pub gateway: String,
	/// Body handed to the adapter, verbatim
	pub body: PaymentRequest,
}

/// Parameters for retrieving a payment through a named gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievePaymentParams {
	/// Key identifying which adapter handles the request
	pub gateway: String,
	/// Payment id to retrieve
	pub id: String,
}

/// Parameters for canceling a payment through a named gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPaymentParams {
	/// Key identifying which adapter handles the request
	pub gateway: String,
	/// Payment id to cancel
	pub id: String,
	/// Optional cancellation reason
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
}
