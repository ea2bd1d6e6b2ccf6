//! Request bodies handed to gateway adapters

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PaymentMethod;

/// Body of a create-payment call
///
/// The orchestration layer hands this to the resolved adapter verbatim.
/// Provider-specific fields travel in `extra` and are flattened on the
/// wire, so adapters can accept fields the core knows nothing about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
	/// Amount in the smallest currency unit (e.g. cents)
	pub amount: i64,
	/// ISO currency code (e.g. "USD", "IDR")
	pub currency: String,
	/// Standardized payment method, when the caller knows it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub method: Option<PaymentMethod>,
	/// Free-form description forwarded to the provider
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Customer identifier at the provider
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<String>,
	/// Arbitrary metadata key-value pairs
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub metadata: HashMap<String, String>,
	/// Whether to capture immediately, for gateways that support it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub capture: Option<bool>,
	/// Provider-specific fields, passed through untouched
	#[serde(flatten)]
	pub extra: HashMap<String, Value>,
}

/// Request for retrieving a payment by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveRequest {
	pub id: String,
}

/// Request for canceling a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
	pub id: String,
	/// Optional cancellation reason forwarded to the provider
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
}
