//! Standardized response returned after payment operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PaymentMethod, PaymentStatus};

/// Unified payment representation handed back to callers
///
/// Produced entirely by the adapter that executed the operation; the
/// orchestration layer passes it through without inspecting or editing
/// any field. Timestamps serialize as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
	/// Unique identifier of the payment at the provider
	pub id: String,
	/// Unified status value
	pub status: PaymentStatus,
	/// Amount in the smallest currency unit
	pub amount: i64,
	/// ISO currency code
	pub currency: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub method: Option<PaymentMethod>,
	/// When the provider created the payment
	pub created_at: DateTime<Utc>,
	/// When the provider last updated the payment
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<DateTime<Utc>>,
	/// Raw provider payload, for debugging
	#[serde(skip_serializing_if = "Option::is_none")]
	pub raw: Option<Value>,
}
