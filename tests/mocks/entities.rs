//! Canned domain entities for the integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use payx::{
	CreatePaymentParams, PaymentMethod, PaymentRequest, PaymentResponse, PaymentStatus,
};
use serde_json::json;

pub struct MockEntities;

impl MockEntities {
	/// A representative create-payment body
	pub fn payment_request() -> PaymentRequest {
		PaymentRequest {
			amount: 2500,
			currency: "USD".to_string(),
			method: Some(PaymentMethod::Card),
			description: Some("Pro subscription".to_string()),
			customer_id: Some("cus_42".to_string()),
			metadata: HashMap::from([("orderId".to_string(), "ord_9".to_string())]),
			capture: Some(true),
			extra: HashMap::from([("channel".to_string(), json!("web"))]),
		}
	}

	/// Create params targeting the given gateway
	pub fn create_params(gateway: &str) -> CreatePaymentParams {
		CreatePaymentParams {
			gateway: gateway.to_string(),
			body: Self::payment_request(),
		}
	}

	/// A fully populated response with fixed timestamps, for equality
	/// assertions
	pub fn payment_response(id: &str) -> PaymentResponse {
		PaymentResponse {
			id: id.to_string(),
			status: PaymentStatus::Succeeded,
			amount: 2500,
			currency: "USD".to_string(),
			method: Some(PaymentMethod::Card),
			created_at: Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap(),
			updated_at: Some(Utc.with_ymd_and_hms(2025, 1, 15, 8, 31, 0).unwrap()),
			raw: Some(json!({ "provider_ref": "ch_1", "network": "visa" })),
		}
	}
}
