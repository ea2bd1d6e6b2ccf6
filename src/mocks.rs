//! Mock gateway adapter for demos and testing
//!
//! Provides a simple, inspectable adapter that can stand in for a real
//! gateway integration without network access or provider credentials.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use payx_types::{
	CancelRequest, GatewayAdapter, GatewayError, GatewayResult, PaymentGateway, PaymentRequest,
	PaymentResponse, PaymentStatus, RetrieveRequest,
};
use serde_json::json;

/// Amount reported for canned retrieve/cancel responses
const MOCK_AMOUNT: i64 = 1000;

/// In-memory gateway adapter with call tracking and failure injection
///
/// Every successful operation produces a canned response and records the
/// request it received, so tests can assert on exactly what reached the
/// adapter. Construct with [`failing`] to make every call fail with a
/// structured provider error.
///
/// [`failing`]: MockGatewayAdapter::failing
#[derive(Debug, Default)]
pub struct MockGatewayAdapter {
	failure: Option<(String, String)>,
	calls: AtomicUsize,
	last_create: Mutex<Option<PaymentRequest>>,
	last_retrieve: Mutex<Option<RetrieveRequest>>,
	last_cancel: Mutex<Option<CancelRequest>>,
}

impl MockGatewayAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adapter that fails every call with the given provider error
	pub fn failing(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			failure: Some((code.into(), message.into())),
			..Self::default()
		}
	}

	/// Number of payment operations served so far
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Body of the most recent create call, if any
	pub fn last_create(&self) -> Option<PaymentRequest> {
		self.last_create.lock().unwrap().clone()
	}

	/// Request of the most recent retrieve call, if any
	pub fn last_retrieve(&self) -> Option<RetrieveRequest> {
		self.last_retrieve.lock().unwrap().clone()
	}

	/// Request of the most recent cancel call, if any
	pub fn last_cancel(&self) -> Option<CancelRequest> {
		self.last_cancel.lock().unwrap().clone()
	}

	fn fail_if_configured(&self) -> GatewayResult<()> {
		match &self.failure {
			Some((code, message)) => Err(GatewayError::provider(code.clone(), message.clone())),
			None => Ok(()),
		}
	}

	fn canned_response(&self, id: String, status: PaymentStatus, amount: i64) -> PaymentResponse {
		PaymentResponse {
			id,
			status,
			amount,
			currency: "USD".to_string(),
			method: None,
			created_at: Utc::now(),
			updated_at: None,
			raw: Some(json!({ "provider": "mock" })),
		}
	}
}

#[async_trait]
impl PaymentGateway for MockGatewayAdapter {
	async fn create(&self, request: PaymentRequest) -> GatewayResult<PaymentResponse> {
		let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
		self.fail_if_configured()?;
		let response = self.canned_response(
			format!("pay_mock_{}", call),
			PaymentStatus::Pending,
			request.amount,
		);
		*self.last_create.lock().unwrap() = Some(request);
		Ok(response)
	}

	async fn retrieve(&self, request: RetrieveRequest) -> GatewayResult<PaymentResponse> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.fail_if_configured()?;
		let response =
			self.canned_response(request.id.clone(), PaymentStatus::Succeeded, MOCK_AMOUNT);
		*self.last_retrieve.lock().unwrap() = Some(request);
		Ok(response)
	}

	async fn cancel(&self, request: CancelRequest) -> GatewayResult<PaymentResponse> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.fail_if_configured()?;
		let response =
			self.canned_response(request.id.clone(), PaymentStatus::Canceled, MOCK_AMOUNT);
		*self.last_cancel.lock().unwrap() = Some(request);
		Ok(response)
	}
}

impl GatewayAdapter for MockGatewayAdapter {
	fn payment(&self) -> &dyn PaymentGateway {
		self
	}
}
