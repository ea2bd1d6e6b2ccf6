//! Adapter fakes used by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use payx::{
	CancelRequest, GatewayAdapter, GatewayResult, PaymentGateway, PaymentRequest, PaymentResponse,
	RetrieveRequest,
};

/// Adapter that answers every operation with one fixed response
///
/// Useful for asserting that the orchestration layer hands responses back
/// without touching a single field.
#[derive(Debug)]
pub struct StaticResponseAdapter {
	response: PaymentResponse,
}

impl StaticResponseAdapter {
	pub fn new(response: PaymentResponse) -> Self {
		Self { response }
	}
}

#[async_trait]
impl PaymentGateway for StaticResponseAdapter {
	async fn create(&self, _request: PaymentRequest) -> GatewayResult<PaymentResponse> {
		Ok(self.response.clone())
	}

	async fn retrieve(&self, _request: RetrieveRequest) -> GatewayResult<PaymentResponse> {
		Ok(self.response.clone())
	}

	async fn cancel(&self, _request: CancelRequest) -> GatewayResult<PaymentResponse> {
		Ok(self.response.clone())
	}
}

impl GatewayAdapter for StaticResponseAdapter {
	fn payment(&self) -> &dyn PaymentGateway {
		self
	}
}
