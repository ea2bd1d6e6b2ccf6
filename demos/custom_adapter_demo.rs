//! Example demonstrating how to plug in a custom gateway adapter

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use payx::{
	CancelRequest, CreatePaymentParams, GatewayAdapter, GatewayError, GatewayResult,
	PaymentGateway, PaymentRequest, PaymentResponse, PaymentStatus, Payx, RetrieveRequest,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Example custom adapter implementation
///
/// A real integration would perform HTTP calls against the provider here;
/// this one answers locally so the demo runs offline.
#[derive(Debug)]
struct AcmePayAdapter;

#[async_trait]
impl PaymentGateway for AcmePayAdapter {
	async fn create(&self, request: PaymentRequest) -> GatewayResult<PaymentResponse> {
		info!(amount = request.amount, "acmepay creating payment");
		Ok(PaymentResponse {
			id: "acme_1".to_string(),
			status: PaymentStatus::RequiresAction,
			amount: request.amount,
			currency: request.currency,
			method: request.method,
			created_at: Utc::now(),
			updated_at: None,
			raw: None,
		})
	}

	async fn retrieve(&self, request: RetrieveRequest) -> GatewayResult<PaymentResponse> {
		Ok(PaymentResponse {
			id: request.id,
			status: PaymentStatus::Succeeded,
			amount: 2500,
			currency: "USD".to_string(),
			method: None,
			created_at: Utc::now(),
			updated_at: Some(Utc::now()),
			raw: None,
		})
	}

	async fn cancel(&self, _request: CancelRequest) -> GatewayResult<PaymentResponse> {
		// AcmePay has no cancellation endpoint
		Err(GatewayError::unsupported("cancel", "acmepay"))
	}
}

impl GatewayAdapter for AcmePayAdapter {
	fn payment(&self) -> &dyn PaymentGateway {
		self
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let payx = Payx::builder()
		.with_adapter("acmepay", Arc::new(AcmePayAdapter))
		.build();

	let created = payx
		.create_payment(CreatePaymentParams {
			gateway: "acmepay".to_string(),
			body: PaymentRequest {
				amount: 2500,
				currency: "USD".to_string(),
				..Default::default()
			},
		})
		.await?;
	println!("created {} -> {:?}", created.id, created.status);

	let err = payx
		.cancel_payment(payx::CancelPaymentParams {
			gateway: "acmepay".to_string(),
			id: created.id,
			reason: None,
		})
		.await
		.unwrap_err();
	println!("cancel not supported: {} (code {})", err.message, err.code);

	Ok(())
}
