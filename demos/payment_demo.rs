//! End-to-end demo of routed payment operations against mock gateways

use std::sync::Arc;

use payx::mocks::MockGatewayAdapter;
use payx::{
	CancelPaymentParams, CreatePaymentParams, PaymentRequest, Payx, RetrievePaymentParams,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	println!("PayX Payment Routing Demo");
	println!("=========================");

	let payx = Payx::builder()
		.with_adapter("stripe", Arc::new(MockGatewayAdapter::new()))
		.with_adapter("xendit", Arc::new(MockGatewayAdapter::new()))
		.build();

	// Create a payment through the stripe-keyed adapter
	let created = payx
		.create_payment(CreatePaymentParams {
			gateway: "stripe".to_string(),
			body: PaymentRequest {
				amount: 2500,
				currency: "USD".to_string(),
				description: Some("Pro subscription".to_string()),
				..Default::default()
			},
		})
		.await?;
	println!("created {} with status {:?}", created.id, created.status);

	// Look it up again
	let retrieved = payx
		.retrieve_payment(RetrievePaymentParams {
			gateway: "stripe".to_string(),
			id: created.id.clone(),
		})
		.await?;
	println!("retrieved {} with status {:?}", retrieved.id, retrieved.status);

	// Cancel it with a reason
	let canceled = payx
		.cancel_payment(CancelPaymentParams {
			gateway: "stripe".to_string(),
			id: created.id.clone(),
			reason: Some("user_request".to_string()),
		})
		.await?;
	println!("canceled {} with status {:?}", canceled.id, canceled.status);

	// Routing to a gateway nobody configured fails loudly
	let err = payx
		.retrieve_payment(RetrievePaymentParams {
			gateway: "midtrans".to_string(),
			id: created.id,
		})
		.await
		.unwrap_err();
	println!("routing miss: {} (code {})", err.message, err.code);

	Ok(())
}
