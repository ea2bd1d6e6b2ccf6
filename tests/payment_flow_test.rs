//! End-to-end payment routing through the public facade

use std::sync::Arc;

use payx::mocks::MockGatewayAdapter;
use payx::{
	CancelPaymentParams, GatewayAdapter, PaymentStatus, Payx, RetrievePaymentParams,
};

mod mocks;

use mocks::{MockEntities, StaticResponseAdapter};

fn two_gateway_orchestrator() -> (Payx, Arc<MockGatewayAdapter>, Arc<MockGatewayAdapter>) {
	let stripe = Arc::new(MockGatewayAdapter::new());
	let xendit = Arc::new(MockGatewayAdapter::new());
	let payx = Payx::builder()
		.with_adapter("stripe", stripe.clone() as Arc<dyn GatewayAdapter>)
		.with_adapter("xendit", xendit.clone() as Arc<dyn GatewayAdapter>)
		.build();
	(payx, stripe, xendit)
}

#[tokio::test]
async fn test_create_routes_to_named_gateway_with_verbatim_body() {
	let (payx, stripe, xendit) = two_gateway_orchestrator();
	let params = MockEntities::create_params("stripe");
	let expected_body = params.body.clone();

	let response = payx.create_payment(params).await.unwrap();

	assert_eq!(response.status, PaymentStatus::Pending);
	assert_eq!(response.amount, expected_body.amount);
	// The adapter saw the body exactly as submitted, with no routing
	// envelope around it
	assert_eq!(stripe.last_create().unwrap(), expected_body);
	assert_eq!(stripe.calls(), 1);
	assert_eq!(xendit.calls(), 0);
}

#[tokio::test]
async fn test_retrieve_sends_only_the_payment_id() {
	let (payx, stripe, _) = two_gateway_orchestrator();

	let response = payx
		.retrieve_payment(RetrievePaymentParams {
			gateway: "stripe".to_string(),
			id: "pay_123".to_string(),
		})
		.await
		.unwrap();

	assert_eq!(response.id, "pay_123");
	assert_eq!(stripe.last_retrieve().unwrap().id, "pay_123");
}

#[tokio::test]
async fn test_cancel_forwards_id_and_reason() {
	let (payx, stripe, _) = two_gateway_orchestrator();

	let response = payx
		.cancel_payment(CancelPaymentParams {
			gateway: "stripe".to_string(),
			id: "pay_123".to_string(),
			reason: Some("user_request".to_string()),
		})
		.await
		.unwrap();

	assert_eq!(response.status, PaymentStatus::Canceled);
	let seen = stripe.last_cancel().unwrap();
	assert_eq!(seen.id, "pay_123");
	assert_eq!(seen.reason.as_deref(), Some("user_request"));
}

#[tokio::test]
async fn test_responses_pass_through_unmodified() {
	let canned = MockEntities::payment_response("pay_static");
	let payx = Payx::builder()
		.with_adapter(
			"stripe",
			Arc::new(StaticResponseAdapter::new(canned.clone())),
		)
		.build();

	let created = payx
		.create_payment(MockEntities::create_params("stripe"))
		.await
		.unwrap();
	assert_eq!(created, canned);

	let retrieved = payx
		.retrieve_payment(RetrievePaymentParams {
			gateway: "stripe".to_string(),
			id: "pay_static".to_string(),
		})
		.await
		.unwrap();
	assert_eq!(retrieved, canned);
}

#[tokio::test]
async fn test_adapter_failure_surfaces_as_normalized_error() {
	let payx = Payx::builder()
		.with_adapter(
			"stripe",
			Arc::new(MockGatewayAdapter::failing("card_declined", "Card declined")),
		)
		.build();

	let err = payx
		.create_payment(MockEntities::create_params("stripe"))
		.await
		.unwrap_err();

	assert_eq!(err.code, "card_declined");
	assert_eq!(err.message, "Card declined");
}

#[tokio::test]
async fn test_unknown_gateway_fails_with_configuration_message() {
	let (payx, _, _) = two_gateway_orchestrator();

	let err = payx
		.retrieve_payment(RetrievePaymentParams {
			gateway: "midtrans".to_string(),
			id: "pay_1".to_string(),
		})
		.await
		.unwrap_err();

	assert_eq!(err.message, "Gateway midtrans not configured");
	assert_eq!(err.code, "UNKNOWN");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
	let (payx, stripe, xendit) = two_gateway_orchestrator();

	let (first, second) = tokio::join!(
		payx.create_payment(MockEntities::create_params("stripe")),
		payx.create_payment(MockEntities::create_params("xendit")),
	);

	assert!(first.is_ok());
	assert!(second.is_ok());
	assert_eq!(stripe.calls(), 1);
	assert_eq!(xendit.calls(), 1);
}
