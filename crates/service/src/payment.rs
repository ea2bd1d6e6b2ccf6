//! Payment orchestration service
//!
//! Resolves the target adapter for each request, delegates the operation
//! and funnels every failure through the normalized error shape. Holds no
//! state beyond the immutable registry, so concurrent calls are fully
//! independent and the only suspension point is the delegated adapter
//! future.

use std::sync::Arc;

use async_trait::async_trait;
use payx_adapters::AdapterRegistry;
use payx_types::{
	CancelPaymentParams, CancelRequest, CoreError, CreatePaymentParams, PaymentResponse,
	PaymentResult, RetrievePaymentParams, RetrieveRequest,
};
use tracing::{debug, warn};

/// Payment operations exposed by the orchestration layer
///
/// Mirrors the facade surface; implement or mock this to stand in for the
/// whole dispatch path.
#[async_trait]
pub trait PaymentOrchestrator: Send + Sync {
	/// Create a payment through the gateway named in the params
	async fn create(&self, params: CreatePaymentParams) -> PaymentResult<PaymentResponse>;

	/// Retrieve a payment through the gateway named in the params
	async fn retrieve(&self, params: RetrievePaymentParams) -> PaymentResult<PaymentResponse>;

	/// Cancel a payment through the gateway named in the params
	async fn cancel(&self, params: CancelPaymentParams) -> PaymentResult<PaymentResponse>;
}

/// Dispatch-and-normalize implementation over an adapter registry
///
/// Successful responses pass through untouched; no retries, no timeouts,
/// no buffering. Cancellation and deadlines are whatever the resolved
/// adapter honors.
#[derive(Debug, Clone)]
pub struct PaymentService {
	registry: Arc<AdapterRegistry>,
}

impl PaymentService {
	pub fn new(registry: Arc<AdapterRegistry>) -> Self {
		Self { registry }
	}
}

#[async_trait]
impl PaymentOrchestrator for PaymentService {
	async fn create(&self, params: CreatePaymentParams) -> PaymentResult<PaymentResponse> {
		debug!(gateway = %params.gateway, "dispatching create payment");
		let adapter = self.registry.get(&params.gateway).map_err(|err| {
			warn!(gateway = %params.gateway, "create payment hit unconfigured gateway");
			CoreError::wrap(err)
		})?;
		adapter.payment().create(params.body).await.map_err(|err| {
			warn!(gateway = %params.gateway, error = %err, "create payment failed");
			CoreError::wrap(err)
		})
	}

	async fn retrieve(&self, params: RetrievePaymentParams) -> PaymentResult<PaymentResponse> {
		debug!(gateway = %params.gateway, id = %params.id, "dispatching retrieve payment");
		let adapter = self.registry.get(&params.gateway).map_err(|err| {
			warn!(gateway = %params.gateway, "retrieve payment hit unconfigured gateway");
			CoreError::wrap(err)
		})?;
		let request = RetrieveRequest { id: params.id };
		adapter.payment().retrieve(request).await.map_err(|err| {
			warn!(gateway = %params.gateway, error = %err, "retrieve payment failed");
			CoreError::wrap(err)
		})
	}

	async fn cancel(&self, params: CancelPaymentParams) -> PaymentResult<PaymentResponse> {
		debug!(gateway = %params.gateway, id = %params.id, "dispatching cancel payment");
		let adapter = self.registry.get(&params.gateway).map_err(|err| {
			warn!(gateway = %params.gateway, "cancel payment hit unconfigured gateway");
			CoreError::wrap(err)
		})?;
		let request = CancelRequest {
			id: params.id,
			reason: params.reason,
		};
		adapter.payment().cancel(request).await.map_err(|err| {
			warn!(gateway = %params.gateway, error = %err, "cancel payment failed");
			CoreError::wrap(err)
		})
	}
}
