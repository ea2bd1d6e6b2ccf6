//! PayX
//!
//! A unifying orchestration layer that routes payment operations to
//! pluggable gateway adapters and normalizes responses and errors into a
//! single contract.
//!
//! Gateway integrations implement [`GatewayAdapter`] and are registered
//! under an opaque key; [`Payx`] routes each call to the adapter named in
//! its params and passes the adapter's response back untouched.

use std::sync::Arc;

use payx_adapters::AdapterRegistry;
use tracing::info;

// Core domain types - the most commonly used types
pub use payx_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	CancelPaymentParams,
	CancelRequest,
	// Error types
	CoreError,
	CreatePaymentParams,
	// Adapter contract
	GatewayAdapter,
	GatewayError,
	GatewayResult,
	PaymentGateway,
	PaymentMethod,
	// Primary domain entities
	PaymentRequest,
	PaymentResponse,
	PaymentResult,
	PaymentStatus,
	RetrievePaymentParams,
	RetrieveRequest,
};

// Registry layer
pub use payx_adapters::{AdapterMap, RegistryError};

// Service layer
pub use payx_service::{PaymentOrchestrator, PaymentService};

// Module aliases for advanced usage
pub mod types {
	pub use payx_types::*;
}

pub mod adapters {
	pub use payx_adapters::*;
}

pub mod service {
	pub use payx_service::*;
}

pub mod mocks;

// Re-export external dependencies for adapter implementations
pub use async_trait;

/// Builder for configuring a [`Payx`] orchestrator
///
/// The adapter set is assembled here and frozen by [`build`]; nothing can
/// be registered or removed afterward. This builder is the entire
/// configuration surface of the crate.
///
/// [`build`]: PayxBuilder::build
#[derive(Default)]
pub struct PayxBuilder {
	adapters: AdapterMap,
}

impl PayxBuilder {
	pub fn new() -> Self {
		Self {
			adapters: AdapterMap::new(),
		}
	}

	/// Register a gateway adapter under `gateway`
	pub fn with_adapter(
		mut self,
		gateway: impl Into<String>,
		adapter: Arc<dyn GatewayAdapter>,
	) -> Self {
		self.adapters.insert(gateway.into(), adapter);
		self
	}

	/// Register a full adapter map wholesale
	pub fn with_adapters(mut self, adapters: AdapterMap) -> Self {
		self.adapters.extend(adapters);
		self
	}

	/// Freeze the adapter set and construct the orchestrator
	pub fn build(self) -> Payx {
		let registry = Arc::new(AdapterRegistry::new(self.adapters));
		info!(gateways = registry.len(), "payment orchestrator configured");
		Payx {
			payments: PaymentService::new(registry),
		}
	}
}

/// Entry point for routed payment operations
///
/// Construct once with the full adapter set and share freely: every
/// operation is stateless, concurrent calls are independent, and the
/// adapter map never changes after construction.
#[derive(Debug, Clone)]
pub struct Payx {
	payments: PaymentService,
}

impl Payx {
	/// Start assembling an orchestrator
	pub fn builder() -> PayxBuilder {
		PayxBuilder::new()
	}

	/// Construct directly from a full adapter map
	pub fn new(adapters: AdapterMap) -> Self {
		PayxBuilder::new().with_adapters(adapters).build()
	}

	/// Create a payment through the gateway named in `params`
	pub async fn create_payment(
		&self,
		params: CreatePaymentParams,
	) -> PaymentResult<PaymentResponse> {
		self.payments.create(params).await
	}

	/// Retrieve a payment through the gateway named in `params`
	pub async fn retrieve_payment(
		&self,
		params: RetrievePaymentParams,
	) -> PaymentResult<PaymentResponse> {
		self.payments.retrieve(params).await
	}

	/// Cancel a payment through the gateway named in `params`
	pub async fn cancel_payment(
		&self,
		params: CancelPaymentParams,
	) -> PaymentResult<PaymentResponse> {
		self.payments.cancel(params).await
	}
}
