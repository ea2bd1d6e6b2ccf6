//! Core adapter traits for gateway integrations

use std::fmt::Debug;

use async_trait::async_trait;

use super::GatewayResult;
use crate::payments::{CancelRequest, PaymentRequest, PaymentResponse, RetrieveRequest};

/// Payment operations every gateway integration must support
///
/// Implementations own all network I/O, authentication, retries and
/// provider-specific field mapping. The core only routes requests to them
/// and normalizes their failures; it never post-processes a successful
/// response.
#[async_trait]
pub trait PaymentGateway: Send + Sync + Debug {
	/// Create a payment at the provider
	async fn create(&self, request: PaymentRequest) -> GatewayResult<PaymentResponse>;

	/// Look up an existing payment by id
	async fn retrieve(&self, request: RetrieveRequest) -> GatewayResult<PaymentResponse>;

	/// Cancel a payment, optionally with a reason
	async fn cancel(&self, request: CancelRequest) -> GatewayResult<PaymentResponse>;
}

/// Contract a gateway integration exposes to the core
///
/// Integrations are grouped by capability namespace; `payment` is the
/// only namespace the core consumes today. Registered instances are held
/// read-only for the life of the registry.
pub trait GatewayAdapter: Send + Sync + Debug {
	/// The payment capability of this gateway
	fn payment(&self) -> &dyn PaymentGateway;
}
