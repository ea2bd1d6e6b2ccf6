//! PayX Adapters
//!
//! Gateway adapter registry for the PayX payment orchestration core.
//! Concrete gateway integrations live with the integrator; this crate
//! only resolves them by key.

use std::collections::HashMap;
use std::sync::Arc;

use payx_types::GatewayAdapter;
use thiserror::Error;

/// Full adapter set keyed by gateway identifier
pub type AdapterMap = HashMap<String, Arc<dyn GatewayAdapter>>;

/// Errors raised while resolving adapters
#[derive(Debug, Error)]
pub enum RegistryError {
	/// No adapter registered under the requested key. The message format
	/// is part of the public contract.
	#[error("Gateway {0} not configured")]
	GatewayNotConfigured(String),
}

/// Immutable mapping from gateway identifier to adapter instance
///
/// The adapter set is supplied wholesale at construction and never
/// changes afterward, so lookups are pure reads and safe to issue
/// concurrently. Keys are case-sensitive and matched verbatim.
#[derive(Debug, Clone)]
pub struct AdapterRegistry {
	adapters: AdapterMap,
}

impl AdapterRegistry {
	/// Build a registry over the full adapter set
	pub fn new(adapters: AdapterMap) -> Self {
		Self { adapters }
	}

	/// Resolve the adapter registered under `gateway`
	///
	/// Returns the exact instance that was registered; callers may rely
	/// on pointer identity. A miss is a configuration error, reported
	/// with the key interpolated verbatim.
	pub fn get(&self, gateway: &str) -> Result<Arc<dyn GatewayAdapter>, RegistryError> {
		self.adapters
			.get(gateway)
			.cloned()
			.ok_or_else(|| RegistryError::GatewayNotConfigured(gateway.to_string()))
	}

	/// Number of configured gateways
	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}
