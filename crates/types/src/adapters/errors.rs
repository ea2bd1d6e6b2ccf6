//! Error types for adapter operations

use thiserror::Error;

/// Failures surfaced by gateway adapters
///
/// Adapters map provider responses into these variants. The orchestration
/// layer extracts a display message from every variant and, when one
/// exists, a machine code via [`GatewayError::code`].
#[derive(Debug, Error)]
pub enum GatewayError {
	/// Structured failure reported by the provider itself
	#[error("{message}")]
	Provider { code: String, message: String },

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("timeout after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("unsupported operation: {operation} for gateway {gateway}")]
	Unsupported { operation: String, gateway: String },

	#[error("connection error: {0}")]
	Connection(String),

	/// Opaque failure with no machine-readable code
	#[error("{0}")]
	Other(String),
}

impl GatewayError {
	/// Machine code for this failure, when one can be extracted
	pub fn code(&self) -> Option<&str> {
		match self {
			GatewayError::Provider { code, .. } => Some(code),
			GatewayError::Http(_) => Some("GATEWAY_HTTP"),
			GatewayError::Serialization(_) => Some("GATEWAY_SERIALIZATION"),
			GatewayError::Timeout { .. } => Some("GATEWAY_TIMEOUT"),
			GatewayError::Unsupported { .. } => Some("GATEWAY_UNSUPPORTED"),
			GatewayError::Connection(_) => Some("GATEWAY_CONNECTION"),
			GatewayError::Other(_) => None,
		}
	}

	/// Structured provider failure
	pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Provider {
			code: code.into(),
			message: message.into(),
		}
	}

	/// Unsupported-operation failure for a named gateway
	pub fn unsupported(operation: impl Into<String>, gateway: impl Into<String>) -> Self {
		Self::Unsupported {
			operation: operation.into(),
			gateway: gateway.into(),
		}
	}
}
