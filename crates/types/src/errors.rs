//! Normalized error shape shared across the core

use std::error::Error as StdError;

use thiserror::Error;

use crate::adapters::GatewayError;

/// Code assigned when a `CoreError` is constructed directly without one
pub const CORE_ERROR_CODE: &str = "CORE_ERROR";

/// Code assigned when a wrapped failure carries no recognizable code
pub const UNKNOWN_CODE: &str = "UNKNOWN";

/// Message assigned when a wrapped failure carries no usable message
const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Uniform error surfaced to callers of the core
///
/// Every failure crossing the public surface is reduced to a message plus
/// a machine-readable code. `code` is the stable discriminator for error
/// handling; `message` is advisory and human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CoreError {
	/// Human-readable description of the failure
	pub message: String,
	/// Machine-readable discriminator
	pub code: String,
}

impl CoreError {
	/// Create an error with the default `CORE_ERROR` code
	pub fn new(message: impl Into<String>) -> Self {
		Self::with_code(message, CORE_ERROR_CODE)
	}

	/// Create an error with an explicit code
	pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			code: code.into(),
		}
	}

	/// Normalize an arbitrary failure into a `CoreError`
	///
	/// A failure that is already a `CoreError` comes back unchanged, code
	/// intact. A [`GatewayError`] contributes its display message and
	/// whatever code it can extract. Anything else is reduced to its
	/// display message with the `UNKNOWN` code, falling back to
	/// `"Unknown error"` when the message is blank. Total: never fails,
	/// never panics.
	pub fn wrap<E>(err: E) -> Self
	where
		E: Into<Box<dyn StdError + Send + Sync + 'static>>,
	{
		let err: Box<dyn StdError + Send + Sync + 'static> = err.into();
		let err = match err.downcast::<CoreError>() {
			Ok(already_normalized) => return *already_normalized,
			Err(err) => err,
		};
		match err.downcast::<GatewayError>() {
			Ok(gateway) => {
				let code = gateway
					.code()
					.map(str::to_string)
					.unwrap_or_else(|| UNKNOWN_CODE.to_string());
				Self {
					message: gateway.to_string(),
					code,
				}
			},
			Err(other) => {
				let message = other.to_string();
				let message = if message.trim().is_empty() {
					UNKNOWN_MESSAGE.to_string()
				} else {
					message
				};
				Self {
					message,
					code: UNKNOWN_CODE.to_string(),
				}
			},
		}
	}
}
