//! Adapter capability contract and failure taxonomy

pub mod errors;
pub mod traits;

pub use errors::GatewayError;
pub use traits::{GatewayAdapter, PaymentGateway};

/// Result type for adapter operations
pub type GatewayResult<T> = Result<T, GatewayError>;
