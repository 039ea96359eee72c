// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the reporting SDK.

use loom_raven_core::CoreError;
use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, RavenError>;

/// Errors that can occur in the reporting SDK.
///
/// A server rejecting an event is not an error; it is reported as
/// [`CaptureResult::Failure`](crate::CaptureResult::Failure).
#[derive(Debug, Error)]
pub enum RavenError {
	/// No DSN was configured.
	#[error("DSN is required")]
	MissingDsn,

	/// The DSN could not be parsed.
	#[error("invalid DSN: {0}")]
	InvalidDsn(#[from] CoreError),

	/// The transport failed to complete the exchange.
	#[error("transport error: {0}")]
	Transport(#[from] TransportError),

	/// The client has been closed.
	#[error("raven client has been closed")]
	ClientShutdown,

	/// Failed to serialize the event body.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_dsn_wraps_core_error() {
		let core = loom_raven_core::Dsn::parse("https://example.com/1").unwrap_err();
		let err: RavenError = core.into();
		assert!(matches!(err, RavenError::InvalidDsn(_)));
		assert!(err.to_string().starts_with("invalid DSN: malformed DSN"));
	}

	#[test]
	fn transport_error_converts() {
		let err: RavenError = TransportError::Closed.into();
		assert!(matches!(err, RavenError::Transport(TransportError::Closed)));
	}
}
