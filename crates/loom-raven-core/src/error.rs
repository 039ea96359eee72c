// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the event reporting core.

use thiserror::Error;

/// Errors raised while parsing configuration values.
#[derive(Debug, Error)]
pub enum CoreError {
	/// The DSN could not be decomposed into endpoint and credentials.
	#[error("malformed DSN: {reason}")]
	MalformedDsn { reason: String },

	#[error("invalid level: {0}")]
	InvalidLevel(String),
}

impl CoreError {
	pub(crate) fn malformed_dsn(reason: impl Into<String>) -> Self {
		Self::MalformedDsn {
			reason: reason.into(),
		}
	}
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
