// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `X-Sentry-Auth` header construction.

use chrono::{DateTime, Utc};

/// Protocol version sent in the auth header.
pub const PROTOCOL_VERSION: u32 = 7;

/// Name of the authentication header.
pub const AUTH_HEADER: &str = "X-Sentry-Auth";

/// Formats the authentication header value.
///
/// Only the public key is forwarded; the secret key never leaves the client.
pub fn auth_header(public_key: &str, timestamp: DateTime<Utc>) -> String {
	format!(
		"Sentry sentry_version={},sentry_timestamp={},sentry_key={}",
		PROTOCOL_VERSION,
		timestamp.timestamp_millis(),
		public_key
	)
}
