// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Interpretation of store endpoint replies.

use serde::{Deserialize, Serialize};

use crate::transport::TransportResponse;

/// Name of the service used in failure messages.
const SERVICE_NAME: &str = "Sentry";

/// Header carrying a human-readable rejection reason.
pub const ERROR_HEADER: &str = "x-sentry-error";

/// Outcome of a capture that reached the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureResult {
	/// The event was accepted under the given id.
	Success { event_id: String },
	/// The endpoint rejected the event.
	Failure { message: String },
}

impl CaptureResult {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}

	pub fn event_id(&self) -> Option<&str> {
		match self {
			Self::Success { event_id } => Some(event_id),
			Self::Failure { .. } => None,
		}
	}
}

#[derive(Deserialize)]
struct StoreResponse {
	id: String,
}

/// Maps a transport response to a [`CaptureResult`].
///
/// Any status other than 200 is a failure, whether or not the endpoint sent
/// an error header.
pub fn interpret(response: &TransportResponse) -> CaptureResult {
	if response.status == 200 {
		return match serde_json::from_str::<StoreResponse>(&response.body) {
			Ok(body) => CaptureResult::Success { event_id: body.id },
			Err(_) => CaptureResult::Failure {
				message: format!(
					"{SERVICE_NAME} responded with HTTP 200: response did not contain an event id"
				),
			},
		};
	}

	let mut message = format!("{SERVICE_NAME} responded with HTTP {}", response.status);
	if let Some(reason) = response.header(ERROR_HEADER) {
		message.push_str(": ");
		message.push_str(reason);
	}

	CaptureResult::Failure { message }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ok_with_id_is_success() {
		let response = TransportResponse::new(200).with_body(r#"{"id":"abc123"}"#);
		assert_eq!(
			interpret(&response),
			CaptureResult::Success {
				event_id: "abc123".to_string()
			}
		);
	}

	#[test]
	fn rejection_includes_error_header() {
		let response =
			TransportResponse::new(400).with_header("X-Sentry-Error", "invalid api key");
		assert_eq!(
			interpret(&response),
			CaptureResult::Failure {
				message: "Sentry responded with HTTP 400: invalid api key".to_string()
			}
		);
	}

	#[test]
	fn rejection_without_header_still_fails() {
		let response = TransportResponse::new(503).with_body("upstream down");
		assert_eq!(
			interpret(&response),
			CaptureResult::Failure {
				message: "Sentry responded with HTTP 503".to_string()
			}
		);
	}

	#[test]
	fn other_success_statuses_are_failures() {
		let response = TransportResponse::new(202).with_body(r#"{"id":"abc123"}"#);
		assert!(!interpret(&response).is_success());
	}

	#[test]
	fn ok_without_id_is_failure() {
		let result = interpret(&TransportResponse::new(200).with_body("{}"));
		assert!(matches!(result, CaptureResult::Failure { .. }));

		let result = interpret(&TransportResponse::new(200).with_body("not json"));
		assert!(result.event_id().is_none());
	}
}
