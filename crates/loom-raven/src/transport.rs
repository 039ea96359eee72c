// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP transport capability.
//!
//! The client hands a fully built request to a [`Transport`] and interprets
//! whatever status, headers and body come back. Timeouts and cancellation are
//! the transport's concern.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use loom_raven_core::{SDK_NAME, SDK_VERSION};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Errors raised by a transport while performing an exchange.
#[derive(Debug, Error)]
pub enum TransportError {
	#[error("HTTP request failed: {0}")]
	Request(#[from] reqwest::Error),

	#[error("transport has been closed")]
	Closed,

	#[error("{0}")]
	Other(String),
}

/// A POST request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Vec<u8>,
}

impl TransportRequest {
	/// Returns the first header with the given name (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

/// The endpoint's reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	/// Header names are stored lower-cased.
	pub headers: HashMap<String, String>,
	pub body: String,
}

impl TransportResponse {
	pub fn new(status: u16) -> Self {
		Self {
			status,
			..Default::default()
		}
	}

	pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
		self.headers.insert(name.to_ascii_lowercase(), value.into());
		self
	}

	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	/// Looks up a header by name (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}
}

/// Performs the single POST of a capture.
///
/// Implementations must be safe to call concurrently; overlapping captures
/// share one transport.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;

	/// Stops the transport from accepting further posts.
	async fn close(&self) {}
}

/// Returns the SDK User-Agent string.
///
/// Format: `loom-raven/{version}`
pub fn user_agent() -> String {
	format!("{SDK_NAME}/{SDK_VERSION}")
}

/// Default [`Transport`] backed by a `reqwest` client.
pub struct ReqwestTransport {
	client: Client,
	closed: AtomicBool,
}

impl ReqwestTransport {
	/// Creates a transport with the SDK User-Agent and the given timeout.
	pub fn new(timeout: Duration) -> Result<Self, TransportError> {
		let client = Client::builder()
			.user_agent(user_agent())
			.timeout(timeout)
			.build()?;
		Ok(Self::with_client(client))
	}

	/// Wraps an existing client, e.g. one with custom proxy or TLS settings.
	pub fn with_client(client: Client) -> Self {
		Self {
			client,
			closed: AtomicBool::new(false),
		}
	}
}

#[async_trait]
impl Transport for ReqwestTransport {
	async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
		if self.closed.load(Ordering::SeqCst) {
			return Err(TransportError::Closed);
		}

		let mut builder = self.client.post(&request.url);
		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}

		let response = builder.body(request.body).send().await?;

		let status = response.status().as_u16();
		let headers = response
			.headers()
			.iter()
			.filter_map(|(name, value)| {
				value
					.to_str()
					.ok()
					.map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
			})
			.collect();
		let body = response.text().await?;

		debug!(status, "Store endpoint responded");

		Ok(TransportResponse {
			status,
			headers,
			body,
		})
	}

	/// Rejects further posts. The pooled connections are released when the
	/// transport itself is dropped.
	async fn close(&self) {
		self.closed.store(true, Ordering::SeqCst);
	}
}
