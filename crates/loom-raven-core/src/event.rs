// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The reportable event and its wire encoding.

use std::collections::HashMap;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::level::Level;
use crate::stacktrace::StackTrace;

/// SDK name reported with every event.
pub const SDK_NAME: &str = "loom-raven";
/// SDK version reported with every event.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Platform reported with every event.
pub const PLATFORM: &str = "rust";

/// Fingerprint entry asking the server to combine a custom fingerprint with
/// its built-in grouping.
pub const DEFAULT_FINGERPRINT: &str = "{{ default }}";

/// An exception reduced to its type name and display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
	#[serde(rename = "type")]
	pub type_name: String,
	pub value: String,
}

impl Exception {
	pub fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			value: value.into(),
		}
	}

	/// Builds an exception from an error of a concrete type, using its Rust
	/// type name.
	///
	/// A `dyn Error` has no concrete name to report, so trait objects are not
	/// accepted; build those with [`Exception::new`] and an explicit type.
	pub fn from_error<E: StdError>(error: &E) -> Self {
		Self::new(std::any::type_name::<E>(), error.to_string())
	}
}

/// One reportable event.
///
/// Every field is optional. Absent strings and empty collections are left out
/// of the wire payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
	pub logger: Option<String>,
	pub server_name: Option<String>,
	pub release: Option<String>,
	pub environment: Option<String>,
	pub message: Option<String>,
	pub exception: Option<Exception>,
	pub stacktrace: StackTrace,
	pub level: Option<Level>,
	pub culprit: Option<String>,
	/// Indexed, searchable key/value pairs.
	pub tags: HashMap<String, String>,
	/// Arbitrary additional data.
	pub extra: Map<String, Value>,
	/// Grouping fingerprint. May contain [`DEFAULT_FINGERPRINT`].
	pub fingerprint: Vec<String>,
}

impl Event {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn with_level(mut self, level: Level) -> Self {
		self.level = Some(level);
		self
	}

	pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
		self.logger = Some(logger.into());
		self
	}

	pub fn with_culprit(mut self, culprit: impl Into<String>) -> Self {
		self.culprit = Some(culprit.into());
		self
	}

	pub fn with_exception(mut self, exception: Exception) -> Self {
		self.exception = Some(exception);
		self
	}

	pub fn with_stacktrace(mut self, stacktrace: impl Into<StackTrace>) -> Self {
		self.stacktrace = stacktrace.into();
		self
	}

	pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.tags.insert(key.into(), value.into());
		self
	}

	pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
		self.extra.insert(key.into(), value);
		self
	}

	pub fn with_fingerprint<I, S>(mut self, fingerprint: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fingerprint = fingerprint.into_iter().map(Into::into).collect();
		self
	}

	/// Encodes the event as the JSON object sent to the store endpoint.
	///
	/// `platform` and `sdk` are always present; every other key appears only
	/// when the corresponding field carries a value.
	pub fn to_wire(&self) -> Map<String, Value> {
		let mut wire = Map::new();

		insert_str(&mut wire, "logger", &self.logger);
		insert_str(&mut wire, "server_name", &self.server_name);
		insert_str(&mut wire, "release", &self.release);
		insert_str(&mut wire, "environment", &self.environment);
		insert_str(&mut wire, "message", &self.message);
		insert_str(&mut wire, "culprit", &self.culprit);

		if let Some(level) = self.level {
			wire.insert("level".to_string(), Value::from(level.as_str()));
		}

		if let Some(exception) = &self.exception {
			wire.insert(
				"exception".to_string(),
				json!([{ "type": exception.type_name, "value": exception.value }]),
			);
		}

		if let Some(stacktrace) = self.stacktrace.to_wire() {
			wire.insert("stacktrace".to_string(), stacktrace);
		}

		if !self.tags.is_empty() {
			wire.insert("tags".to_string(), json!(self.tags));
		}

		if !self.extra.is_empty() {
			wire.insert("extra".to_string(), Value::Object(self.extra.clone()));
		}

		if !self.fingerprint.is_empty() {
			wire.insert("fingerprint".to_string(), json!(self.fingerprint));
		}

		wire.insert("platform".to_string(), Value::from(PLATFORM));
		wire.insert(
			"sdk".to_string(),
			json!({ "name": SDK_NAME, "version": SDK_VERSION }),
		);

		wire
	}
}

fn insert_str(wire: &mut Map<String, Value>, key: &str, value: &Option<String>) {
	if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
		wire.insert(key.to_string(), Value::from(value));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stacktrace::{Frame, Stacktrace};

	fn keys(wire: &Map<String, Value>) -> Vec<&str> {
		let mut keys: Vec<&str> = wire.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	#[test]
	fn message_only_event_has_minimal_keys() {
		let wire = Event::new().with_message("hello").to_wire();
		assert_eq!(keys(&wire), vec!["message", "platform", "sdk"]);
		assert_eq!(wire["message"], "hello");
		assert_eq!(wire["platform"], "rust");
		assert_eq!(wire["sdk"]["name"], SDK_NAME);
		assert_eq!(wire["sdk"]["version"], SDK_VERSION);
	}

	#[test]
	fn empty_event_has_only_always_present_keys() {
		let wire = Event::default().to_wire();
		assert_eq!(keys(&wire), vec!["platform", "sdk"]);
	}

	#[test]
	fn empty_collections_and_strings_are_omitted() {
		let event = Event {
			message: Some(String::new()),
			tags: HashMap::new(),
			extra: Map::new(),
			fingerprint: Vec::new(),
			..Default::default()
		};
		assert_eq!(keys(&event.to_wire()), vec!["platform", "sdk"]);
	}

	#[test]
	fn exception_encodes_as_single_type_value_pair() {
		let event = Event::new().with_exception(Exception::new("TypeError", "x is undefined"));
		let wire = event.to_wire();
		assert_eq!(
			wire["exception"],
			json!([{ "type": "TypeError", "value": "x is undefined" }])
		);
	}

	#[test]
	fn exception_from_error_uses_type_name_and_display() {
		let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
		let exception = Exception::from_error(&err);
		assert!(exception.type_name.ends_with("io::error::Error"));
		assert_eq!(exception.value, "config missing");
	}

	#[derive(Debug)]
	struct QuotaExceeded;

	impl std::fmt::Display for QuotaExceeded {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			f.write_str("quota exceeded")
		}
	}

	impl StdError for QuotaExceeded {}

	#[test]
	fn exception_from_error_names_the_concrete_type() {
		let exception = Exception::from_error(&QuotaExceeded);
		assert_eq!(
			exception.type_name,
			"loom_raven_core::event::tests::QuotaExceeded"
		);
		assert!(!exception.type_name.contains("dyn "));
	}

	#[test]
	fn fingerprint_is_emitted_verbatim() {
		let event = Event::new().with_fingerprint([DEFAULT_FINGERPRINT, "db-timeout"]);
		assert_eq!(
			event.to_wire()["fingerprint"],
			json!(["{{ default }}", "db-timeout"])
		);
	}

	#[test]
	fn full_event_encodes_every_field() {
		let event = Event::new()
			.with_logger("worker")
			.with_message("boom")
			.with_level(Level::Fatal)
			.with_culprit("worker::run")
			.with_tag("region", "eu")
			.with_extra("attempt", json!(3))
			.with_stacktrace(Stacktrace {
				frames: vec![Frame {
					function: Some("worker::run".to_string()),
					in_app: true,
					..Default::default()
				}],
			});
		let event = Event {
			server_name: Some("web-01".to_string()),
			release: Some("1.2.3".to_string()),
			environment: Some("staging".to_string()),
			..event
		};

		let wire = event.to_wire();
		assert_eq!(
			keys(&wire),
			vec![
				"culprit",
				"environment",
				"extra",
				"level",
				"logger",
				"message",
				"platform",
				"release",
				"sdk",
				"server_name",
				"stacktrace",
				"tags",
			]
		);
		assert_eq!(wire["level"], "fatal");
		assert_eq!(wire["tags"], json!({ "region": "eu" }));
		assert_eq!(wire["extra"], json!({ "attempt": 3 }));
		assert_eq!(wire["stacktrace"]["frames"][0]["function"], "worker::run");
	}

	#[test]
	fn absent_stacktrace_omits_key() {
		let wire = Event::new().with_message("m").to_wire();
		assert!(!wire.contains_key("stacktrace"));
	}
}
