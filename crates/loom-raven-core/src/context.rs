// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Environment metadata and the capture context built from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Application identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMetadata {
	pub application_id: Option<String>,
	pub application_name: Option<String>,
	pub application_version: Option<String>,
}

/// Browser/host window details, collected by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserMetadata {
	pub browser_source: Option<String>,
	pub browser_string: Option<String>,
	pub flash_version: Option<String>,
	pub screen_orientation: Option<String>,
	pub screen_resolution: Option<String>,
	pub tab_id: Option<String>,
	pub viewport: Option<String>,
	pub window_id: Option<String>,
}

/// A source of environment-wide tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetadataProvider {
	Application(ApplicationMetadata),
	Browser(BrowserMetadata),
}

impl MetadataProvider {
	/// Tags contributed by this provider. Unset fields contribute nothing.
	pub fn tags(&self) -> Vec<(&'static str, &str)> {
		let fields: Vec<(&'static str, &Option<String>)> = match self {
			Self::Application(app) => vec![
				("applicationId", &app.application_id),
				("applicationName", &app.application_name),
				("applicationVersion", &app.application_version),
			],
			Self::Browser(browser) => vec![
				("browserSource", &browser.browser_source),
				("browserString", &browser.browser_string),
				("flashVersion", &browser.flash_version),
				("screenOrientation", &browser.screen_orientation),
				("screenResolution", &browser.screen_resolution),
				("tabId", &browser.tab_id),
				("viewport", &browser.viewport),
				("windowId", &browser.window_id),
			],
		};

		fields
			.into_iter()
			.filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
			.collect()
	}
}

impl From<ApplicationMetadata> for MetadataProvider {
	fn from(metadata: ApplicationMetadata) -> Self {
		Self::Application(metadata)
	}
}

impl From<BrowserMetadata> for MetadataProvider {
	fn from(metadata: BrowserMetadata) -> Self {
		Self::Browser(metadata)
	}
}

/// Environment-wide defaults applied beneath every captured event.
///
/// A context is an immutable value. Re-initializing produces a new context
/// rather than changing one that in-flight captures may be reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureContext {
	defaults: Event,
}

impl CaptureContext {
	pub fn new(defaults: Event) -> Self {
		Self { defaults }
	}

	/// Builds a context from `defaults` whose tags are replaced wholesale by
	/// the tags the providers contribute.
	pub fn from_providers(defaults: Event, providers: &[MetadataProvider]) -> Self {
		let tags: HashMap<String, String> = providers
			.iter()
			.flat_map(MetadataProvider::tags)
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect();

		Self {
			defaults: Event { tags, ..defaults },
		}
	}

	pub fn defaults(&self) -> &Event {
		&self.defaults
	}

	pub fn tags(&self) -> &HashMap<String, String> {
		&self.defaults.tags
	}
}
