// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event id and clock capabilities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Produces the `event_id` of each captured event.
pub trait EventIdGenerator: Send + Sync {
	fn generate(&self) -> String;
}

impl<F> EventIdGenerator for F
where
	F: Fn() -> String + Send + Sync,
{
	fn generate(&self) -> String {
		self()
	}
}

/// Random v4 UUID rendered as 32 lowercase hex characters, no separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidEventIdGenerator;

impl EventIdGenerator for UuidEventIdGenerator {
	fn generate(&self) -> String {
		Uuid::new_v4().simple().to_string()
	}
}

/// Source of the current time for auth headers and event timestamps.
pub trait Clock: Send + Sync {
	fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}
