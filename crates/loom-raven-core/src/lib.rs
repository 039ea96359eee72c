// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Loom Raven event reporting SDK.
//!
//! This crate holds everything about an event that does not touch the network:
//! - [`Dsn`]: decomposes a DSN into store endpoint and credentials
//! - [`Event`]: the reportable record and its JSON wire encoding
//! - [`merged`]: shallow attribute merging (environment defaults, then event)
//! - [`auth_header`]: the `X-Sentry-Auth` header value
//! - [`CaptureContext`]: immutable environment defaults built from
//!   [`MetadataProvider`]s
//!
//! The HTTP client lives in `loom-raven`.

pub mod auth;
pub mod context;
pub mod dsn;
pub mod error;
pub mod event;
pub mod level;
pub mod merge;
pub mod stacktrace;

pub use auth::{auth_header, AUTH_HEADER, PROTOCOL_VERSION};
pub use context::{ApplicationMetadata, BrowserMetadata, CaptureContext, MetadataProvider};
pub use dsn::Dsn;
pub use error::{CoreError, Result};
pub use event::{Event, Exception, DEFAULT_FINGERPRINT, PLATFORM, SDK_NAME, SDK_VERSION};
pub use level::Level;
pub use merge::{merge, merged};
pub use stacktrace::{parse_backtrace_string, Frame, StackTrace, Stacktrace};
