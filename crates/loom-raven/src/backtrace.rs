// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Backtrace capture for manually reported errors.

use std::backtrace::{Backtrace, BacktraceStatus};

use loom_raven_core::{parse_backtrace_string, Stacktrace};

/// Parse a Rust backtrace into a Stacktrace.
///
/// Disabled or unsupported backtraces yield no frames.
pub fn parse_backtrace(backtrace: &Backtrace) -> Stacktrace {
	if backtrace.status() != BacktraceStatus::Captured {
		return Stacktrace::default();
	}
	let frames = parse_backtrace_string(&backtrace.to_string());
	Stacktrace { frames }
}

/// Capture a fresh backtrace and parse it.
pub fn capture_backtrace() -> Stacktrace {
	parse_backtrace(&Backtrace::force_capture())
}
