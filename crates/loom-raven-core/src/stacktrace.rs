// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack trace types and the stack trace wire encoder.

use rustc_demangle::demangle;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Stack trace attached to an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StackTrace {
	#[default]
	Absent,
	/// Backtrace text, as printed by `std::backtrace::Backtrace`.
	Raw(String),
	Structured(Stacktrace),
}

impl StackTrace {
	/// Encodes the trace as `{"frames": [...]}`, oldest call first.
	///
	/// Returns `None` for [`StackTrace::Absent`].
	pub fn to_wire(&self) -> Option<Value> {
		let frames = match self {
			Self::Absent => return None,
			Self::Raw(text) => parse_backtrace_string(text),
			Self::Structured(stacktrace) => stacktrace.frames.clone(),
		};
		let frames: Vec<Frame> = frames.into_iter().rev().collect();
		Some(json!({ "frames": frames }))
	}
}

impl From<Stacktrace> for StackTrace {
	fn from(stacktrace: Stacktrace) -> Self {
		Self::Structured(stacktrace)
	}
}

impl From<String> for StackTrace {
	fn from(text: String) -> Self {
		Self::Raw(text)
	}
}

/// Structured stack trace. Frames are ordered innermost call first, the way a
/// backtrace is captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stacktrace {
	pub frames: Vec<Frame>,
}

/// A single stack frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub function: Option<String>,
	/// Module path, e.g. `my_app::handlers`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub module: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filename: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub abs_path: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lineno: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub colno: Option<u32>,
	/// User code vs dependency
	#[serde(default)]
	pub in_app: bool,
}

/// Parse backtrace text into frames, innermost first.
///
/// Understands the `std::backtrace::Backtrace` layout:
///
/// ```text
///    0: my_app::handlers::process
///              at ./src/handlers.rs:42:9
/// ```
///
/// Any other non-empty line is taken as a bare function name.
pub fn parse_backtrace_string(text: &str) -> Vec<Frame> {
	let mut frames: Vec<Frame> = Vec::new();

	for line in text.lines() {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}

		if let Some(location) = line.strip_prefix("at ") {
			if let Some(frame) = frames.last_mut() {
				apply_location(frame, location.trim());
			}
			continue;
		}

		if let Some(frame) = parse_frame_line(line) {
			frames.push(frame);
		}
	}

	frames
}

/// Parse a single `N: function` (or bare `function`) line into a Frame.
fn parse_frame_line(line: &str) -> Option<Frame> {
	let function_part = match line.split_once(':') {
		Some((prefix, rest)) if prefix.trim().parse::<u32>().is_ok() => rest.trim(),
		_ => line,
	};

	if function_part.is_empty() {
		return None;
	}

	let demangled = demangle(function_part).to_string();
	let module = demangled.rfind("::").map(|idx| demangled[..idx].to_string());
	let in_app = is_in_app_frame(&demangled);

	Some(Frame {
		function: Some(demangled),
		module,
		in_app,
		..Default::default()
	})
}

/// Apply a `path:line[:col]` location to a frame.
fn apply_location(frame: &mut Frame, location: &str) {
	let mut parts = location.rsplitn(3, ':');
	let last = parts.next();
	let middle = parts.next();
	let rest = parts.next();

	let (path, lineno, colno) = match (rest, middle, last) {
		(Some(path), Some(line), Some(col)) if line.parse::<u32>().is_ok() => {
			(path.to_string(), line.parse().ok(), col.parse().ok())
		}
		(_, Some(_), Some(line)) if line.parse::<u32>().is_ok() => {
			let path = location[..location.len() - line.len() - 1].to_string();
			(path, line.parse().ok(), None)
		}
		_ => (location.to_string(), None, None),
	};

	if path.starts_with('/') {
		frame.abs_path = Some(path.clone());
	}
	frame.filename = Some(path);
	frame.lineno = lineno;
	frame.colno = colno;
}

/// Determine if a frame is from user application code vs standard library.
pub fn is_in_app_frame(function: &str) -> bool {
	const SYSTEM_PREFIXES: &[&str] = &[
		"std::",
		"core::",
		"alloc::",
		"<std::",
		"<core::",
		"<alloc::",
		"tokio::",
		"<tokio::",
		"futures::",
		"<futures::",
		"async_trait::",
		"tracing::",
		"<tracing::",
		"backtrace::",
		"<backtrace::",
		"loom_raven::",
		"loom_raven_core::",
		"rust_begin_unwind",
		"rust_panic",
		"__rust_",
		"_rust_",
	];

	const SYSTEM_CONTAINS: &[&str] = &[
		"::panic::",
		"::panicking::",
		"::rt::",
		"::runtime::",
		"::sys_common::",
	];

	!SYSTEM_PREFIXES.iter().any(|p| function.starts_with(p))
		&& !SYSTEM_CONTAINS.iter().any(|c| function.contains(c))
}
