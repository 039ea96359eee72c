// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shallow merging of wire attribute maps.

use serde_json::{Map, Value};

/// Merges `overrides` into `base` in place.
///
/// Keys present in `overrides` replace the value in `base` wholesale, nested
/// objects included. Keys only present in `base` are kept.
pub fn merge(base: &mut Map<String, Value>, overrides: Map<String, Value>) {
	for (key, value) in overrides {
		base.insert(key, value);
	}
}

/// Returns `base` merged with `overrides`. See [`merge`].
pub fn merged(mut base: Map<String, Value>, overrides: Map<String, Value>) -> Map<String, Value> {
	merge(&mut base, overrides);
	base
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn object(value: Value) -> Map<String, Value> {
		match value {
			Value::Object(map) => map,
			_ => panic!("expected object"),
		}
	}

	#[test]
	fn override_wins_and_base_keys_survive() {
		let result = merged(
			object(json!({ "a": 1, "b": 2 })),
			object(json!({ "b": 3, "c": 4 })),
		);
		assert_eq!(Value::Object(result), json!({ "a": 1, "b": 3, "c": 4 }));
	}

	#[test]
	fn nested_objects_are_replaced_not_merged() {
		let result = merged(
			object(json!({ "tags": { "env": "prod", "region": "eu" } })),
			object(json!({ "tags": { "user": "42" } })),
		);
		assert_eq!(result["tags"], json!({ "user": "42" }));
	}

	#[test]
	fn empty_override_is_identity() {
		let base = object(json!({ "a": 1 }));
		assert_eq!(merged(base.clone(), Map::new()), base);
	}

	proptest! {
		#[test]
		fn merge_precedence(
			base in prop::collection::hash_map("[a-e]", 0i64..100, 0..5),
			overrides in prop::collection::hash_map("[a-e]", 100i64..200, 0..5),
		) {
			let base_map: Map<String, Value> =
				base.iter().map(|(k, v)| (k.clone(), json!(v))).collect();
			let override_map: Map<String, Value> =
				overrides.iter().map(|(k, v)| (k.clone(), json!(v))).collect();

			let result = merged(base_map, override_map);

			for (key, value) in &overrides {
				prop_assert_eq!(&result[key.as_str()], &json!(value));
			}
			for (key, value) in &base {
				if !overrides.contains_key(key) {
					prop_assert_eq!(&result[key.as_str()], &json!(value));
				}
			}
			let expected_len = base.keys().chain(overrides.keys()).collect::<std::collections::HashSet<_>>().len();
			prop_assert_eq!(result.len(), expected_len);
		}
	}
}
