//! # Canonical Serialization — JCS Byte Production
//!
//! Defines [`CanonicalBytes`], the sole construction path for bytes that feed
//! digest computation and signing across the attestation stack.
//!
//! ## Security Invariant
//!
//! The inner `Vec<u8>` is private. The only constructors are
//! [`CanonicalBytes::new()`] and [`CanonicalBytes::from_value()`], both of
//! which run the coercion pipeline before RFC 8785 serialization. Any
//! function that hashes or signs structured data must accept
//! `&CanonicalBytes`, so a non-canonical byte sequence can never reach a
//! digest. Two logically identical records — regardless of field declaration
//! order or object-key order — always canonicalize to the same bytes, which
//! is what makes input commitments independently recomputable.
//!
//! ## Coercion Rules
//!
//! 1. **Floats are rejected.** Non-integer numbers have serialization edge
//!    cases that differ across JSON libraries; quantities must be strings or
//!    integers.
//! 2. `null`, `bool`, `string`, and integer values pass through unchanged.
//! 3. Objects and arrays are recursed.
//!
//! Serialization then uses `serde_jcs` for RFC 8785 output: keys sorted
//! lexicographically, compact separators, UTF-8.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization with float rejection.
///
/// # Invariants
///
/// - The only constructors are [`CanonicalBytes::new()`] and
///   [`CanonicalBytes::from_value()`].
/// - The byte sequence is valid UTF-8 JSON with sorted object keys and
///   compact separators.
/// - No float values appear anywhere in the serialized tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value contains
    /// a non-integer number, or [`CanonicalizationError::SerializationFailed`]
    /// if JSON serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(value)
    }

    /// Construct canonical bytes from an already-built JSON value.
    ///
    /// Used where a caller needs to edit the value tree before
    /// canonicalization (e.g. stripping a proof field from a signing input).
    pub fn from_value(value: Value) -> Result<Self, CanonicalizationError> {
        let coerced = coerce_json_value(value)?;
        let s = serde_jcs::to_string(&coerced)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation or signing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively validate a JSON value tree for canonical serialization.
///
/// Scalars pass through; objects and arrays recurse; non-integer numbers are
/// rejected. Object keys are already strings at the `serde_json` level.
fn coerce_json_value(value: Value) -> Result<Value, CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(value),
        Value::Number(ref n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(value)
        }
        Value::Object(map) => {
            let mut coerced = serde_json::Map::new();
            for (k, v) in map {
                coerced.insert(k, coerce_json_value(v)?);
            }
            Ok(Value::Object(coerced))
        }
        Value::Array(arr) => {
            let coerced: Result<Vec<_>, _> = arr.into_iter().map(coerce_json_value).collect();
            Ok(Value::Array(coerced?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_keys_compact_separators() {
        let data = serde_json::json!({"b": 2, "a": 1, "c": "checkpoint"});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"a":1,"b":2,"c":"checkpoint"}"#);
    }

    #[test]
    fn key_order_does_not_affect_bytes() {
        let a = serde_json::json!({"model_version": "m-3", "card_id": "card-7"});
        let b = serde_json::json!({"card_id": "card-7", "model_version": "m-3"});
        let ca = CanonicalBytes::new(&a).unwrap();
        let cb = CanonicalBytes::new(&b).unwrap();
        assert_eq!(ca.as_bytes(), cb.as_bytes());
    }

    #[test]
    fn nested_objects_sorted() {
        let data = serde_json::json!({
            "outer": {"z": 1, "a": 2},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"list":[3,2,1],"outer":{"a":2,"z":1}}"#);
    }

    #[test]
    fn float_rejected() {
        let data = serde_json::json!({"confidence": 0.95});
        match CanonicalBytes::new(&data) {
            Err(CanonicalizationError::FloatRejected(f)) => assert_eq!(f, 0.95),
            other => panic!("expected FloatRejected, got {other:?}"),
        }
    }

    #[test]
    fn deeply_nested_float_rejected() {
        let data = serde_json::json!({"a": {"b": [{"c": 1.5}]}});
        assert!(CanonicalBytes::new(&data).is_err());
    }

    #[test]
    fn integers_and_scalars_pass_through() {
        let data = serde_json::json!({"n": -42, "big": 9999999999i64, "flag": true, "none": null});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(s, r#"{"big":9999999999,"flag":true,"n":-42,"none":null}"#);
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(
            CanonicalBytes::new(&serde_json::json!({})).unwrap().as_bytes(),
            b"{}"
        );
        assert_eq!(
            CanonicalBytes::new(&serde_json::json!([])).unwrap().as_bytes(),
            b"[]"
        );
    }

    #[test]
    fn from_value_matches_new() {
        let data = serde_json::json!({"x": 1, "y": "two"});
        let via_new = CanonicalBytes::new(&data).unwrap();
        let via_value = CanonicalBytes::from_value(data).unwrap();
        assert_eq!(via_new, via_value);
    }

    #[test]
    fn unicode_preserved_as_utf8() {
        let data = serde_json::json!({"name": "\u{00e9}valuation"});
        let cb = CanonicalBytes::new(&data).unwrap();
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(s.contains('\u{00e9}'));
    }

    #[test]
    fn len_and_is_empty() {
        let cb = CanonicalBytes::new(&serde_json::json!({"k": "v"})).unwrap();
        assert!(!cb.is_empty());
        assert_eq!(cb.len(), cb.as_bytes().len());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for JSON values in the float-free domain the coercion
    /// pipeline accepts.
    fn json_value_no_floats() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,40}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..8).prop_map(|m| {
                    let map: serde_json::Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        /// Canonicalization succeeds for every float-free value.
        #[test]
        fn never_fails_on_float_free_input(value in json_value_no_floats()) {
            prop_assert!(CanonicalBytes::new(&value).is_ok());
        }

        /// Same input, same bytes — the determinism the commitment hasher
        /// relies on.
        #[test]
        fn deterministic(value in json_value_no_floats()) {
            let a = CanonicalBytes::new(&value).unwrap();
            let b = CanonicalBytes::new(&value).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }

        /// Canonical bytes are valid JSON and round-trip through serde_json.
        #[test]
        fn output_is_valid_json(value in json_value_no_floats()) {
            let cb = CanonicalBytes::new(&value).unwrap();
            let parsed: Result<Value, _> = serde_json::from_slice(cb.as_bytes());
            prop_assert!(parsed.is_ok());
        }

        /// Object keys come out sorted.
        #[test]
        fn keys_sorted(keys in prop::collection::btree_set("[a-z]{1,8}", 2..6)) {
            let map: serde_json::Map<String, Value> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| (k.clone(), serde_json::json!(i)))
                .collect();
            let cb = CanonicalBytes::new(&Value::Object(map)).unwrap();
            let parsed: serde_json::Map<String, Value> =
                serde_json::from_slice(cb.as_bytes()).unwrap();
            let output_keys: Vec<&String> = parsed.keys().collect();
            let mut sorted = output_keys.clone();
            sorted.sort();
            prop_assert_eq!(output_keys, sorted);
        }

        /// Every finite non-integer float is rejected, wherever it appears.
        #[test]
        fn floats_always_rejected(f in any::<f64>().prop_filter("non-integer", |f| {
            f.fract() != 0.0 && f.is_finite()
        })) {
            let data = serde_json::json!({"val": f});
            prop_assert!(CanonicalBytes::new(&data).is_err());
        }
    }
}
