//! View parameters — the open key/value bag a screen receives.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key carrying the id of the buyer client being edited.
pub const EDITING_CLIENT_ID: &str = "editingClientId";
/// Key pre-selecting a client in a form opened from another screen.
pub const PRE_SELECTED_CLIENT_ID: &str = "preSelectedClientId";
/// Key carrying the id of the property being edited.
pub const EDITING_PROPERTY_ID: &str = "editingPropertyId";
/// Key set by [`crate::NavigationState::resolve_return`] on the restored view.
pub const IS_RETURNING: &str = "isReturning";

/// A single parameter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Parameters passed to the active view.
///
/// Deliberately schemaless: each screen reads only the keys it expects and
/// must tolerate any key being absent (an absent editing id means "create
/// new", not an error).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewParams(HashMap<String, ParamValue>);

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for call sites constructing params inline.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.0.get(key) {
            Some(ParamValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(ParamValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_read_as_none() {
        let params = ViewParams::new();
        assert_eq!(params.get_str(EDITING_CLIENT_ID), None);
        assert_eq!(params.get_bool(IS_RETURNING), None);
    }

    #[test]
    fn test_builder_and_typed_reads() {
        let params = ViewParams::new()
            .with(EDITING_PROPERTY_ID, "prop-17")
            .with("page", 3i64)
            .with(IS_RETURNING, true);
        assert_eq!(params.get_str(EDITING_PROPERTY_ID), Some("prop-17"));
        assert_eq!(params.get_int("page"), Some(3));
        assert_eq!(params.get_bool(IS_RETURNING), Some(true));
        // Wrong-type reads are None, not panics.
        assert_eq!(params.get_int(EDITING_PROPERTY_ID), None);
    }

    #[test]
    fn test_json_round_trip_keeps_primitive_shapes() {
        let params = ViewParams::new()
            .with(EDITING_CLIENT_ID, "c-9")
            .with(IS_RETURNING, true);
        let json = serde_json::to_string(&params).unwrap();
        let back: ViewParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
