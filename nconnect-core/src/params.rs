//! Default-parameter merging
//!
//! Every method descriptor may carry a default parameter map, and every call
//! may supply its own. The merged map starts empty, takes the defaults, then
//! takes the call's parameters on top.
//!
//! The overlay rule matters more than it looks: a later source only
//! overrides keys it actually defines. A key present in the defaults but
//! absent from the call parameters keeps its default value, and no key ever
//! appears that was not in one of the sources. An absent key is the Rust
//! rendering of the original's "undefined"; an explicit JSON `null` is a
//! defined value and overlays like any other.

use serde_json::{Map, Value};

/// Parameter map sent in a request envelope.
pub type Params = Map<String, Value>;

/// Merge call parameters over per-method defaults.
///
/// # Examples
///
/// ```rust
/// use nconnect_core::params::{merge_params, Params};
/// use serde_json::json;
///
/// let mut defaults = Params::new();
/// defaults.insert("maxSize".into(), json!(1024));
///
/// let mut call = Params::new();
/// call.insert("maxSize".into(), json!(64));
///
/// let merged = merge_params(Some(&defaults), Some(&call));
/// assert_eq!(merged.get("maxSize"), Some(&json!(64)));
///
/// let merged = merge_params(Some(&defaults), None);
/// assert_eq!(merged, defaults);
/// ```
pub fn merge_params(defaults: Option<&Params>, call: Option<&Params>) -> Params {
    let mut merged = Params::new();
    for source in [defaults, call].into_iter().flatten() {
        for (key, value) in source {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, Value)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn call_params_override_defaults() {
        let defaults = map(&[("a", json!(1)), ("b", json!(2))]);
        let call = map(&[("b", json!(20)), ("c", json!(30))]);
        let merged = merge_params(Some(&defaults), Some(&call));
        assert_eq!(
            merged,
            map(&[("a", json!(1)), ("b", json!(20)), ("c", json!(30))])
        );
    }

    #[test]
    fn no_call_params_yields_defaults_unchanged() {
        let defaults = map(&[("a", json!(1)), ("b", json!(null))]);
        assert_eq!(merge_params(Some(&defaults), None), defaults);
    }

    #[test]
    fn no_sources_yields_empty_map() {
        assert!(merge_params(None, None).is_empty());
    }

    #[test]
    fn absent_key_keeps_default_value() {
        let defaults = map(&[("keep", json!("default"))]);
        let call = map(&[("other", json!(1))]);
        let merged = merge_params(Some(&defaults), Some(&call));
        assert_eq!(merged.get("keep"), Some(&json!("default")));
    }

    #[test]
    fn null_is_a_defined_value_and_overlays() {
        let defaults = map(&[("a", json!(1))]);
        let call = map(&[("a", json!(null))]);
        let merged = merge_params(Some(&defaults), Some(&call));
        assert_eq!(merged.get("a"), Some(&Value::Null));
    }

    #[test]
    fn no_keys_outside_the_union() {
        let defaults = map(&[("a", json!(1))]);
        let call = map(&[("b", json!(2))]);
        let merged = merge_params(Some(&defaults), Some(&call));
        let mut keys: Vec<_> = merged.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
