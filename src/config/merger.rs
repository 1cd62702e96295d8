//! Layered merging of YAML configuration documents.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A `null` in the overlay removes the key from the base
//! - An empty (null) document leaves the base unchanged

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base` in place.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Merge documents in order; later documents take precedence.
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut merged = Value::Mapping(Mapping::new());
    for layer in layers.into_iter().filter(|layer| !layer.is_null()) {
        merge_into(&mut merged, layer);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_mappings_are_merged() {
        let mut base = yaml(
            r#"
inventories:
  rpm:
    command: [rpm, -qa]
    pattern: "(?P<line>.*)"
"#,
        );
        merge_into(
            &mut base,
            yaml(
                r#"
inventories:
  rpm:
    pattern: "(?P<name>\\S+)"
"#,
            ),
        );

        assert_eq!(base["inventories"]["rpm"]["pattern"], r"(?P<name>\S+)");
        assert_eq!(base["inventories"]["rpm"]["command"][0], "rpm");
    }

    #[test]
    fn sequences_are_replaced() {
        let mut base = yaml("command: [a, b, c]");
        merge_into(&mut base, yaml("command: [d]"));
        assert_eq!(base["command"].as_sequence().unwrap().len(), 1);
        assert_eq!(base["command"][0], "d");
    }

    #[test]
    fn null_removes_key() {
        let mut base = yaml("settings:\n  timeout_secs: 10\n  python: python3");
        merge_into(&mut base, yaml("settings:\n  timeout_secs: ~"));
        assert!(base["settings"].get("timeout_secs").is_none());
        assert_eq!(base["settings"]["python"], "python3");
    }

    #[test]
    fn scalar_overrides_scalar() {
        let mut base = yaml("format: rst");
        merge_into(&mut base, yaml("format: html"));
        assert_eq!(base["format"], "html");
    }

    #[test]
    fn empty_layers_are_skipped() {
        let merged = merge_layers(vec![yaml("format: rst"), Value::Null, yaml("python: python2")]);
        assert_eq!(merged["format"], "rst");
        assert_eq!(merged["python"], "python2");
    }

    #[test]
    fn no_layers_is_empty_mapping() {
        assert_eq!(merge_layers(Vec::new()), Value::Mapping(Mapping::new()));
    }
}
