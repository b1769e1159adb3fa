//! Deep merge for configuration documents.

use serde_yaml::Value;

/// Deep-merge `overlay` into `base`.
///
/// Mappings merge recursively; any other overlay value replaces the base
/// value in place. Overlay keys missing from the base are added. The merge
/// is non-destructive: no base key is ever deleted, only shadowed or
/// extended.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Mapping(overlay_map) => {
            if let Value::Mapping(base_map) = base {
                for (key, value) in overlay_map {
                    match base_map.get_mut(&key) {
                        Some(slot) => deep_merge(slot, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            } else {
                *base = Value::Mapping(overlay_map);
            }
        }
        other => *base = other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_override_wins_on_scalars() {
        let mut base = yaml("a: 0\nb: 2");
        deep_merge(&mut base, yaml("a: 1"));
        assert_eq!(base, yaml("a: 1\nb: 2"));
    }

    #[test]
    fn test_disjoint_keys_union() {
        let mut base = yaml("a: 1");
        deep_merge(&mut base, yaml("b: 2"));
        assert_eq!(base, yaml("a: 1\nb: 2"));
    }

    #[test]
    fn test_nested_mappings_merge_recursively() {
        let mut base = yaml("author:\n  name: Default\n  email: d@x.com");
        deep_merge(&mut base, yaml("author:\n  name: Override"));
        assert_eq!(base, yaml("author:\n  name: Override\n  email: d@x.com"));
    }

    #[test]
    fn test_scalar_replaces_mapping() {
        let mut base = yaml("templates:\n  standard:\n    description: x");
        deep_merge(&mut base, yaml("templates: oops"));
        assert_eq!(base, yaml("templates: oops"));
    }
}
