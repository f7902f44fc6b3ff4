use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_yaml::Value;

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("failed to parse {code} dictionary: {source}")]
    Parse {
        code: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{code} dictionary must be a mapping at the top level")]
    NotAMapping { code: String },
}

/// Nested translation table for one language.
#[derive(Debug, Clone)]
pub struct Dictionary {
    root: Value,
}

static EMPTY: Dictionary = Dictionary { root: Value::Null };

/// One entry of repeated content, e.g. a feature card or an FAQ pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    fields: BTreeMap<String, String>,
}

impl Item {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl Dictionary {
    pub fn from_yaml(code: &str, source: &str) -> Result<Self, LocaleError> {
        let root: Value = serde_yaml::from_str(source).map_err(|source| LocaleError::Parse {
            code: code.to_string(),
            source,
        })?;
        if !root.is_mapping() {
            return Err(LocaleError::NotAMapping {
                code: code.to_string(),
            });
        }
        Ok(Self { root })
    }

    pub(crate) fn empty_ref() -> &'static Dictionary {
        &EMPTY
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.root, |node, segment| match node {
            Value::Mapping(map) => map.get(segment),
            Value::Sequence(seq) => segment.parse::<usize>().ok().and_then(|idx| seq.get(idx)),
            _ => None,
        })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Scalar text at `path`. Blank strings count as missing.
    pub fn text(&self, path: &str) -> Option<Cow<'_, str>> {
        match self.lookup(path)? {
            Value::String(text) if !text.trim().is_empty() => Some(Cow::Borrowed(text.as_str())),
            Value::Number(number) => Some(Cow::Owned(number.to_string())),
            Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
            _ => None,
        }
    }

    /// Sequence of mappings at `path`, flattened to text fields.
    pub fn items(&self, path: &str) -> Option<Vec<Item>> {
        let Value::Sequence(entries) = self.lookup(path)? else {
            return None;
        };
        let items = entries
            .iter()
            .filter_map(|entry| match entry {
                Value::Mapping(map) => Some(Item {
                    fields: map
                        .iter()
                        .filter_map(|(key, value)| {
                            Some((key.as_str()?.to_string(), scalar_text(value)?))
                        })
                        .collect(),
                }),
                Value::String(text) => Some(Item {
                    fields: BTreeMap::from([(String::from("title"), text.clone())]),
                }),
                _ => None,
            })
            .collect();
        Some(items)
    }

    /// Dotted paths of every leaf. Sequences count as a single leaf.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaves(&self.root, String::new(), &mut paths);
        paths
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = key.as_str() else { continue };
                let path = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(child, path, out);
            }
        }
        _ if !prefix.is_empty() => out.push(prefix),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
nav:
  home: HOME
  empty: ""
pages:
  faq:
    items:
      - title: Shipping?
        text: Nationwide
      - Plain entry
"#;

    #[test]
    fn dotted_lookup_reads_nested_text() {
        let dict = Dictionary::from_yaml("en", SAMPLE).unwrap();
        assert_eq!(dict.text("nav.home").as_deref(), Some("HOME"));
        assert_eq!(dict.text("nav.empty"), None);
        assert_eq!(dict.text("nav"), None);
        assert_eq!(dict.text("pages.faq.items.0.title").as_deref(), Some("Shipping?"));
    }

    #[test]
    fn items_flatten_mappings_and_bare_strings() {
        let dict = Dictionary::from_yaml("en", SAMPLE).unwrap();
        let items = dict.items("pages.faq.items").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("text"), Some("Nationwide"));
        assert_eq!(items[1].get("title"), Some("Plain entry"));
        assert!(dict.items("nav.home").is_none());
    }

    #[test]
    fn leaf_paths_treat_sequences_as_leaves() {
        let dict = Dictionary::from_yaml("en", SAMPLE).unwrap();
        assert_eq!(
            dict.leaf_paths(),
            vec!["nav.home", "nav.empty", "pages.faq.items"]
        );
    }

    #[test]
    fn top_level_scalar_is_rejected() {
        assert!(matches!(
            Dictionary::from_yaml("xx", "just text"),
            Err(LocaleError::NotAMapping { .. })
        ));
    }
}
