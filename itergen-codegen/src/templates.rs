//! Template store.
//!
//! Templates are embedded at compile time and keyed by section name; channel
//! variants carry a `chan_` prefix (e.g., `chan_map`).

use std::collections::BTreeMap;

use crate::{Error, Kind, Result};

/// Key prefix of channel-kind templates.
pub const CHANNEL_PREFIX: &str = "chan_";

const EMBEDDED: &[(&str, &str)] = &[
    ("imports", include_str!("../templates/imports.tgo")),
    ("type", include_str!("../templates/plain/type.tgo")),
    ("map", include_str!("../templates/plain/map.tgo")),
    ("map_results", include_str!("../templates/plain/map_results.tgo")),
    ("filter", include_str!("../templates/plain/filter.tgo")),
    ("all", include_str!("../templates/plain/all.tgo")),
    ("some", include_str!("../templates/plain/some.tgo")),
    ("foreach", include_str!("../templates/plain/foreach.tgo")),
    ("concat", include_str!("../templates/plain/concat.tgo")),
    ("find", include_str!("../templates/plain/find.tgo")),
    ("reverse", include_str!("../templates/plain/reverse.tgo")),
    ("splice", include_str!("../templates/plain/splice.tgo")),
    ("reduce", include_str!("../templates/plain/reduce.tgo")),
    ("chan_imports", include_str!("../templates/imports.tgo")),
    ("chan_type", include_str!("../templates/chan/type.tgo")),
    ("chan_map", include_str!("../templates/chan/map.tgo")),
    ("chan_map_results", include_str!("../templates/chan/map_results.tgo")),
    ("chan_filter", include_str!("../templates/chan/filter.tgo")),
    ("chan_foreach", include_str!("../templates/chan/foreach.tgo")),
    ("chan_concat", include_str!("../templates/chan/concat.tgo")),
    ("chan_reduce", include_str!("../templates/chan/reduce.tgo")),
    ("chan_array", include_str!("../templates/chan/array.tgo")),
];

/// Immutable mapping from template key to template text.
///
/// Built once and shared by reference with the renderer.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: BTreeMap<String, String>,
}

impl TemplateStore {
    /// The templates shipped with the binary.
    pub fn embedded() -> Self {
        Self::from_entries(EMBEDDED.iter().copied())
    }

    /// Build a store from `(key, text)` pairs.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Full key of a section template for the given kind.
    pub fn key(section_key: &str, kind: Kind) -> String {
        match kind {
            Kind::Plain => section_key.to_string(),
            Kind::Channel => format!("{}{}", CHANNEL_PREFIX, section_key),
        }
    }

    /// Look up a template text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] if the key is unknown.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.templates
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::template_not_found(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capability, Section};

    #[test]
    fn test_embedded_type_template() {
        let store = TemplateStore::embedded();
        let text = store.get("type").unwrap();
        assert_eq!(
            text,
            "\ntype {{ name }}Iter []{{ ty }}\n\nfunc New{{ name }}Iter(items ...{{ ty }}) {{ name }}Iter {\n\treturn {{ name }}Iter(items)\n}\n"
        );
    }

    #[test]
    fn test_key_prefix() {
        assert_eq!(TemplateStore::key("map", Kind::Plain), "map");
        assert_eq!(TemplateStore::key("map", Kind::Channel), "chan_map");
    }

    #[test]
    fn test_every_supported_section_has_a_template() {
        let store = TemplateStore::embedded();
        for kind in [Kind::Plain, Kind::Channel] {
            for section in Section::ALL {
                let Some(key) = section.template_key() else {
                    continue;
                };
                let supported = match section {
                    Section::Imports | Section::Type => true,
                    Section::MapResults => kind.supports(Capability::Map),
                    _ => Capability::ALL
                        .into_iter()
                        .find(|c| c.flag() == key)
                        .is_some_and(|c| kind.supports(c)),
                };
                let full = TemplateStore::key(key, kind);
                assert_eq!(store.contains(&full), supported, "{full}");
            }
        }
    }

    #[test]
    fn test_missing_template() {
        let store = TemplateStore::from_entries([("type", "type {{ name }}Iter")]);
        let err = store.get("chan_type").unwrap_err();
        assert!(matches!(*err, Error::TemplateNotFound { ref key } if key == "chan_type"));
    }
}
