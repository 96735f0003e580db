//! Placeholder substitution.
//!
//! A placeholder is `{{`, optional whitespace, the key, optional whitespace and `}}`.
//! Only the first occurrence of every key is substituted; further occurrences
//! of the same placeholder are left as they are, just like placeholders whose key
//! the renderer does not know.
//!
//! All matches are located in the original template and spliced in a single
//! pass, so a substituted value is never matched against another placeholder.

// Built-in deps
use std::{collections::HashMap, ops::Range};
// External uses
use regex::Regex;
// Local uses
use crate::error::TemplateError;

/// Values of the placeholders, by key.
pub type Vars = HashMap<String, String>;

#[derive(Debug, Clone)]
struct Placeholder {
    key: String,
    pattern: Regex,
}

impl Placeholder {
    fn new(key: &str) -> Result<Self, TemplateError> {
        let pattern = Regex::new(&format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(key)))
            .map_err(|source| TemplateError::InvalidPattern {
                key: key.to_string(),
                source,
            })?;

        Ok(Self {
            key: key.to_string(),
            pattern,
        })
    }
}

/// Renderer for a fixed, ordered set of placeholder keys.
///
/// Patterns are compiled once, so the same renderer can be reused for every
/// history entry.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    placeholders: Vec<Placeholder>,
}

impl TemplateRenderer {
    /// Creates a renderer for `keys`. Repeated keys are only kept once.
    pub fn new<K: AsRef<str>>(keys: &[K]) -> Result<Self, TemplateError> {
        let mut placeholders: Vec<Placeholder> = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            if placeholders.iter().any(|placeholder| placeholder.key == key) {
                continue;
            }
            placeholders.push(Placeholder::new(key)?);
        }

        Ok(Self { placeholders })
    }

    /// Keys substituted by this renderer, in substitution order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.placeholders
            .iter()
            .map(|placeholder| placeholder.key.as_str())
    }

    /// Substitutes the first occurrence of every known placeholder with its value from `lookup`.
    ///
    /// Fails with [`TemplateError::UnresolvedPlaceholder`] if the template uses a
    /// known placeholder that has no value in `lookup`.
    pub fn render(&self, lookup: &Vars, template: &str) -> Result<String, TemplateError> {
        let mut substitutions: Vec<(Range<usize>, &str)> = Vec::new();

        for placeholder in &self.placeholders {
            let found = match placeholder.pattern.find(template) {
                Some(found) => found,
                None => {
                    vlog::trace!("Placeholder {} is not used in the template", placeholder.key);
                    continue;
                }
            };
            let value = lookup
                .get(&placeholder.key)
                .ok_or_else(|| TemplateError::UnresolvedPlaceholder(placeholder.key.clone()))?;

            substitutions.push((found.range(), value.as_str()));
        }

        // Stable: on equal starts the key listed first wins.
        substitutions.sort_by_key(|(range, _)| range.start);

        let mut rendered = String::with_capacity(template.len());
        let mut cursor = 0;
        for (range, value) in substitutions {
            if range.start < cursor {
                // Overlaps a placeholder that was already substituted.
                continue;
            }
            rendered.push_str(&template[cursor..range.start]);
            rendered.push_str(value);
            cursor = range.end;
        }
        rendered.push_str(&template[cursor..]);

        Ok(rendered)
    }
}

/// One-shot rendering of `template` for the placeholders listed in `keys`.
pub fn render<K: AsRef<str>>(
    keys: &[K],
    lookup: &Vars,
    template: &str,
) -> Result<String, TemplateError> {
    TemplateRenderer::new(keys)?.render(lookup, template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vars {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn single_placeholder() {
        let lookup = vars(&[("A", "0xCAFE")]);
        assert_eq!(render(&["A"], &lookup, "{{ A }}").unwrap(), "0xCAFE");
    }

    #[test]
    fn keeps_surrounding_text() {
        let template = "# Addresses\n\n| Mangrove | {{Mangrove}} |\n| Reader | {{   MgvReader\t}} |\n";
        let lookup = vars(&[("Mangrove", "0x1"), ("MgvReader", "0x2")]);

        let rendered = render(&["Mangrove", "MgvReader"], &lookup, template).unwrap();

        assert_eq!(
            rendered,
            "# Addresses\n\n| Mangrove | 0x1 |\n| Reader | 0x2 |\n"
        );
    }

    #[test]
    fn only_first_occurrence_is_substituted() {
        let lookup = vars(&[("A", "0x1")]);
        assert_eq!(
            render(&["A"], &lookup, "{{ A }} and {{ A }}").unwrap(),
            "0x1 and {{ A }}"
        );
    }

    #[test]
    fn unknown_placeholders_are_untouched() {
        let lookup = vars(&[("A", "0x1")]);
        assert_eq!(
            render(&["A"], &lookup, "{{ A }} {{ B }} {{A}}x").unwrap(),
            "0x1 {{ B }} {{A}}x"
        );
    }

    #[test]
    fn placeholder_key_is_matched_literally() {
        let lookup = vars(&[("a.b", "dot")]);
        assert_eq!(
            render(&["a.b"], &lookup, "{{ axb }} {{ a.b }}").unwrap(),
            "{{ axb }} dot"
        );
    }

    #[test]
    fn missing_value_fails() {
        let lookup = vars(&[("A", "0x1")]);
        let err = render(&["A", "B"], &lookup, "{{ A }} {{ B }}").unwrap_err();
        assert!(matches!(err, TemplateError::UnresolvedPlaceholder(key) if key == "B"));

        // Not referenced by the template: nothing to resolve.
        assert_eq!(render(&["A", "B"], &lookup, "{{ A }}").unwrap(), "0x1");
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let lookup = vars(&[("A", "$1 ${B} {{ B }}"), ("B", "0x2")]);
        assert_eq!(
            render(&["A", "B"], &lookup, "{{ A }} / {{ B }}").unwrap(),
            "$1 ${B} {{ B }} / 0x2"
        );
    }

    #[test]
    fn substitution_does_not_depend_on_key_order() {
        let lookup = vars(&[("A", "1"), ("B", "2"), ("id", "7")]);
        let template = "v{{ id }}: {{ B }}, {{ A }}";

        let forward = render(&["A", "B", "id"], &lookup, template).unwrap();
        let backward = render(&["id", "B", "A"], &lookup, template).unwrap();

        assert_eq!(forward, "v7: 2, 1");
        assert_eq!(forward, backward);
    }

    #[test]
    fn renderer_is_reusable() {
        let renderer = TemplateRenderer::new(&["A", "A", "id"]).unwrap();
        assert_eq!(renderer.keys().collect::<Vec<_>>(), vec!["A", "id"]);

        for id in 1..=3 {
            let id = id.to_string();
            let lookup = vars(&[("A", "0x1"), ("id", id.as_str())]);
            assert_eq!(
                renderer.render(&lookup, "{{ id }}={{ A }}").unwrap(),
                format!("{}=0x1", id)
            );
        }
    }

    #[test]
    fn template_without_placeholders() {
        let lookup = Vars::new();
        let empty: [&str; 0] = [];
        assert_eq!(render(&empty, &lookup, "plain text").unwrap(), "plain text");
        assert_eq!(render(&["A"], &lookup, "").unwrap(), "");
    }
}
