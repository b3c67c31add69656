//! Attribute normalizer: every variant ends up with a frequency

use crate::scrub::tags::{Tag, DEFAULT_FREQUENCY, FREQUENCY};
use crate::xml::Element;

/// Give every variant below `root` that lacks a `frequency` the default
/// value. Existing values are never rewritten. Returns how many were set.
pub fn normalize(root: &mut Element) -> usize {
    let mut assigned = 0;
    for child in root.elements_mut() {
        child.walk_mut(&mut |element| {
            if Tag::of(element) == Tag::Variant && !element.attributes.contains_key(FREQUENCY) {
                element
                    .attributes
                    .insert(FREQUENCY.to_string(), DEFAULT_FREQUENCY.to_string());
                assigned += 1;
            }
        });
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_missing_frequency_at_any_depth() {
        let mut root = Element::new("variants")
            .with_child(Element::new("variant"))
            .with_child(Element::new("group").with_child(Element::new("variant").with_attr("file", "a")));

        assert_eq!(normalize(&mut root), 2);
        let mut frequencies = Vec::new();
        root.walk(&mut |e| {
            if Tag::of(e) == Tag::Variant {
                frequencies.push(e.attr(FREQUENCY).map(str::to_string));
            }
        });
        assert_eq!(frequencies, [Some("0".to_string()), Some("0".to_string())]);
    }

    #[test]
    fn test_existing_values_untouched() {
        let mut root = Element::new("variants")
            .with_child(Element::new("variant").with_attr(FREQUENCY, "100"))
            .with_child(Element::new("variant").with_attr(FREQUENCY, ""));
        let original = root.clone();

        assert_eq!(normalize(&mut root), 0);
        assert_eq!(root, original);
    }

    #[test]
    fn test_new_attribute_appended_last() {
        let mut root = Element::new("variants")
            .with_child(Element::new("variant").with_attr("file", "hero_skin.asset"));
        normalize(&mut root);

        let variant = root.elements().next();
        let keys: Option<Vec<&str>> =
            variant.map(|v| v.attributes.keys().map(String::as_str).collect());
        assert_eq!(keys, Some(vec!["file", "frequency"]));
    }
}
