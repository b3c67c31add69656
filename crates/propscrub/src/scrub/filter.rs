//! Content filter: finds and removes disallowed props

use crate::scrub::marker::is_disallowed;
use crate::scrub::tags::{Tag, ACTOR};
use crate::xml::Element;

/// What the filter found and removed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// At least one disallowed prop was present
    pub found: bool,
    pub props_removed: usize,
    pub containers_removed: usize,
}

/// True when `element` is a prop whose actor matches the marker.
/// A missing actor is treated as the empty string.
pub fn is_disallowed_prop(element: &Element) -> bool {
    Tag::of(element) == Tag::Prop && is_disallowed(element.attr(ACTOR).unwrap_or_default())
}

/// Scan every element below `root`, at any depth, for a disallowed prop.
pub fn contains_disallowed(root: &Element) -> bool {
    root.elements().any(|child| {
        let mut found = false;
        child.walk(&mut |e| found |= is_disallowed_prop(e));
        found
    })
}

/// Remove every disallowed prop below `root`, then every props container
/// left without elements.
///
/// When nothing matches the tree is not touched at all and the report has
/// `found == false`.
pub fn filter(root: &mut Element) -> FilterReport {
    if !contains_disallowed(root) {
        return FilterReport::default();
    }

    let props_removed = strip_props(root);
    let containers_removed = drop_empty_props(root);

    FilterReport {
        found: true,
        props_removed,
        containers_removed,
    }
}

fn strip_props(element: &mut Element) -> usize {
    let mut removed = element.retain_elements(|child| !is_disallowed_prop(child));
    for child in element.elements_mut() {
        removed += strip_props(child);
    }
    removed
}

fn drop_empty_props(element: &mut Element) -> usize {
    let mut removed = 0;
    for child in element.elements_mut() {
        removed += drop_empty_props(child);
    }
    removed += element
        .retain_elements(|child| !(Tag::of(child) == Tag::Props && child.has_no_elements()));
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(actor: &str) -> Element {
        Element::new("prop").with_attr(ACTOR, actor)
    }

    #[test]
    fn test_no_match_leaves_tree_alone() {
        let original = Element::new("variants").with_child(
            Element::new("group")
                .with_child(Element::new("variant").with_child(Element::new("props"))),
        );
        let mut root = original.clone();

        let report = filter(&mut root);

        assert_eq!(report, FilterReport::default());
        assert_eq!(root, original);
    }

    #[test]
    fn test_detects_prop_directly_under_variant() {
        let root = Element::new("variants").with_child(
            Element::new("group").with_child(Element::new("variant").with_child(prop("Gore_blood"))),
        );
        assert!(contains_disallowed(&root));
    }

    #[test]
    fn test_prop_without_actor_is_not_disallowed() {
        assert!(!is_disallowed_prop(&Element::new("prop")));
        assert!(!is_disallowed_prop(&Element::new("props").with_attr(ACTOR, "blood")));
    }

    #[test]
    fn test_removes_matches_and_emptied_props() {
        let mut root = Element::new("variants").with_child(
            Element::new("variant")
                .with_child(Element::new("props").with_child(prop("BLOOD_pool")))
                .with_child(
                    Element::new("props")
                        .with_child(prop("crate"))
                        .with_child(prop("blood_decal")),
                ),
        );

        let report = filter(&mut root);

        assert_eq!(
            report,
            FilterReport {
                found: true,
                props_removed: 2,
                containers_removed: 1,
            }
        );
        let expected = Element::new("variants").with_child(
            Element::new("variant").with_child(Element::new("props").with_child(prop("crate"))),
        );
        assert_eq!(root, expected);
    }

    #[test]
    fn test_removes_prop_directly_under_variant() {
        let mut root = Element::new("variants").with_child(
            Element::new("variant")
                .with_child(prop("Gore_blood"))
                .with_child(prop("lamp")),
        );

        let report = filter(&mut root);

        assert_eq!(report.props_removed, 1);
        assert!(!contains_disallowed(&root));
        assert_eq!(
            root,
            Element::new("variants")
                .with_child(Element::new("variant").with_child(prop("lamp")))
        );
    }

    #[test]
    fn test_drops_props_that_were_already_empty() {
        let mut root = Element::new("variants")
            .with_child(Element::new("props"))
            .with_child(Element::new("props").with_child(prop("blood")));

        let report = filter(&mut root);

        assert_eq!(report.containers_removed, 2);
        assert!(root.has_no_elements());
    }
}
