//! Emptiness pruner
//!
//! Children are resolved before their parent is judged, so a props container
//! that empties out can take its variant and then its group with it.

use crate::scrub::tags::{Tag, FILE, FREQUENCY};
use crate::xml::Element;

/// Frequencies at which a childless, fileless variant is removed on its own
const REMOVABLE_VARIANT: &[&str] = &["0"];

/// Frequencies at which a group's only variant makes the group useless.
/// Wider than [`REMOVABLE_VARIANT`] on purpose: a lone full-weight
/// placeholder does not justify keeping its group.
const USELESS_LONE_VARIANT: &[&str] = &["0", "100"];

/// Remove empty structure below `element`, depth-first. `element` itself is
/// never removed. Returns the number of elements removed.
pub fn prune(element: &mut Element) -> usize {
    let mut removed = 0;
    for child in element.elements_mut() {
        removed += prune(child);
    }
    removed + element.retain_elements(|child| !is_prunable(child))
}

fn is_prunable(element: &Element) -> bool {
    match Tag::of(element) {
        tag if tag.is_container() => element.has_no_elements(),
        Tag::Variant => is_empty_variant(element, REMOVABLE_VARIANT),
        Tag::Group => element.has_no_elements() || has_useless_lone_variant(element),
        _ => false,
    }
}

fn has_useless_lone_variant(group: &Element) -> bool {
    let mut elements = group.elements();
    match (elements.next(), elements.next()) {
        (Some(only), None) => {
            Tag::of(only) == Tag::Variant && is_empty_variant(only, USELESS_LONE_VARIANT)
        }
        _ => false,
    }
}

/// A variant is empty when it has no child elements, no file, and one of the
/// given frequencies. An empty `file` value counts as no file.
fn is_empty_variant(variant: &Element, frequencies: &[&str]) -> bool {
    let has_file = variant.attr(FILE).is_some_and(|file| !file.is_empty());
    variant.has_no_elements()
        && !has_file
        && variant
            .attr(FREQUENCY)
            .is_some_and(|frequency| frequencies.contains(&frequency))
}
