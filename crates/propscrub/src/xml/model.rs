//! XML data model
//!
//! Each element owns its children outright. Removal is always expressed by
//! the parent filtering its own child list, so there are no back-references.

use indexmap::IndexMap;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child element append
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    /// Builder-style text append
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// Mutable counterpart of [`Element::elements`]
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Self> {
        self.children.iter_mut().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// True when the element has no element children. Text does not count.
    pub fn has_no_elements(&self) -> bool {
        self.elements().next().is_none()
    }

    /// Keep only the child elements for which `keep` returns true.
    /// Text children are left in place. Returns how many elements were dropped.
    pub fn retain_elements<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Self) -> bool,
    {
        let before = self.children.len();
        self.children.retain(|child| match child {
            Content::Element(element) => keep(element),
            Content::Text(_) => true,
        });
        before - self.children.len()
    }

    /// Visit this element and every element below it, parents first
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Self),
    {
        visit(self);
        for child in self.elements() {
            child.walk(visit);
        }
    }

    /// Mutable counterpart of [`Element::walk`]
    pub fn walk_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Self),
    {
        visit(self);
        for child in self.elements_mut() {
            child.walk_mut(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_queries_ignore_text() {
        let element = Element::new("props")
            .with_text("\n  ")
            .with_child(Element::new("prop").with_attr("actor", "crate"));

        assert_eq!(element.element_count(), 1);
        assert!(!element.has_no_elements());
        assert!(Element::new("props").with_text("note").has_no_elements());
    }

    #[test]
    fn test_retain_elements_keeps_text() {
        let mut element = Element::new("props")
            .with_child(Element::new("prop").with_attr("actor", "a"))
            .with_text("tail")
            .with_child(Element::new("prop").with_attr("actor", "b"));

        let dropped = element.retain_elements(|e| e.attr("actor") != Some("a"));

        assert_eq!(dropped, 1);
        assert_eq!(element.children.len(), 2);
        assert_eq!(element.children.first(), Some(&Content::Text("tail".to_string())));
    }

    #[test]
    fn test_walk_visits_all_descendants() {
        let root = Element::new("root").with_child(
            Element::new("group").with_child(Element::new("variant").with_child(Element::new("props"))),
        );
        let mut names = Vec::new();
        root.walk(&mut |e| names.push(e.name.clone()));
        assert_eq!(names, ["root", "group", "variant", "props"]);
    }
}
