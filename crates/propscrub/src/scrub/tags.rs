//! Fixed tag and attribute vocabulary of variant documents

use crate::xml::Element;

pub const ACTOR: &str = "actor";
pub const FILE: &str = "file";
pub const FREQUENCY: &str = "frequency";

/// Frequency assigned to variants that carry none
pub const DEFAULT_FREQUENCY: &str = "0";

/// Element kinds the scrubber knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Group,
    Variant,
    Props,
    Prop,
    Animations,
    Textures,
    Other,
}

impl Tag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "group" => Self::Group,
            "variant" => Self::Variant,
            "props" => Self::Props,
            "prop" => Self::Prop,
            "animations" => Self::Animations,
            "textures" => Self::Textures,
            _ => Self::Other,
        }
    }

    pub fn of(element: &Element) -> Self {
        Self::from_name(&element.name)
    }

    /// Containers exist only to hold items and are meaningless when empty
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Props | Self::Animations | Self::Textures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Tag::from_name("variant"), Tag::Variant);
        assert_eq!(Tag::from_name("Variant"), Tag::Other);
        assert_eq!(Tag::from_name("material"), Tag::Other);
    }

    #[test]
    fn test_containers() {
        assert!(Tag::Props.is_container());
        assert!(Tag::Animations.is_container());
        assert!(Tag::Textures.is_container());
        assert!(!Tag::Group.is_container());
        assert!(!Tag::Prop.is_container());
    }
}
